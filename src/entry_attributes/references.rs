// ── sorng-entry-attributes / references ────────────────────────────────────────
//
// Reference macro detection and parsing.  A value of the form
// `{REF:<code>@I:<uuid>}` is an indirection to a field of another entry.
// Only the syntax is handled here; looking up the target entry and reading
// its field stays with the entry-resolution layer, which keeps this container
// independent of any whole-database view (and makes reference cycles its
// problem, not ours).

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use super::attributes::EntryAttributes;
use super::keys;
use super::types::{Reference, ReferenceField};

const UUID_PATTERN: &str =
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

lazy_static! {
    /// Anchored whole-string match.  `REF`, `I`, the field code, and the hex
    /// digits are all case-insensitive.
    static ref FULL_REFERENCE: Regex = Regex::new(&format!(
        r"(?i)^\{{REF:(?P<WantedField>[TUPAN])@I:(?P<SearchText>{})\}}$",
        UUID_PATTERN
    ))
    .expect("reference pattern must compile");

    /// Unanchored variant used only to detect embedded occurrences.
    static ref EMBEDDED_REFERENCE: Regex = Regex::new(&format!(
        r"(?i)\{{REF:[TUPAN]@I:{}\}}",
        UUID_PATTERN
    ))
    .expect("reference pattern must compile");
}

impl ReferenceField {
    /// Single-letter field code used inside the macro.
    pub fn code(self) -> char {
        match self {
            Self::Title => 'T',
            Self::UserName => 'U',
            Self::Password => 'P',
            Self::Url => 'A',
            Self::Notes => 'N',
        }
    }

    /// Parse a field code, case-insensitively.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'T' => Some(Self::Title),
            'U' => Some(Self::UserName),
            'P' => Some(Self::Password),
            'A' => Some(Self::Url),
            'N' => Some(Self::Notes),
            _ => None,
        }
    }

    /// The default attribute key this code addresses on the target entry.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => keys::TITLE_KEY,
            Self::UserName => keys::USERNAME_KEY,
            Self::Password => keys::PASSWORD_KEY,
            Self::Url => keys::URL_KEY,
            Self::Notes => keys::NOTES_KEY,
        }
    }
}

impl Reference {
    /// Render the canonical macro text for this reference.
    pub fn to_macro(self) -> String {
        format!("{{REF:{}@I:{}}}", self.field.code(), self.uuid)
    }
}

/// Parse `text` as a single reference macro.  The match is anchored to the
/// whole string: text that merely contains a reference-like substring is
/// literal text, not a reference.
pub fn match_reference(text: &str) -> Option<Reference> {
    let caps = FULL_REFERENCE.captures(text)?;
    let code = caps.name("WantedField")?.as_str().chars().next()?;
    let field = ReferenceField::from_code(code)?;
    let uuid = Uuid::parse_str(caps.name("SearchText")?.as_str()).ok()?;
    Some(Reference { field, uuid })
}

/// Whether `text` contains a reference macro anywhere.  Detection signal
/// only; embedded occurrences are never resolved.
pub fn contains_reference(text: &str) -> bool {
    EMBEDDED_REFERENCE.is_match(text)
}

impl EntryAttributes {
    /// Whether the stored value of `key` is, in its entirety, a reference.
    pub fn is_reference(&self, key: &str) -> bool {
        match_reference(self.value(key)).is_some()
    }

    /// UUID of the entry referenced by `key`'s value, when that value fully
    /// matches the reference pattern.
    pub fn reference_uuid(&self, key: &str) -> Option<Uuid> {
        match_reference(self.value(key)).map(|r| r.uuid)
    }
}
