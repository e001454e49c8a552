// ── sorng-entry-attributes / types ─────────────────────────────────────────────
//
// All types for the entry attribute store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Change Notifications ─────────────────────────────────────────────────────

/// Describes a single change applied to an entry's attribute set.
///
/// Every mutating operation returns the change it produced so that callers
/// (UI refresh, undo recording, persistence) can react without subscribing to
/// an event system.  Reset-style operations collapse any number of underlying
/// changes into one `Reset` so consumers can batch-invalidate instead of
/// processing N removals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeChange {
    /// A new key was appended to the end of iteration order.
    Added { key: String },
    /// A key and its protection flag were removed.
    Removed { key: String },
    /// A key was renamed in place, keeping value, protection, and position.
    Renamed { old_key: String, new_key: String },
    /// One of the system-reserved fields changed value or protection.
    DefaultKeyModified { key: String },
    /// A custom field changed value or protection.
    CustomKeyModified { key: String },
    /// The whole map was replaced or cleared in a single step.
    Reset,
}

// ─── References ───────────────────────────────────────────────────────────────

/// The target field a reference macro points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReferenceField {
    Title,
    UserName,
    Password,
    Url,
    Notes,
}

/// A parsed `{REF:<code>@I:<uuid>}` value: which field of which entry to
/// substitute.  Resolution (uuid → entry → field value) is the caller's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    /// Field of the target entry to read.
    pub field: ReferenceField,
    /// UUID of the target entry.
    pub uuid: Uuid,
}

// ─── Snapshots / Listings ─────────────────────────────────────────────────────

/// One attribute as persisted: key, literal value, protection flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeItem {
    pub key: String,
    pub value: String,
    pub protected: bool,
}

/// A lossless snapshot of an attribute set in iteration order.  The
/// persistence layer round-trips through this at save/load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributesSnapshot {
    pub items: Vec<AttributeItem>,
}

/// Attribute summary for list views.  Protected values are withheld; the
/// frontend requests them individually when the user reveals a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSummary {
    pub key: String,
    /// The stored value, or `None` when the attribute is protected.
    pub value: Option<String>,
    pub protected: bool,
    pub is_default: bool,
    pub is_reference: bool,
}

// ─── Requests ─────────────────────────────────────────────────────────────────

/// Request to insert or overwrite an attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAttributeRequest {
    pub key: String,
    pub value: String,
    /// Whether to flag the attribute confidential.  Defaults to plaintext.
    #[serde(default)]
    pub protect: bool,
}

/// Request to rename an attribute key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameAttributeRequest {
    pub old_key: String,
    pub new_key: String,
}

// ─── Change Log ───────────────────────────────────────────────────────────────

/// A recorded attribute change, kept by the service for undo/history display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    pub id: String,
    pub timestamp: String,
    /// Entry whose attribute set changed.
    pub entry_id: String,
    pub change: AttributeChange,
    pub description: String,
}
