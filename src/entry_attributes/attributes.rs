// ── sorng-entry-attributes / attributes ────────────────────────────────────────
//
// The core attribute store: an insertion-ordered key → value text map with a
// protection flag per key.  Owned by exactly one entry; no internal locking.
// Mutating operations return the `AttributeChange` they produced (or nothing
// when the call was a no-op) so callers can drive UI refresh, undo recording,
// and persistence without an event system.

use std::collections::{HashMap, HashSet};

use super::keys::{is_default_attribute, DEFAULT_ATTRIBUTES};
use super::types::{AttributeChange, AttributeItem, AttributesSnapshot};

/// Ordered attribute map for a single credential entry.
///
/// Iteration order is insertion order.  The five default keys (`Title`,
/// `UserName`, `Password`, `URL`, `Notes`) are bootstrapped with empty values
/// on construction and after `clear`, so UI layout code can always render
/// them.  Protection is a classification only; encryption of protected values
/// happens in the persistence layer.
#[derive(Debug, Clone)]
pub struct EntryAttributes {
    /// Keys in iteration order.
    order: Vec<String>,
    /// Key → stored text.
    values: HashMap<String, String>,
    /// Keys currently flagged confidential.  Always a subset of `values`.
    protected: HashSet<String>,
}

impl EntryAttributes {
    /// Create an attribute set holding the default keys with empty values.
    pub fn new() -> Self {
        let mut attrs = Self {
            order: Vec::new(),
            values: HashMap::new(),
            protected: HashSet::new(),
        };
        attrs.bootstrap_defaults();
        attrs
    }

    fn bootstrap_defaults(&mut self) {
        for key in DEFAULT_ATTRIBUTES {
            self.order.push(key.to_string());
            self.values.insert(key.to_string(), String::new());
        }
    }

    // ─── Queries ──────────────────────────────────────────────────────

    /// All keys in iteration order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// Keys outside the default set, in iteration order.
    pub fn custom_keys(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|k| !is_default_attribute(k))
            .cloned()
            .collect()
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether any attribute stores exactly `value`.
    pub fn contains_value(&self, value: &str) -> bool {
        self.values.values().any(|v| v == value)
    }

    /// The stored text for `key`, or the empty string when absent.  Absence
    /// is a normal silent case; query it via [`contains`](Self::contains).
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Values for the given keys, preserving the caller's order.  Absent keys
    /// yield empty strings.
    pub fn values(&self, keys: &[String]) -> Vec<String> {
        keys.iter().map(|k| self.value(k).to_string()).collect()
    }

    /// Whether `key` is currently flagged confidential.
    pub fn is_protected(&self, key: &str) -> bool {
        self.protected.contains(key)
    }

    /// Number of stored attributes (including bootstrapped defaults).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True only for sets rebuilt from an empty snapshot; freshly
    /// constructed sets always carry the bootstrapped default keys.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total encoded size: the sum of key and value byte lengths.  Computed
    /// on demand; callers use it to enforce storage limits.
    pub fn attributes_size(&self) -> usize {
        self.order
            .iter()
            .map(|k| k.len() + self.value(k).len())
            .sum()
    }

    // ─── Mutations ────────────────────────────────────────────────────

    /// Insert or overwrite an attribute.
    ///
    /// A new key is appended to the end of iteration order and yields
    /// `Added`.  An existing key is updated in place without reordering and
    /// yields `DefaultKeyModified` or `CustomKeyModified`.  A call that
    /// changes neither value nor protection yields `None`.
    pub fn set(&mut self, key: &str, value: &str, protect: bool) -> Option<AttributeChange> {
        match self.values.get(key) {
            Some(existing) => {
                if existing == value && self.protected.contains(key) == protect {
                    return None;
                }
                self.values.insert(key.to_string(), value.to_string());
                if protect {
                    self.protected.insert(key.to_string());
                } else {
                    self.protected.remove(key);
                }
                if is_default_attribute(key) {
                    Some(AttributeChange::DefaultKeyModified { key: key.to_string() })
                } else {
                    Some(AttributeChange::CustomKeyModified { key: key.to_string() })
                }
            }
            None => {
                self.order.push(key.to_string());
                self.values.insert(key.to_string(), value.to_string());
                if protect {
                    self.protected.insert(key.to_string());
                }
                Some(AttributeChange::Added { key: key.to_string() })
            }
        }
    }

    /// Remove an attribute and its protection flag.  No-op when absent.
    pub fn remove(&mut self, key: &str) -> Option<AttributeChange> {
        if !self.values.contains_key(key) {
            return None;
        }
        self.order.retain(|k| k != key);
        self.values.remove(key);
        self.protected.remove(key);
        Some(AttributeChange::Removed { key: key.to_string() })
    }

    /// Rename `old_key` to `new_key`, preserving value, protection flag, and
    /// position in iteration order.
    ///
    /// Errors when `old_key` is absent or `new_key` already exists, so the
    /// editor can reject the rename and keep focus.  Renaming a key to itself
    /// is a silent no-op.
    pub fn rename(&mut self, old_key: &str, new_key: &str) -> Result<Option<AttributeChange>, String> {
        if !self.values.contains_key(old_key) {
            return Err(format!("Attribute not found: {}", old_key));
        }
        if old_key == new_key {
            return Ok(None);
        }
        if self.values.contains_key(new_key) {
            return Err(format!("Attribute already exists: {}", new_key));
        }

        let value = self.values.remove(old_key).unwrap_or_default();
        self.values.insert(new_key.to_string(), value);
        if self.protected.remove(old_key) {
            self.protected.insert(new_key.to_string());
        }
        if let Some(slot) = self.order.iter_mut().find(|k| *k == old_key) {
            *slot = new_key.to_string();
        }

        Ok(Some(AttributeChange::Renamed {
            old_key: old_key.to_string(),
            new_key: new_key.to_string(),
        }))
    }

    /// Remove everything and re-bootstrap the default keys, as one atomic
    /// reset (a single event, not N removals).
    pub fn clear(&mut self) -> AttributeChange {
        self.order.clear();
        self.values.clear();
        self.protected.clear();
        self.bootstrap_defaults();
        AttributeChange::Reset
    }

    /// Replace the entire map and protection set with a snapshot of `other`.
    pub fn copy_data_from(&mut self, other: &EntryAttributes) -> AttributeChange {
        self.order = other.order.clone();
        self.values = other.values.clone();
        self.protected = other.protected.clone();
        AttributeChange::Reset
    }

    /// Replace this set's custom keys with `other`'s custom keys, leaving the
    /// default keys untouched.  Used when applying a template or inherited
    /// attribute set without clobbering identity fields.  Yields one `Reset`
    /// when anything changed, `None` otherwise.
    pub fn copy_custom_keys_from(&mut self, other: &EntryAttributes) -> Option<AttributeChange> {
        if !self.are_custom_keys_different(other) {
            return None;
        }

        for key in self.custom_keys() {
            self.order.retain(|k| *k != key);
            self.values.remove(&key);
            self.protected.remove(&key);
        }
        for key in other.custom_keys() {
            self.order.push(key.clone());
            self.values.insert(key.clone(), other.value(&key).to_string());
            if other.is_protected(&key) {
                self.protected.insert(key);
            }
        }

        Some(AttributeChange::Reset)
    }

    /// Structural comparison limited to the custom-key subset: key presence,
    /// value, and protection flag.  Detects meaningful edits distinct from
    /// the system fields.
    pub fn are_custom_keys_different(&self, other: &EntryAttributes) -> bool {
        let mine: HashSet<&str> = self.custom_keys_set();
        let theirs: HashSet<&str> = other.custom_keys_set();
        if mine != theirs {
            return true;
        }
        mine.iter().any(|key| {
            self.value(key) != other.value(key) || self.is_protected(key) != other.is_protected(key)
        })
    }

    fn custom_keys_set(&self) -> HashSet<&str> {
        self.order
            .iter()
            .filter(|k| !is_default_attribute(k))
            .map(String::as_str)
            .collect()
    }

    // ─── Snapshots ────────────────────────────────────────────────────

    /// Lossless snapshot in iteration order, for the persistence layer.
    pub fn to_snapshot(&self) -> AttributesSnapshot {
        AttributesSnapshot {
            items: self
                .order
                .iter()
                .map(|key| AttributeItem {
                    key: key.clone(),
                    value: self.value(key).to_string(),
                    protected: self.is_protected(key),
                })
                .collect(),
        }
    }

    /// Rebuild an attribute set exactly as snapshotted, including order and
    /// protection flags.  The snapshot is authoritative: default keys are not
    /// re-bootstrapped if it lacks them.
    pub fn from_snapshot(snapshot: &AttributesSnapshot) -> Self {
        let mut attrs = Self {
            order: Vec::new(),
            values: HashMap::new(),
            protected: HashSet::new(),
        };
        for item in &snapshot.items {
            if attrs.values.contains_key(&item.key) {
                continue;
            }
            attrs.order.push(item.key.clone());
            attrs.values.insert(item.key.clone(), item.value.clone());
            if item.protected {
                attrs.protected.insert(item.key.clone());
            }
        }
        attrs
    }
}

impl Default for EntryAttributes {
    fn default() -> Self {
        Self::new()
    }
}

/// Content-based equality: same keys with the same values and protection
/// flags.  Insertion order is deliberately ignored.
impl PartialEq for EntryAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.protected == other.protected
    }
}

impl Eq for EntryAttributes {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry_attributes::keys::{PASSWORD_KEY, TITLE_KEY};

    #[test]
    fn test_new_bootstraps_default_keys() {
        let attrs = EntryAttributes::new();
        assert_eq!(
            attrs.keys(),
            &["Title", "UserName", "Password", "URL", "Notes"]
        );
        assert_eq!(attrs.value(TITLE_KEY), "");
        assert!(attrs.custom_keys().is_empty());
    }

    #[test]
    fn test_set_appends_new_key() {
        let mut attrs = EntryAttributes::new();
        let change = attrs.set("Server", "db01", false);
        assert_eq!(
            change,
            Some(AttributeChange::Added { key: "Server".to_string() })
        );
        assert_eq!(attrs.keys().last().map(String::as_str), Some("Server"));
        assert_eq!(attrs.value("Server"), "db01");
    }

    #[test]
    fn test_set_overwrite_keeps_position() {
        let mut attrs = EntryAttributes::new();
        attrs.set("a", "1", false);
        attrs.set("b", "2", false);
        let change = attrs.set("a", "changed", false);
        assert_eq!(
            change,
            Some(AttributeChange::CustomKeyModified { key: "a".to_string() })
        );
        let pos_a = attrs.keys().iter().position(|k| k == "a").unwrap();
        let pos_b = attrs.keys().iter().position(|k| k == "b").unwrap();
        assert!(pos_a < pos_b);
        assert_eq!(attrs.value("a"), "changed");
        assert_eq!(attrs.keys().len(), 7);
    }

    #[test]
    fn test_set_distinguishes_default_and_custom_modification() {
        let mut attrs = EntryAttributes::new();
        assert_eq!(
            attrs.set(PASSWORD_KEY, "hunter2", true),
            Some(AttributeChange::DefaultKeyModified { key: "Password".to_string() })
        );
        attrs.set("Port", "5432", false);
        assert_eq!(
            attrs.set("Port", "5433", false),
            Some(AttributeChange::CustomKeyModified { key: "Port".to_string() })
        );
    }

    #[test]
    fn test_set_noop_yields_nothing() {
        let mut attrs = EntryAttributes::new();
        attrs.set("k", "v", true);
        assert_eq!(attrs.set("k", "v", true), None);
    }

    #[test]
    fn test_protection_overwritten_independently_of_value() {
        let mut attrs = EntryAttributes::new();
        attrs.set("pin", "0000", true);
        assert!(attrs.is_protected("pin"));
        let change = attrs.set("pin", "0000", false);
        assert!(change.is_some());
        assert!(!attrs.is_protected("pin"));
        assert_eq!(attrs.value("pin"), "0000");
    }

    #[test]
    fn test_remove_clears_protection_flag() {
        let mut attrs = EntryAttributes::new();
        attrs.set("secret", "s3cret", true);
        assert_eq!(
            attrs.remove("secret"),
            Some(AttributeChange::Removed { key: "secret".to_string() })
        );
        assert!(!attrs.contains("secret"));
        assert!(!attrs.is_protected("secret"));
        // Re-adding without protection must not resurrect the old flag.
        attrs.set("secret", "other", false);
        assert!(!attrs.is_protected("secret"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut attrs = EntryAttributes::new();
        assert_eq!(attrs.remove("missing"), None);
    }

    #[test]
    fn test_rename_preserves_value_protection_and_position() {
        let mut attrs = EntryAttributes::new();
        attrs.set("first", "1", true);
        attrs.set("second", "2", false);
        let change = attrs.rename("first", "renamed").unwrap();
        assert_eq!(
            change,
            Some(AttributeChange::Renamed {
                old_key: "first".to_string(),
                new_key: "renamed".to_string(),
            })
        );
        assert_eq!(attrs.value("renamed"), "1");
        assert!(attrs.is_protected("renamed"));
        assert!(!attrs.contains("first"));
        let pos_renamed = attrs.keys().iter().position(|k| k == "renamed").unwrap();
        let pos_second = attrs.keys().iter().position(|k| k == "second").unwrap();
        assert!(pos_renamed < pos_second);
    }

    #[test]
    fn test_rename_missing_source_fails() {
        let mut attrs = EntryAttributes::new();
        assert!(attrs.rename("nope", "other").is_err());
    }

    #[test]
    fn test_rename_collision_fails() {
        let mut attrs = EntryAttributes::new();
        attrs.set("a", "1", false);
        attrs.set("b", "2", false);
        assert!(attrs.rename("a", "b").is_err());
        assert_eq!(attrs.value("a"), "1");
        assert_eq!(attrs.value("b"), "2");
    }

    #[test]
    fn test_rename_to_self_is_noop() {
        let mut attrs = EntryAttributes::new();
        attrs.set("a", "1", false);
        assert_eq!(attrs.rename("a", "a").unwrap(), None);
        assert_eq!(attrs.value("a"), "1");
    }

    #[test]
    fn test_clear_is_single_reset_and_rebootstraps() {
        let mut attrs = EntryAttributes::new();
        attrs.set("x", "1", true);
        attrs.set("y", "2", false);
        assert_eq!(attrs.clear(), AttributeChange::Reset);
        assert_eq!(
            attrs.keys(),
            &["Title", "UserName", "Password", "URL", "Notes"]
        );
        assert!(!attrs.is_protected("x"));
        assert!(attrs.custom_keys().is_empty());
    }

    #[test]
    fn test_copy_data_from_yields_equal_set_and_one_reset() {
        let mut source = EntryAttributes::new();
        source.set(TITLE_KEY, "Mail", false);
        source.set("token", "abc", true);
        source.set("host", "mail.example.com", false);

        let mut target = EntryAttributes::new();
        target.set("stale", "gone", false);
        let change = target.copy_data_from(&source);
        assert_eq!(change, AttributeChange::Reset);
        assert_eq!(target, source);
        assert_eq!(target.keys(), source.keys());
        assert!(target.is_protected("token"));
        assert!(!target.contains("stale"));
    }

    #[test]
    fn test_copy_custom_keys_leaves_defaults_untouched() {
        let mut source = EntryAttributes::new();
        source.set(TITLE_KEY, "Template", false);
        source.set("Env", "prod", false);
        source.set("ApiKey", "k-123", true);

        let mut target = EntryAttributes::new();
        target.set(TITLE_KEY, "My entry", false);
        target.set("Obsolete", "x", false);

        let change = target.copy_custom_keys_from(&source);
        assert_eq!(change, Some(AttributeChange::Reset));
        assert_eq!(target.value(TITLE_KEY), "My entry");
        assert_eq!(target.value("Env"), "prod");
        assert_eq!(target.value("ApiKey"), "k-123");
        assert!(target.is_protected("ApiKey"));
        assert!(!target.contains("Obsolete"));
    }

    #[test]
    fn test_copy_custom_keys_noop_when_identical() {
        let mut source = EntryAttributes::new();
        source.set("k", "v", false);
        let mut target = EntryAttributes::new();
        target.set("k", "v", false);
        assert_eq!(target.copy_custom_keys_from(&source), None);
    }

    #[test]
    fn test_are_custom_keys_different() {
        let mut a = EntryAttributes::new();
        let mut b = EntryAttributes::new();
        assert!(!a.are_custom_keys_different(&b));

        a.set(TITLE_KEY, "only default differs", false);
        assert!(!a.are_custom_keys_different(&b));

        a.set("k", "v", false);
        assert!(a.are_custom_keys_different(&b));

        b.set("k", "v", false);
        assert!(!a.are_custom_keys_different(&b));

        b.set("k", "v", true);
        assert!(a.are_custom_keys_different(&b));
    }

    #[test]
    fn test_attributes_size_recomputed_after_mutation() {
        let mut attrs = EntryAttributes::new();
        let base = attrs.attributes_size();
        attrs.set("k", "v", false);
        assert_eq!(attrs.attributes_size(), base + 2);
        attrs.set("k", "vvv", false);
        assert_eq!(attrs.attributes_size(), base + 4);
        attrs.remove("k");
        assert_eq!(attrs.attributes_size(), base);
    }

    #[test]
    fn test_values_preserve_caller_order_with_absent_keys() {
        let mut attrs = EntryAttributes::new();
        attrs.set("a", "1", false);
        attrs.set("b", "2", false);
        let wanted = vec!["b".to_string(), "missing".to_string(), "a".to_string()];
        assert_eq!(attrs.values(&wanted), vec!["2", "", "1"]);
    }

    #[test]
    fn test_contains_value() {
        let mut attrs = EntryAttributes::new();
        attrs.set("a", "needle", false);
        assert!(attrs.contains_value("needle"));
        assert!(!attrs.contains_value("needl"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut attrs = EntryAttributes::new();
        attrs.set("Key", "upper", false);
        attrs.set("key", "lower", false);
        assert_eq!(attrs.value("Key"), "upper");
        assert_eq!(attrs.value("key"), "lower");
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = EntryAttributes::new();
        a.set("x", "1", false);
        a.set("y", "2", true);

        let mut b = EntryAttributes::new();
        b.set("y", "2", true);
        b.set("x", "1", false);

        assert_eq!(a, b);

        b.set("y", "2", false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_snapshot_round_trip_is_lossless() {
        let mut attrs = EntryAttributes::new();
        attrs.set(TITLE_KEY, "Router", false);
        attrs.set("pass", "p@ss", true);
        attrs.set("multi", "line one\nline two", false);

        let snapshot = attrs.to_snapshot();
        let restored = EntryAttributes::from_snapshot(&snapshot);
        assert_eq!(restored, attrs);
        assert_eq!(restored.keys(), attrs.keys());
        assert!(restored.is_protected("pass"));
        assert_eq!(restored.value("multi"), "line one\nline two");
    }

    #[test]
    fn test_empty_snapshot_restores_empty_set() {
        // The snapshot is authoritative: no default-key bootstrapping.
        let restored = EntryAttributes::from_snapshot(&AttributesSnapshot::default());
        assert!(restored.is_empty());
        assert_eq!(restored.len(), 0);
        assert!(restored.keys().is_empty());

        assert!(!EntryAttributes::new().is_empty());
        assert_eq!(EntryAttributes::new().len(), 5);
    }
}
