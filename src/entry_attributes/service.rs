// ── sorng-entry-attributes / service ───────────────────────────────────────────
//
// Registry service owning one attribute set per entry, plus the change log
// that undo/history consumers read.  Each attribute set has exactly one owner
// (this registry); concurrent access is serialized by the state mutex, so the
// store itself carries no locking.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::attributes::EntryAttributes;
use super::keys::is_default_attribute;
use super::references::match_reference;
use super::types::*;

/// Type alias for Tauri state management.
pub type EntryAttributesServiceState = Arc<Mutex<EntryAttributesService>>;

/// Manages the attribute sets of all live entries.
pub struct EntryAttributesService {
    /// entry id → its attribute set
    sets: HashMap<String, EntryAttributes>,
    /// Recorded changes, oldest first.
    change_log: Vec<ChangeLogEntry>,
}

impl EntryAttributesService {
    /// Create a new service wrapped for Tauri state.
    pub fn new() -> EntryAttributesServiceState {
        Arc::new(Mutex::new(Self {
            sets: HashMap::new(),
            change_log: Vec::new(),
        }))
    }

    // ─── Registry ─────────────────────────────────────────────────────

    /// Register a fresh attribute set for an entry.  Generates an entry id
    /// when none is supplied; fails on id collision.
    pub fn create_set(&mut self, entry_id: Option<String>) -> Result<String, String> {
        let id = entry_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.sets.contains_key(&id) {
            return Err(format!("Entry already registered: {}", id));
        }
        self.sets.insert(id.clone(), EntryAttributes::new());
        log::info!("Registered attribute set for entry {}", id);
        Ok(id)
    }

    /// Register a new attribute set as a copy of an existing entry's set
    /// (entry cloning / template instantiation).
    pub fn clone_set(&mut self, source_id: &str, new_id: Option<String>) -> Result<String, String> {
        let source = self.attributes(source_id)?.clone();
        let id = new_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.sets.contains_key(&id) {
            return Err(format!("Entry already registered: {}", id));
        }
        self.sets.insert(id.clone(), source);
        log::info!("Cloned attribute set {} -> {}", source_id, id);
        Ok(id)
    }

    /// Drop an entry's attribute set (the entry was destroyed).
    pub fn drop_set(&mut self, entry_id: &str) -> Result<(), String> {
        self.sets
            .remove(entry_id)
            .map(|_| log::info!("Dropped attribute set for entry {}", entry_id))
            .ok_or_else(|| format!("Entry not found: {}", entry_id))
    }

    /// Ids of all registered entries.
    pub fn list_entry_ids(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }

    /// Borrow an entry's attribute set.
    pub fn attributes(&self, entry_id: &str) -> Result<&EntryAttributes, String> {
        self.sets
            .get(entry_id)
            .ok_or_else(|| format!("Entry not found: {}", entry_id))
    }

    /// Mutably borrow an entry's attribute set.
    pub fn attributes_mut(&mut self, entry_id: &str) -> Result<&mut EntryAttributes, String> {
        self.sets
            .get_mut(entry_id)
            .ok_or_else(|| format!("Entry not found: {}", entry_id))
    }

    // ─── Attribute Operations ─────────────────────────────────────────

    /// Insert or overwrite an attribute on an entry.
    pub fn set_attribute(
        &mut self,
        entry_id: &str,
        key: &str,
        value: &str,
        protect: bool,
    ) -> Result<Option<AttributeChange>, String> {
        let change = self.attributes_mut(entry_id)?.set(key, value, protect);
        if let Some(ref change) = change {
            let description = match change {
                AttributeChange::Added { .. } => "Added attribute",
                _ => "Modified attribute",
            };
            self.log_change(entry_id, change.clone(), description);
        }
        Ok(change)
    }

    /// Remove an attribute from an entry.  Absent keys are a silent no-op.
    pub fn remove_attribute(
        &mut self,
        entry_id: &str,
        key: &str,
    ) -> Result<Option<AttributeChange>, String> {
        let change = self.attributes_mut(entry_id)?.remove(key);
        if let Some(ref change) = change {
            self.log_change(entry_id, change.clone(), "Removed attribute");
        }
        Ok(change)
    }

    /// Rename an attribute key on an entry.
    pub fn rename_attribute(
        &mut self,
        entry_id: &str,
        old_key: &str,
        new_key: &str,
    ) -> Result<Option<AttributeChange>, String> {
        let change = self.attributes_mut(entry_id)?.rename(old_key, new_key)?;
        if let Some(ref change) = change {
            self.log_change(entry_id, change.clone(), "Renamed attribute");
        }
        Ok(change)
    }

    /// Clear an entry's attributes back to the bootstrapped defaults.
    pub fn clear_attributes(&mut self, entry_id: &str) -> Result<AttributeChange, String> {
        let change = self.attributes_mut(entry_id)?.clear();
        self.log_change(entry_id, change.clone(), "Cleared attributes");
        Ok(change)
    }

    /// Replace `target_id`'s attributes with a snapshot of `source_id`'s.
    pub fn copy_data(&mut self, target_id: &str, source_id: &str) -> Result<AttributeChange, String> {
        let source = self.attributes(source_id)?.clone();
        let change = self.attributes_mut(target_id)?.copy_data_from(&source);
        self.log_change(target_id, change.clone(), "Copied attributes from another entry");
        Ok(change)
    }

    /// Merge `source_id`'s custom keys into `target_id`, defaults untouched.
    pub fn copy_custom_keys(
        &mut self,
        target_id: &str,
        source_id: &str,
    ) -> Result<Option<AttributeChange>, String> {
        let source = self.attributes(source_id)?.clone();
        let change = self.attributes_mut(target_id)?.copy_custom_keys_from(&source);
        if let Some(ref change) = change {
            self.log_change(target_id, change.clone(), "Applied custom attributes");
        }
        Ok(change)
    }

    /// Whether two entries' custom-key subsets differ.
    pub fn custom_keys_differ(&self, entry_id: &str, other_id: &str) -> Result<bool, String> {
        let a = self.attributes(entry_id)?;
        let b = self.attributes(other_id)?;
        Ok(a.are_custom_keys_different(b))
    }

    /// Remove the passkey bundle from an entry, one change per deleted key.
    pub fn remove_passkey(&mut self, entry_id: &str) -> Result<Vec<AttributeChange>, String> {
        let changes = self.attributes_mut(entry_id)?.remove_passkey_attributes();
        for change in &changes {
            self.log_change(entry_id, change.clone(), "Removed passkey attribute");
        }
        Ok(changes)
    }

    /// Replace an entry's attributes from a persisted snapshot (load path).
    pub fn restore_snapshot(
        &mut self,
        entry_id: &str,
        snapshot: &AttributesSnapshot,
    ) -> Result<AttributeChange, String> {
        let attrs = self.attributes_mut(entry_id)?;
        *attrs = EntryAttributes::from_snapshot(snapshot);
        let change = AttributeChange::Reset;
        self.log_change(entry_id, change.clone(), "Restored attributes from snapshot");
        Ok(change)
    }

    /// Attribute summaries for list views, protected values withheld.
    pub fn summaries(&self, entry_id: &str) -> Result<Vec<AttributeSummary>, String> {
        let attrs = self.attributes(entry_id)?;
        Ok(attrs
            .keys()
            .iter()
            .map(|key| {
                let protected = attrs.is_protected(key);
                AttributeSummary {
                    key: key.clone(),
                    value: if protected {
                        None
                    } else {
                        Some(attrs.value(key).to_string())
                    },
                    protected,
                    is_default: is_default_attribute(key),
                    is_reference: match_reference(attrs.value(key)).is_some(),
                }
            })
            .collect())
    }

    // ─── Change Log ───────────────────────────────────────────────────

    /// Record a change to the log.
    fn log_change(&mut self, entry_id: &str, change: AttributeChange, description: &str) {
        self.change_log.push(ChangeLogEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            entry_id: entry_id.to_string(),
            change,
            description: description.to_string(),
        });

        // Limit log size
        if self.change_log.len() > 1000 {
            self.change_log.drain(0..500);
        }
    }

    /// Get change log entries (most recent first).
    pub fn get_change_log(&self, limit: Option<usize>) -> Vec<ChangeLogEntry> {
        let mut log: Vec<_> = self.change_log.iter().rev().cloned().collect();
        if let Some(limit) = limit {
            log.truncate(limit);
        }
        log
    }

    /// Clear the change log.
    pub fn clear_change_log(&mut self) {
        self.change_log.clear();
    }
}
