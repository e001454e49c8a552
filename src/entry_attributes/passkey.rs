// ── sorng-entry-attributes / passkey ───────────────────────────────────────────
//
// Passkey sub-schema operations.  A passkey is a fixed bundle of reserved
// keys added and removed as a set; the private-key PEM block is stored as an
// ordinary protected value and never parsed here.

use super::attributes::EntryAttributes;
use super::keys::{PASSKEY_ATTRIBUTES, PASSKEY_CREDENTIAL_ID};
use super::types::AttributeChange;

impl EntryAttributes {
    /// Whether this entry carries a passkey.  The credential-id key alone is
    /// the signal; the other passkey keys may be missing in partial edit
    /// states.
    pub fn has_passkey(&self) -> bool {
        self.contains(PASSKEY_CREDENTIAL_ID)
    }

    /// Remove every passkey key, each through the normal remove path so each
    /// deletion yields its own `Removed` change.  Not a reset: all other
    /// attributes stay untouched.
    pub fn remove_passkey_attributes(&mut self) -> Vec<AttributeChange> {
        PASSKEY_ATTRIBUTES
            .iter()
            .filter_map(|key| self.remove(key))
            .collect()
    }
}
