// ── sorng-entry-attributes / entry_attributes module ───────────────────────────
//
// Per-entry attribute store providing:
//   • Insertion-ordered key → value text fields with rename/remove/clear
//   • Default-key bootstrapping (Title, UserName, Password, URL, Notes)
//   • Protection flags marking confidential fields for encryption at rest
//   • Reference macro parsing ({REF:<code>@I:<uuid>}) for cross-entry values
//   • Passkey attribute sub-schema handled as an atomic bundle
//   • Change notifications as returned values, plus a service-level change log
//   • Lossless snapshots for the persistence layer
//   • Tauri command bindings for the frontend

pub mod types;
pub mod keys;
pub mod attributes;
pub mod references;
pub mod passkey;
pub mod service;
pub mod commands;

pub use types::*;
pub use keys::{is_default_attribute, is_passkey_attribute};
pub use attributes::EntryAttributes;
pub use references::{contains_reference, match_reference};
pub use service::{EntryAttributesService, EntryAttributesServiceState};
pub use commands::*;
