//! # SortOfRemote NG – Entry Attribute Store
//!
//! Per-credential attribute container and its reference-resolution contract:
//!
//! - **Ordered Attributes** – Insertion-ordered named text fields with
//!   set/remove/rename/clear and default-key bootstrapping
//! - **Protection Tracking** – Confidential-field flags consumed by the
//!   encryption-at-rest layer
//! - **References** – `{REF:<code>@I:<uuid>}` macro detection and parsing;
//!   resolution stays with the entry-resolution layer
//! - **Passkeys** – Fixed FIDO2-style attribute bundle added/removed as a set
//! - **Change Notifications** – Every mutation returns what changed; the
//!   service keeps a bounded change log for undo/history consumers
//! - **Tauri Commands** – Full command surface for frontend integration

pub mod entry_attributes;

pub use entry_attributes::*;
