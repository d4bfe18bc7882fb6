//! Typed access to the instruction section of the workspace document.
//!
//! The document itself is an arbitrary XML tree owned by the host; this
//! module knows how to load and save it and how to find, enumerate and
//! upsert the keyed instruction entries inside the one component that
//! belongs to us.

mod document;
mod section;

pub use document::{StoreError, load_document, save_document};
pub use section::{
    COMPONENT_NAME, Instruction, ensure_component, find_component, list_entries, upsert_entry,
};
