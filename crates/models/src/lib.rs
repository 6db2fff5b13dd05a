//! Data model for the record store: the stored `Record`, the typed
//! `RecordPatch` used by partial updates, and model-level validation.

pub mod errors;
pub mod record;
