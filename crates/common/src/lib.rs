//! Shared building blocks for the record store crates.

pub mod types;

pub mod utils {
    pub mod logging;
}
