//! Storage abstractions for service layer
//!
//! Contains the reusable in-memory map store shared by repository
//! implementations.

pub mod memory_map_store;
