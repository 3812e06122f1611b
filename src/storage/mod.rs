//! Storage backends for the post collection
//!
//! - [`InMemoryStorage`]: process memory, optionally seeded
//! - [`JsonFileStorage`]: a single JSON file rewritten on every save

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;
