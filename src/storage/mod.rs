//! Storage layer
//!
//! The durable key-value collaborator behind the typed preference store:
//! a backend trait, a JSON-file implementation with atomic writes, and an
//! in-memory implementation for tests.

pub mod backend;
pub mod file_io;
pub mod json_file;
pub mod memory;
pub mod value;

pub use backend::PreferenceBackend;
pub use file_io::{read_json, write_json_atomic};
pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use value::PrimitiveValue;
