//! Metadata storage for portfolio projects
//!
//! The host platform owns project metadata; this module abstracts it behind
//! the [`MetaStore`] trait. Implementations include:
//! - MemoryMetaStore (in-process map)
//! - JsonFileMetaStore (single JSON document on disk)

pub mod filesystem;
pub mod memory;
pub mod store;

pub use filesystem::JsonFileMetaStore;
pub use memory::MemoryMetaStore;
pub use store::{MetaStore, ProjectId};
