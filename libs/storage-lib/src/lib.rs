//! Storage writer for a single fixed file target.
//!
//! Every write replaces the whole content of the target file. Parent
//! directories are never created and no locking is done between writers.

pub mod errors;
pub mod file_writer;
pub mod target;
pub mod traits;

pub use errors::StorageError;
pub use file_writer::{FileWriter, DEFAULT_FILE_MODE};
pub use target::WriteTarget;
pub use traits::StorageWriter;
