//! File-system helpers for generated build output.
//!
//! - [`create_directory`] / [`ensure_parent_dir`] create directory trees on demand
//! - [`atomic_write`] replaces a file via temp-and-rename
//! - [`save_file_on_change`] / [`save_files_on_change`] only touch files whose
//!   content actually changed

pub mod atomic;
pub mod change;
pub mod dirs;

pub use atomic::atomic_write;
pub use change::{save_file_on_change, save_files_on_change};
pub use dirs::{create_directory, ensure_parent_dir};
