//! Utility modules shared by the library and the CLI.
//!
//! - [`fs`] - Directory creation, atomic and change-aware file writes
//! - [`guid`] - GUID registry/structure format conversion
//! - [`platform`] - Platform path helpers
//! - [`progress`] - Background progress indicator

pub mod fs;
pub mod guid;
pub mod platform;
pub mod progress;

pub use fs::{create_directory, save_file_on_change};
pub use guid::{
    guid_string_to_struct_string, guid_struct_string_to_guid_string,
    guid_struct_string_to_value_name,
};
pub use progress::Progressor;
