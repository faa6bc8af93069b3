//! Filesystem module.
//!
//! Provides:
//! - Slug generation for path-safe names
//! - Directory listing filtered by extension
//! - Path and directory management

pub mod listing;
pub mod naming;
pub mod paths;

pub use listing::{get_files_in_dir, ExtensionFilter};
pub use naming::encode_path_safe;
pub use paths::{default_models_dir, ensure_dir, ensure_parent_dir, partial_path, resolve_against};
