//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Model and file listings

pub mod console;
pub mod listing;
pub mod progress;

pub use self::console::{print_error, print_info, print_success, print_warning};
pub use listing::{model_rows, print_files, print_models, ModelRow};
pub use progress::create_download_bar;
