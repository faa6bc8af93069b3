//! face2face-utils - helper functions around a face-swapping pipeline.
//!
//! This library bundles the small, stateless helpers the face2face tooling
//! leans on.
//!
//! # Features
//!
//! - Load images from paths, bytes, URLs or arrays as BGR arrays
//! - Turn arbitrary text into path-safe slugs
//! - List directory contents by extension
//! - Download and cache model weights by name
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use face2face_utils::{download_model, load_image, Config, ModelRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default(Path::new("face2face.toml"))?;
//!     let registry = ModelRegistry::from_config(&config);
//!
//!     let model_path = download_model(&registry, "inswapper_128").await?;
//!     let face = load_image("faces/source.jpg").await?;
//!     println!("{} -> {:?}", model_path.display(), face.dim());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod models;
pub mod output;

// Re-exports for convenience
pub use config::{validate_config, Config};
pub use download::{download_file, download_model, Downloader, Fetcher, HttpFetcher};
pub use error::{Error, Result};
pub use fs::{encode_path_safe, get_files_in_dir, ExtensionFilter};
pub use media::{load_image, load_image_blocking, Image, ImageSource};
pub use models::{ModelDescriptor, ModelKind, ModelRegistry};
