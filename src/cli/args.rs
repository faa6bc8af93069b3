//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// face2face helper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "face2face-utils",
    version,
    about = "Slug, listing, image and model-cache helpers for face2face",
    long_about = "Helpers used around face2face.\n\n\
                  Pre-fetch swap and enhancer models, check that images load, \
                  list input folders and build path-safe names."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "face2face.toml", env = "FACE2FACE_CONFIG")]
    pub config: PathBuf,

    /// Directory where models are cached.
    #[arg(short = 'm', long = "models-dir", env = "FACE2FACE_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Hide download progress bars and warnings.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a path-safe slug for each text.
    Slug {
        /// Text to encode.
        #[arg(required = true)]
        text: Vec<String>,

        /// Keep Unicode letters instead of transliterating to ASCII.
        #[arg(long)]
        unicode: bool,
    },

    /// List files in a directory, optionally filtered by extension.
    Ls {
        /// Directory to list.
        dir: PathBuf,

        /// Extension suffix to match, e.g. ".png". Repeatable.
        #[arg(short, long = "ext")]
        extensions: Vec<String>,

        /// Print JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// Download a URL to a path unless the path already exists.
    Fetch {
        /// Source URL.
        url: String,

        /// Destination file.
        dest: PathBuf,
    },

    /// Download models by name unless already cached.
    Model {
        /// Model names, e.g. inswapper_128.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List known models and whether they are cached.
    Models {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Load an image (path or URL) and print its normalized shape.
    Inspect {
        /// Image path or URL.
        source: String,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.models_dir {
            config.options.models_directory = Some(dir.clone());
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }

    /// Warning to show when the configuration file is missing and defaults
    /// are used. Suppressed by `--quiet`.
    pub fn missing_config_warning(&self) -> Option<String> {
        if self.quiet || self.config.exists() {
            return None;
        }
        Some(format!(
            "Configuration file not found: {}. Using defaults",
            self.config.display()
        ))
    }
}
