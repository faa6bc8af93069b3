//! face2face-utils - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use face2face_utils::{
    cli::{Args, Command},
    config::{validate_config, Config},
    download::Downloader,
    error::{exit_codes, Error, Result},
    fs::{encode_path_safe, get_files_in_dir, ExtensionFilter},
    media::load_image,
    models::ModelRegistry,
    output::{print_error, print_files, print_info, print_models, print_success, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::ModelNotFound(_) => ExitCode::from(exit_codes::MODEL_NOT_FOUND as u8),
                Error::Download(_) | Error::Http(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                Error::ImageLoad { .. } => ExitCode::from(exit_codes::IMAGE_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load and validate configuration
    if let Some(warning) = args.missing_config_warning() {
        print_warning(&warning);
    }
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    match args.command {
        Command::Slug { text, unicode } => {
            for value in text {
                println!("{}", encode_path_safe(value, unicode));
            }
        }
        Command::Ls {
            dir,
            extensions,
            json,
        } => {
            let filter = (!extensions.is_empty()).then(|| ExtensionFilter::from(extensions));
            let files = get_files_in_dir(&dir, filter);
            print_files(&files, json)?;
        }
        Command::Fetch { url, dest } => {
            let downloader = Downloader::from_options(&config.options)?;
            let path = downloader.download_file(&url, &dest).await?;
            print_success(&format!("Available at {}", path.display()));
        }
        Command::Model { names } => {
            let registry = ModelRegistry::from_config(&config);
            let downloader = Downloader::from_options(&config.options)?;
            for name in &names {
                let path = downloader.download_model(&registry, name).await?;
                print_success(&format!("{}: {}", name, path.display()));
            }
        }
        Command::Models { json } => {
            let registry = ModelRegistry::from_config(&config);
            if !json {
                print_info(&format!(
                    "Models directory: {}",
                    config.models_directory().display()
                ));
            }
            print_models(&registry, json)?;
        }
        Command::Inspect { source } => {
            let image = load_image(source.as_str()).await?;
            let (height, width, channels) = image.dim();
            println!("{}: {}x{}x{} (BGR)", source, height, width, channels);
        }
    }

    Ok(())
}
