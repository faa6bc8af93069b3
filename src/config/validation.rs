//! Configuration validation logic.

use std::collections::BTreeMap;

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::models::ModelDescriptor;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_user_agent(&config.options.user_agent)?;
    validate_models("swap_models", &config.swap_models)?;
    validate_models("enhancer_models", &config.enhancer_models)?;

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "options.user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate every descriptor of one model table.
pub fn validate_models(table: &str, models: &BTreeMap<String, ModelDescriptor>) -> Result<()> {
    for (name, descriptor) in models {
        if name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: table.to_string(),
                message: "Model name cannot be empty".to_string(),
            });
        }

        let field = format!("{}.{}", table, name);
        validate_model_url(&field, &descriptor.url)?;

        if descriptor.path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: format!("{}.path", field),
                message: "Model path cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate that a model URL is an absolute HTTP(S) URL.
pub fn validate_model_url(field: &str, url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::ConfigValidation {
        field: format!("{}.url", field),
        message: format!("Invalid URL '{}': {}", url, e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: format!("{}.url", field),
            message: format!(
                "Unsupported URL scheme '{}'. Only http and https are allowed.",
                parsed.scheme()
            ),
        });
    }

    Ok(parsed)
}
