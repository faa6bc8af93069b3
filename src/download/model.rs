//! Model downloads by registry name.

use std::path::PathBuf;

use crate::config::OptionsConfig;
use crate::download::fetch::Fetcher;
use crate::download::file::Downloader;
use crate::error::Result;
use crate::models::ModelRegistry;

impl<F: Fetcher> Downloader<F> {
    /// Download a model by name unless it is already cached.
    ///
    /// The swap registry is searched before the enhancer registry. Returns
    /// the local path of the model file.
    pub async fn download_model(&self, registry: &ModelRegistry, model_name: &str) -> Result<PathBuf> {
        let (kind, descriptor) = registry.lookup(model_name)?;
        tracing::debug!("Resolved {} model {} to {}", kind, model_name, descriptor.url);

        self.download_file(&descriptor.url, &descriptor.path).await
    }
}

/// Download a model from `registry` with default options.
pub async fn download_model(registry: &ModelRegistry, model_name: &str) -> Result<PathBuf> {
    Downloader::from_options(&OptionsConfig::default())?
        .download_model(registry, model_name)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::file::tests::CountingFetcher;
    use crate::error::Error;
    use crate::models::{ModelDescriptor, ModelKind};

    #[tokio::test]
    async fn test_unknown_model_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::builtin(dir.path());
        let downloader = Downloader::new(CountingFetcher::default());

        let err = downloader
            .download_model(&registry, "unknown_model")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ModelNotFound(ref name) if name == "unknown_model"));
        assert_eq!(downloader.fetcher().calls(), 0);
    }

    #[tokio::test]
    async fn test_downloads_to_registry_path() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::builtin(dir.path());
        let downloader = Downloader::new(CountingFetcher::default());

        let path = downloader
            .download_model(&registry, "inswapper_128")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("face_swapper").join("inswapper_128.onnx"));
        assert!(path.is_file());
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.ends_with("/inswapper_128.onnx"));

        downloader
            .download_model(&registry, "inswapper_128")
            .await
            .unwrap();
        assert_eq!(downloader.fetcher().calls(), 1);
    }

    #[tokio::test]
    async fn test_enhancer_model_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ModelRegistry::new();
        registry.insert(
            ModelKind::Enhancer,
            "codeformer",
            ModelDescriptor::new(
                "https://example.com/codeformer.onnx",
                dir.path().join("codeformer.onnx"),
            ),
        );
        let downloader = Downloader::new(CountingFetcher::default());

        let path = downloader
            .download_model(&registry, "codeformer")
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("codeformer.onnx"));
    }
}
