//! Model registries mapping names to download locations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::resolve_against;
use crate::models::builtin::builtin_models;
use crate::models::kind::ModelKind;

/// Where a model is downloaded from and where it is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Remote location of the weights.
    pub url: String,
    /// Local cache destination. Relative paths are resolved against the
    /// models directory when the registry is built.
    pub path: PathBuf,
}

impl ModelDescriptor {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
        }
    }

    /// Copy of this descriptor with its path resolved against `models_dir`.
    pub fn resolved(&self, models_dir: &Path) -> Self {
        Self {
            url: self.url.clone(),
            path: resolve_against(models_dir, &self.path),
        }
    }

    /// Whether the model file is already cached.
    pub fn is_cached(&self) -> bool {
        self.path.is_file()
    }
}

/// Swap and enhancer model registries.
///
/// Lookups try the swap registry first, then the enhancer registry.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    swap: BTreeMap<String, ModelDescriptor>,
    enhancer: BTreeMap<String, ModelDescriptor>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in models, cached under `models_dir`.
    pub fn builtin(models_dir: &Path) -> Self {
        let mut registry = Self::new();
        for model in builtin_models() {
            registry.insert(
                model.kind,
                model.name,
                ModelDescriptor::new(model.url, models_dir.join(model.relative_path)),
            );
        }
        registry
    }

    /// Built-in models overlaid with the models declared in `config`.
    ///
    /// A configured model replaces a built-in one of the same kind and name.
    pub fn from_config(config: &Config) -> Self {
        let models_dir = config.models_directory();
        let mut registry = Self::builtin(&models_dir);

        for (name, descriptor) in &config.swap_models {
            registry.insert(ModelKind::Swap, name, descriptor.resolved(&models_dir));
        }
        for (name, descriptor) in &config.enhancer_models {
            registry.insert(ModelKind::Enhancer, name, descriptor.resolved(&models_dir));
        }

        registry
    }

    /// Add or replace a model, returning the descriptor it replaced.
    pub fn insert(
        &mut self,
        kind: ModelKind,
        name: impl Into<String>,
        descriptor: ModelDescriptor,
    ) -> Option<ModelDescriptor> {
        self.table_mut(kind).insert(name.into(), descriptor)
    }

    /// Get a model from one registry.
    pub fn get(&self, kind: ModelKind, name: &str) -> Option<&ModelDescriptor> {
        self.table(kind).get(name)
    }

    /// Find a model by name, swap registry first.
    pub fn lookup(&self, name: &str) -> Result<(ModelKind, &ModelDescriptor)> {
        ModelKind::ALL
            .iter()
            .find_map(|&kind| self.get(kind, name).map(|d| (kind, d)))
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }

    /// Model names of one kind, sorted.
    pub fn names(&self, kind: ModelKind) -> Vec<&str> {
        self.table(kind).keys().map(String::as_str).collect()
    }

    /// All models, swap models first, each kind sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (ModelKind, &str, &ModelDescriptor)> {
        ModelKind::ALL.into_iter().flat_map(move |kind| {
            self.table(kind)
                .iter()
                .map(move |(name, d)| (kind, name.as_str(), d))
        })
    }

    pub fn len(&self) -> usize {
        self.swap.len() + self.enhancer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, kind: ModelKind) -> &BTreeMap<String, ModelDescriptor> {
        match kind {
            ModelKind::Swap => &self.swap,
            ModelKind::Enhancer => &self.enhancer,
        }
    }

    fn table_mut(&mut self, kind: ModelKind) -> &mut BTreeMap<String, ModelDescriptor> {
        match kind {
            ModelKind::Swap => &mut self.swap,
            ModelKind::Enhancer => &mut self.enhancer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionsConfig;

    #[test]
    fn test_lookup_unknown_model() {
        let registry = ModelRegistry::builtin(Path::new("/models"));
        let err = registry.lookup("unknown_model").unwrap_err();
        assert!(matches!(err, Error::ModelNotFound(ref name) if name == "unknown_model"));
    }

    #[test]
    fn test_lookup_prefers_swap_registry() {
        let mut registry = ModelRegistry::new();
        registry.insert(
            ModelKind::Enhancer,
            "shared",
            ModelDescriptor::new("https://example.com/enhancer.onnx", "/m/enhancer.onnx"),
        );
        registry.insert(
            ModelKind::Swap,
            "shared",
            ModelDescriptor::new("https://example.com/swap.onnx", "/m/swap.onnx"),
        );

        let (kind, descriptor) = registry.lookup("shared").unwrap();
        assert_eq!(kind, ModelKind::Swap);
        assert_eq!(descriptor.url, "https://example.com/swap.onnx");
    }

    #[test]
    fn test_lookup_falls_back_to_enhancer() {
        let registry = ModelRegistry::builtin(Path::new("/models"));
        let (kind, descriptor) = registry.lookup("gfpgan_1.4").unwrap();
        assert_eq!(kind, ModelKind::Enhancer);
        assert_eq!(
            descriptor.path,
            PathBuf::from("/models/face_enhancer/gfpgan_1.4.onnx")
        );
    }

    #[test]
    fn test_config_overrides_builtin() {
        let mut config = Config {
            options: OptionsConfig {
                models_directory: Some(PathBuf::from("/cache")),
                ..Default::default()
            },
            ..Default::default()
        };
        config.swap_models.insert(
            "inswapper_128".into(),
            ModelDescriptor::new("https://mirror.example.com/inswapper.onnx", "inswapper.onnx"),
        );
        config.enhancer_models.insert(
            "codeformer".into(),
            ModelDescriptor::new("https://example.com/codeformer.onnx", "/abs/codeformer.onnx"),
        );

        let registry = ModelRegistry::from_config(&config);

        let swap = registry.get(ModelKind::Swap, "inswapper_128").unwrap();
        assert_eq!(swap.url, "https://mirror.example.com/inswapper.onnx");
        assert_eq!(swap.path, PathBuf::from("/cache/inswapper.onnx"));

        let (_, extra) = registry.lookup("codeformer").unwrap();
        assert_eq!(extra.path, PathBuf::from("/abs/codeformer.onnx"));

        assert!(registry.names(ModelKind::Enhancer).contains(&"gfpgan_1.4"));
    }

    #[test]
    fn test_iter_order() {
        let registry = ModelRegistry::builtin(Path::new("/models"));
        let kinds: Vec<_> = registry.iter().map(|(kind, _, _)| kind).collect();

        assert_eq!(kinds.len(), registry.len());
        assert_eq!(kinds.first(), Some(&ModelKind::Swap));
        assert!(kinds.windows(2).all(|w| w[0] <= w[1]));
    }
}
