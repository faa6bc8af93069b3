//! Models known without any configuration.

use crate::models::kind::ModelKind;

const ASSETS_BASE: &str = "https://github.com/facefusion/facefusion-assets/releases/download/models";

/// (kind, name, file name) of every built-in model.
const BUILTIN_MODELS: &[(ModelKind, &str, &str)] = &[
    (ModelKind::Swap, "inswapper_128", "inswapper_128.onnx"),
    (ModelKind::Enhancer, "gfpgan_1.4", "gfpgan_1.4.onnx"),
    (ModelKind::Enhancer, "gpen_bfr_512", "gpen_bfr_512.onnx"),
    (ModelKind::Enhancer, "gpen_bfr_1024", "gpen_bfr_1024.onnx"),
    (ModelKind::Enhancer, "gpen_bfr_2048", "gpen_bfr_2048.onnx"),
];

/// A built-in model entry with its download URL and cache-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinModel {
    pub kind: ModelKind,
    pub name: &'static str,
    pub url: String,
    pub relative_path: String,
}

/// All built-in models.
pub fn builtin_models() -> impl Iterator<Item = BuiltinModel> {
    BUILTIN_MODELS
        .iter()
        .map(|&(kind, name, file_name)| BuiltinModel {
            kind,
            name,
            url: format!("{}/{}", ASSETS_BASE, file_name),
            relative_path: format!("{}/{}", folder_for(kind), file_name),
        })
}

/// Cache subfolder for a model kind.
pub fn folder_for(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::Swap => "face_swapper",
        ModelKind::Enhancer => "face_enhancer",
    }
}
