//! Model registry module.
//!
//! Provides:
//! - Model kinds (swap, enhancer)
//! - Built-in model definitions
//! - Registry lookup by name

pub mod builtin;
pub mod kind;
pub mod registry;

pub use builtin::{builtin_models, BuiltinModel};
pub use kind::ModelKind;
pub use registry::{ModelDescriptor, ModelRegistry};
