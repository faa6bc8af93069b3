//! Model kind definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which registry a model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Face swapping models. Looked up first.
    Swap,
    /// Face enhancement models.
    Enhancer,
}

impl ModelKind {
    /// Kinds in lookup order.
    pub const ALL: [ModelKind; 2] = [ModelKind::Swap, ModelKind::Enhancer];
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Swap => write!(f, "swap"),
            ModelKind::Enhancer => write!(f, "enhancer"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "swap" | "swapper" => Ok(ModelKind::Swap),
            "enhancer" | "face_enhancer" => Ok(ModelKind::Enhancer),
            _ => Err(format!("Unknown model kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("swap".parse::<ModelKind>().unwrap(), ModelKind::Swap);
        assert_eq!("Enhancer".parse::<ModelKind>().unwrap(), ModelKind::Enhancer);
        assert!("detector".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_lookup_order() {
        assert_eq!(ModelKind::ALL[0], ModelKind::Swap);
        assert!(ModelKind::Swap < ModelKind::Enhancer);
    }
}
