use serde::{Deserialize, Serialize};

/// Host component name, e.g. `pCube1.map[12]` or `curveShape2.cv[3]`.
/// Only meaningful to the host session that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Name of a shape node owning UV components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub String);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index of a UV shell (island) within its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShellId(pub u32);

/// Errors reported by the host application.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    #[error("component not found: {id}")]
    ComponentNotFound { id: ComponentId },

    #[error("component is not a UV: {id}")]
    NotUvComponent { id: ComponentId },

    #[error("shape not found: {shape}")]
    ShapeNotFound { shape: ShapeId },

    #[error("curve not found: {name}")]
    CurveNotFound { name: String },

    #[error("host error: {message}")]
    Other { message: String },
}
