// Styledict - design token classification, transformation, and platform output generation

pub mod build;
pub mod config;
pub mod cti;
pub mod error;
pub mod format;
pub mod loader;
pub mod registry;
pub mod resolve;
pub mod token;
pub mod transform;

// Re-export commonly used items for convenience
pub use build::Builder;
pub use config::{FileConfig, PlatformConfig, StyledictConfig};
pub use error::{Result, StyledictError};
pub use registry::Registry;
pub use token::{Attributes, Token};
pub use transform::Transform;
