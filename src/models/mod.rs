pub mod config;
pub mod source;

pub use config::{AppConfig, ConfigOverrides, OutputFormat};
pub use source::SourceMetadata;
