use epaper_dither::ResizeFilter;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "INKREEL_CONFIG";

/// Application configuration loaded from an optional YAML file.
///
/// Command-line flags take precedence over these values; missing keys fall
/// back to the built-in defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Directory the dithered images are written to
    pub output_dir: PathBuf,

    /// Output file format
    pub format: OutputFormat,

    /// Resampling filter used by resize-and-crop
    #[serde(deserialize_with = "deserialize_filter")]
    pub filter: ResizeFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            filter: ResizeFilter::default(),
        }
    }
}

/// Encoded output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Uncompressed 24-bit BMP
    #[default]
    Bmp,
    /// 4-bit indexed PNG with the panel palette
    Png,
}

impl OutputFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Png => "png",
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub filter: Option<ResizeFilter>,
}

fn deserialize_filter<'de, D>(deserializer: D) -> Result<ResizeFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            width: overrides.width.unwrap_or(self.width),
            height: overrides.height.unwrap_or(self.height),
            output_dir: overrides.output_dir.unwrap_or(self.output_dir),
            format: overrides.format.unwrap_or(self.format),
            filter: overrides.filter.unwrap_or(self.filter),
        }
    }

    /// Load configuration from `path`, or from `$INKREEL_CONFIG` when no
    /// path is given. Unreadable or invalid files are logged and replaced
    /// by the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match path.or(env_path.as_deref()) {
            Some(path) => Self::load_file(path),
            None => Self::default(),
        }
    }

    fn load_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        width = config.width,
                        height = config.height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 480);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.format, OutputFormat::Bmp);
        assert_eq!(config.filter, ResizeFilter::Triangle);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
width: 600
height: 448
output_dir: frames
format: png
filter: lanczos3
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.width, 600);
        assert_eq!(config.height, 448);
        assert_eq!(config.output_dir, PathBuf::from("frames"));
        assert_eq!(config.format, OutputFormat::Png);
        assert_eq!(config.filter, ResizeFilter::Lanczos3);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_yaml_str("height: 600\n").unwrap();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.format, OutputFormat::Bmp);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(AppConfig::from_yaml_str("filter: sinc\n").is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(AppConfig::from_yaml_str("format: gif\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width: 1200\nheight: 825").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 825);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/inkreel.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width: [not, a, number]").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = AppConfig::from_yaml_str("width: 600\nheight: 448\nformat: png\n").unwrap();
        let merged = config.with_overrides(ConfigOverrides {
            height: Some(300),
            filter: Some(ResizeFilter::Nearest),
            ..ConfigOverrides::default()
        });

        assert_eq!(merged.width, 600);
        assert_eq!(merged.height, 300);
        assert_eq!(merged.format, OutputFormat::Png);
        assert_eq!(merged.filter, ResizeFilter::Nearest);
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Bmp.extension(), "bmp");
        assert_eq!(OutputFormat::Png.extension(), "png");
    }
}
