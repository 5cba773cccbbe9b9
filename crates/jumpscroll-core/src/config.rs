use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub jump: JumpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Scroll dimension a jump animates along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Vertical (primary) axis
    #[default]
    Y,
    /// Horizontal (cross) axis
    X,
}

impl std::str::FromStr for Axis {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "y" | "vertical" => Ok(Axis::Y),
            "x" | "horizontal" => Ok(Axis::X),
            other => Err(crate::Error::Config(format!("unknown axis: {}", other))),
        }
    }
}

/// Named easing curves selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Hold the start position, then land on the stop at the end
    None,
    Linear,
    /// Quadratic ease-in-out, symmetric about the midpoint
    #[default]
    QuadInOut,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

impl std::str::FromStr for EasingType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(EasingType::None),
            "linear" => Ok(EasingType::Linear),
            "quad_in_out" | "ease_in_out_quad" => Ok(EasingType::QuadInOut),
            "cubic" => Ok(EasingType::Cubic),
            "quintic" => Ok(EasingType::Quintic),
            "ease_out" => Ok(EasingType::EaseOut),
            other => Err(crate::Error::Config(format!("unknown easing: {}", other))),
        }
    }
}

/// Defaults applied to every jump unless overridden per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Axis to scroll along
    #[serde(default)]
    pub axis: Axis,
    /// Run length in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    /// Pixel adjustment added to the computed stop position
    #[serde(default)]
    pub offset: f64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Focus the target element when the run completes
    #[serde(default)]
    pub a11y: bool,
    /// Treat numeric targets as absolute offsets
    #[serde(default)]
    pub exact: bool,
    /// Frames per second used by the frame driver
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            duration_ms: default_duration_ms(),
            offset: 0.0,
            easing: EasingType::default(),
            a11y: false,
            exact: false,
            frame_rate: default_frame_rate(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Run length used when none (or an unusable one) is supplied
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

fn default_duration_ms() -> f64 {
    DEFAULT_DURATION_MS
}

fn default_frame_rate() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/jumpscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("jumpscroll")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JumpConfig::default();
        assert_eq!(config.axis, Axis::Y);
        assert_eq!(config.duration_ms, 1000.0);
        assert_eq!(config.offset, 0.0);
        assert_eq!(config.easing, EasingType::QuadInOut);
        assert!(!config.a11y);
        assert!(!config.exact);
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = AppConfig::parse(
            r#"
            [jump]
            axis = "x"
            easing = "cubic"
            exact = true
            "#,
        )
        .unwrap();

        assert_eq!(config.jump.axis, Axis::X);
        assert_eq!(config.jump.easing, EasingType::Cubic);
        assert!(config.jump.exact);
        assert_eq!(config.jump.duration_ms, 1000.0);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = AppConfig::parse("[jump]\naxis = \"z\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut config = AppConfig::default();
        config.jump.offset = -24.0;
        config.jump.easing = EasingType::EaseOut;

        let parsed = AppConfig::parse(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.jump, config.jump);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("jumpscroll-missing-config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.jump, JumpConfig::default());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("ease-out".parse::<EasingType>().unwrap(), EasingType::EaseOut);
        assert!("bounce".parse::<EasingType>().is_err());
    }
}
