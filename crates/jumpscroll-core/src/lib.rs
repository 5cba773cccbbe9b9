pub mod config;
pub mod error;

pub use config::{AppConfig, Axis, EasingType, GeneralConfig, JumpConfig};
pub use error::{Error, Result};
