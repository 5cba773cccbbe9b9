use anyhow::Result;

use jumpscroll_core::AppConfig;

/// Print the effective configuration, optionally writing it to the default path first
pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    if init {
        config.save()?;
        println!("# Wrote {}", AppConfig::config_path().display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
