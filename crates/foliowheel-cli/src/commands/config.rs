use anyhow::{bail, Context, Result};

use foliowheel_core::AppConfig;

/// Print the resolved configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    let rendered =
        toml::to_string_pretty(config).context("failed to render the configuration")?;
    println!("# {}", AppConfig::config_path().display());
    print!("{rendered}");
    Ok(())
}

/// Write the default configuration file
pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    AppConfig::default()
        .save()
        .context("failed to write the configuration file")?;
    println!("Wrote {}", path.display());
    Ok(())
}
