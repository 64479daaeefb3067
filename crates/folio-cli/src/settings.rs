use anyhow::{Context, Result};
use folio_config::Config;
use folio_engine::io;
use std::path::Path;

/// Records `dir` as the default content root in the config at `config_path`.
///
/// The directory must exist. It is stored as an absolute path so the setting
/// does not depend on where `folio` is later run from.
pub fn set_content_path(dir: &Path, config_path: &Path) -> Result<Config> {
    io::validate_content_dir(dir)
        .with_context(|| format!("'{}' is not a content directory", dir.display()))?;
    let dir = std::fs::canonicalize(dir)?;

    if !io::homepage_path(&dir).exists() {
        log::warn!(
            "{} has no {} yet; previews will fail until it is created",
            dir.display(),
            io::HOMEPAGE_KEY
        );
    }

    let config = Config::new(dir);
    config.save_to_path(config_path)?;
    log::info!(
        "Saved content path {} to {}",
        config.content_path.display(),
        config_path.display()
    );
    Ok(config)
}
