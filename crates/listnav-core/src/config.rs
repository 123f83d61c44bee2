use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Element ids and class names the page scripts look for, loaded from
/// `~/.config/listnav/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListnavConfig {
    /// Container holding the tag checkboxes and sort radios.
    pub filter_settings_id: String,
    /// Control whose `aria-expanded` drives the collapse glyph.
    pub collapse_button_id: String,
    /// Element receiving the plus/minus glyph.
    pub collapse_sign_id: String,
    pub back_to_top_id: String,
    /// Class identifying navigation links.
    pub nav_link_class: String,
    /// Class added to the link matching the current URL.
    pub active_class: String,
    /// Scroll offset in pixels above which the back-to-top button shows.
    pub back_to_top_threshold: f64,
}

impl Default for ListnavConfig {
    fn default() -> Self {
        Self {
            filter_settings_id: "filter-settings".to_string(),
            collapse_button_id: "collapse-button".to_string(),
            collapse_sign_id: "collapse-sign".to_string(),
            back_to_top_id: "back-to-top".to_string(),
            nav_link_class: "nav-link".to_string(),
            active_class: "active".to_string(),
            back_to_top_threshold: 20.0,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("listnav")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ListnavConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ListnavConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. Missing keys take defaults.
pub fn load_from_path(path: &Path) -> Result<ListnavConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ListnavConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = ListnavConfig::default();
        assert_eq!(cfg.filter_settings_id, "filter-settings");
        assert_eq!(cfg.collapse_button_id, "collapse-button");
        assert_eq!(cfg.collapse_sign_id, "collapse-sign");
        assert_eq!(cfg.nav_link_class, "nav-link");
        assert_eq!(cfg.active_class, "active");
        assert_eq!(cfg.back_to_top_threshold, 20.0);
    }

    #[test]
    fn config_toml_partial_keeps_defaults() {
        let toml = r#"
            filter_settings_id = "filters"
            back_to_top_threshold = 120.0
        "#;
        let cfg: ListnavConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.filter_settings_id, "filters");
        assert_eq!(cfg.back_to_top_threshold, 120.0);
        assert_eq!(cfg.back_to_top_id, "back-to-top");
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "active_class = \"is-current\"").unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.active_class, "is-current");
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "back_to_top_threshold = \"high\"").unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
