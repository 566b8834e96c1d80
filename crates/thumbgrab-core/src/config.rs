use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/thumbgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbgrabConfig {
    /// Directory thumbnails are written into, relative to the working directory unless absolute.
    pub output_dir: PathBuf,
    /// Extension every saved filename ends with (appended when missing).
    pub image_extension: String,
    /// `property` attribute of the meta element that names the preview image.
    pub preview_property: String,
    /// Optional libcurl receive buffer size in bytes (None = library default).
    pub buffer_size: Option<usize>,
}

impl Default for ThumbgrabConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("thumbnails"),
            image_extension: ".jpg".to_string(),
            preview_property: "og:image".to_string(),
            buffer_size: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ThumbgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ThumbgrabConfig::default();
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

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<ThumbgrabConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ThumbgrabConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ThumbgrabConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("thumbnails"));
        assert_eq!(cfg.image_extension, ".jpg");
        assert_eq!(cfg.preview_property, "og:image");
        assert!(cfg.buffer_size.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ThumbgrabConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ThumbgrabConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert_eq!(parsed.image_extension, cfg.image_extension);
        assert_eq!(parsed.preview_property, cfg.preview_property);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            output_dir = "/var/cache/thumbs"
            buffer_size = 16384
        "#;
        let cfg: ThumbgrabConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/var/cache/thumbs"));
        assert_eq!(cfg.buffer_size, Some(16384));
        assert_eq!(cfg.image_extension, ".jpg");
        assert_eq!(cfg.preview_property, "og:image");
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "preview_property = \"twitter:image\"\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.preview_property, "twitter:image");
        assert_eq!(cfg.output_dir, PathBuf::from("thumbnails"));
    }

    #[test]
    fn load_from_path_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_dir = [").unwrap();
        assert!(load_from_path(&path).is_err());
    }
}
