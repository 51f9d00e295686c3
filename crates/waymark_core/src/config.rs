use crate::prelude::*;

/// Settings that shape how permalinks are built and how navigation shows up in the ui.
/// Stored as pretty json inside the data directory. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaymarkConfig {
    /// host (and optional port) of the map site. permalinks are `{host}/?id={id}`
    pub host: String,
    /// zoom level used when the camera jumps to a linked element
    pub highlight_zoom: u8,
    /// how long a navigation toast stays on screen, in milliseconds
    pub toast_duration_ms: u64,
    pub toast_auto_hide: bool,
    /// locale used for toast messages
    pub locale: String,
}

impl WaymarkConfig {
    pub const CONFIG_FILE_NAME: &'static str = "waymark_config.json";
    pub const DEFAULT_HOST: &'static str = "localhost:8080";
    pub const HIGHLIGHT_ZOOM_LEVEL: u8 = 9;
    pub const TOAST_DURATION_MS: u64 = 6000;
    pub const DEFAULT_LOCALE: &'static str = "en";

    /// Reads the config file from `dir`. If there's no config file yet, we write the defaults first.
    pub fn load_or_create(dir: &Dir) -> Result<Self> {
        if !dir.exists(Self::CONFIG_FILE_NAME) {
            let default_config = Self::default();
            default_config
                .save(dir)
                .wrap_err("failed to create default config file")?;
            info!(path = Self::CONFIG_FILE_NAME, "created default config");
            return Ok(default_config);
        }
        let config_src = dir
            .read_to_string(Self::CONFIG_FILE_NAME)
            .into_diagnostic()
            .wrap_err("failed to read config file")?;
        let config: Self = serde_json::from_str(&config_src)
            .into_diagnostic()
            .wrap_err("failed to deserialize config from file")?;
        debug!(?config, "loaded config");
        Ok(config)
    }

    pub fn save(&self, dir: &Dir) -> Result<()> {
        let config_string = serde_json::to_string_pretty(self)
            .into_diagnostic()
            .wrap_err("failed to serialize config")?;
        dir.write(Self::CONFIG_FILE_NAME, config_string.as_bytes())
            .into_diagnostic()
            .wrap_err("failed to write config file")?;
        Ok(())
    }
}

impl Default for WaymarkConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_owned(),
            highlight_zoom: Self::HIGHLIGHT_ZOOM_LEVEL,
            toast_duration_ms: Self::TOAST_DURATION_MS,
            toast_auto_hide: true,
            locale: Self::DEFAULT_LOCALE.to_owned(),
        }
    }
}
