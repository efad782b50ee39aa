use log::Level;
use web_sys::window;

/// Build-time override of the API base URL (e.g. set by the hosting provider).
const API_URL_ENV: Option<&str> = option_env!("URBANVITALITY_API_URL");
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

const STORAGE_API_URL: &str = "urbanvitality_api_url";
const STORAGE_LOG_LEVEL: &str = "urbanvitality_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Heat-risk API base URL without trailing slash (e.g. "http://127.0.0.1:5000")
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Slippy-map tile template
    pub tile_url: String,

    /// Tile attribution shown in the map corner
    pub tile_attribution: String,

    /// Initial map center as (latitude, longitude)
    pub map_center: (f64, f64),

    /// Initial map zoom
    pub map_zoom: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base_url(API_URL_ENV.unwrap_or(DEFAULT_API_URL)),
            log_level: Level::Info,
            debug_mode: false,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; OpenStreetMap contributors".to_string(),
            map_center: (20.0, 0.0),
            map_zoom: 2,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_url)) = storage.get_item(STORAGE_API_URL) {
                    if !api_url.trim().is_empty() {
                        settings.api_base_url = normalize_base_url(&api_url);
                    }
                }

                if let Ok(Some(log_level)) = storage.get_item(STORAGE_LOG_LEVEL) {
                    if let Some(level) = parse_log_level(&log_level) {
                        settings.log_level = level;
                    }
                }
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_trims_trailing_slashes() {
        assert_eq!(normalize_base_url("https://api.example.org/"), "https://api.example.org");
        assert_eq!(normalize_base_url(" http://127.0.0.1:5000// "), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_api_url_joins_endpoint() {
        let settings = AppSettings {
            api_base_url: "https://heat.example.org".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(
            settings.api_url("/api/heat-data"),
            "https://heat.example.org/api/heat-data"
        );
    }

    #[test]
    fn test_default_map_view() {
        let settings = AppSettings::default();
        assert_eq!(settings.map_center, (20.0, 0.0));
        assert_eq!(settings.map_zoom, 2);
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_log_level(" warn "), Some(Level::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
