//! Configuration types.

use crate::catalog::DemoType;
use crate::error::ConfigError;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct TourConfig {
    /// Port for the REST + WebSocket server.
    pub http_port: u16,
    /// Path to the local libSQL database file.
    pub db_path: String,
    /// Demo type the coordinator starts with.
    pub demo_type: DemoType,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            db_path: "./data/dash-tour.db".to_string(),
            demo_type: DemoType::default(),
        }
    }
}

impl TourConfig {
    /// Read configuration from `DASH_TOUR_*` environment variables.
    ///
    /// Absent variables fall back to defaults; present-but-invalid values
    /// are reported as errors rather than silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let http_port = match std::env::var("DASH_TOUR_HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "DASH_TOUR_HTTP_PORT".to_string(),
                    message: e.to_string(),
                })?,
            Err(_) => defaults.http_port,
        };

        let db_path =
            std::env::var("DASH_TOUR_DB_PATH").unwrap_or_else(|_| defaults.db_path.clone());

        let demo_type = match std::env::var("DASH_TOUR_DEMO_TYPE") {
            Ok(raw) => raw
                .parse::<DemoType>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "DASH_TOUR_DEMO_TYPE".to_string(),
                    message: e,
                })?,
            Err(_) => defaults.demo_type,
        };

        Ok(Self {
            http_port,
            db_path,
            demo_type,
        })
    }
}
