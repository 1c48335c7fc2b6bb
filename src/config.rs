//! Build configuration read from environment variables.

use std::path::PathBuf;
use crate::normalize::DEFAULT_BOOST;

pub const DEFAULT_DATA_ROOT: &str = "../cecp-cop21-data";
pub const DEFAULT_PROVINCE_MAP: &str = "content/viz/province_map.json";
/// Map abscissa (longitude) where legend strips start.
pub const DEFAULT_LEGEND_X_ORIGIN: f64 = 76.;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the scenario CSV files.
    pub data_root: PathBuf,
    /// JSON file of province outlines and label positions.
    pub province_map: PathBuf,
    pub legend_x_origin: f64,
    /// Boost of provincial maps that do not set their own.
    pub default_boost: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            province_map: PathBuf::from(DEFAULT_PROVINCE_MAP),
            legend_x_origin: DEFAULT_LEGEND_X_ORIGIN,
            default_boost: DEFAULT_BOOST,
        }
    }
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Optional:
    /// - `CREM_DATA_ROOT`: default `../cecp-cop21-data`
    /// - `CREM_PROVINCE_MAP`: default `content/viz/province_map.json`
    /// - `CREM_MAP_LEGEND_X`: default 76
    /// - `CREM_BOOST`: default 2
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with variables given by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key).filter(|v| !v.trim().is_empty())
                .map(PathBuf::from).unwrap_or(default)
        };
        let number = |key: &str, default: f64| {
            match lookup(key) {
                None => default,
                Some(raw) => match raw.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        tracing::warn!(key, value = %raw, default,
                                       "ignoring invalid number");
                        default
                    }
                },
            }
        };
        Config {
            data_root: path("CREM_DATA_ROOT", defaults.data_root),
            province_map: path("CREM_PROVINCE_MAP", defaults.province_map),
            legend_x_origin: number("CREM_MAP_LEGEND_X",
                                    defaults.legend_x_origin),
            default_boost: number("CREM_BOOST", defaults.default_boost),
        }
    }
}
