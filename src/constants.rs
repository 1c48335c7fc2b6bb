//! Provinces, scenarios and energy sources of the dataset.

use std::collections::BTreeMap;
use std::fmt;
use lazy_static::lazy_static;
use serde::Serialize;

/// Province without data; it is drawn with a placeholder.
pub const SENTINEL_PROVINCE: &str = "XZ";
/// Value displayed for the [`SENTINEL_PROVINCE`].
pub const SENTINEL_VALUE: &str = "No Data";
/// Color of the [`SENTINEL_PROVINCE`].
pub const SENTINEL_COLOR: &str = "white";

/// Province codes and English names.
pub const PROVINCES: [(&str, &str); 31] = [
    ("AH", "Anhui"), ("BJ", "Beijing"), ("CQ", "Chongqing"),
    ("FJ", "Fujian"), ("GD", "Guangdong"), ("GS", "Gansu"),
    ("GX", "Guangxi"), ("GZ", "Guizhou"), ("HA", "Henan"),
    ("HB", "Hubei"), ("HE", "Hebei"), ("HI", "Hainan"),
    ("HL", "Heilongjiang"), ("HN", "Hunan"), ("JL", "Jilin"),
    ("JS", "Jiangsu"), ("JX", "Jiangxi"), ("LN", "Liaoning"),
    ("NM", "Inner Mongolia"), ("NX", "Ningxia"), ("QH", "Qinghai"),
    ("SC", "Sichuan"), ("SD", "Shandong"), ("SH", "Shanghai"),
    ("SN", "Shaanxi"), ("SX", "Shanxi"), ("TJ", "Tianjin"),
    ("XJ", "Xinjiang"), ("XZ", "Tibet"), ("YN", "Yunnan"),
    ("ZJ", "Zhejiang"),
];

lazy_static! {
    static ref PROVINCE_NAMES: BTreeMap<&'static str, &'static str> =
        PROVINCES.iter().copied().collect();
}

/// English name of the province `code`.
pub fn province_name(code: &str) -> Option<&'static str> {
    PROVINCE_NAMES.get(code).copied()
}

/// Codes of the provinces backed by data, i.e. all but the sentinel.
pub fn data_provinces() -> impl Iterator<Item = &'static str> {
    PROVINCES.iter().map(|(code, _)| *code)
        .filter(|&code| code != SENTINEL_PROVINCE)
}

/// Energy sources of the energy mix charts: CSV column and label.
pub const ENERGY_MIX_COLUMNS: [(&str, &str); 7] = [
    ("COL", "Coal"), ("OIL", "Oil"), ("GAS", "Gas"), ("NUC", "Nuclear"),
    ("HYD", "Hydro"), ("WND", "Wind"), ("SOL", "Solar"),
];

/// A policy projection, each backed by its own CSV file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Bau,
    Three,
    Four,
    Five,
    ThreeNh3,
    FourNh3,
    FiveNh3,
}

impl Scenario {
    /// Scenarios of the main charts, business as usual first.
    pub const MAIN: [Scenario; 4] =
        [Scenario::Bau, Scenario::Three, Scenario::Four, Scenario::Five];
    /// Policy scenarios only.
    pub const POLICIES: [Scenario; 3] =
        [Scenario::Three, Scenario::Four, Scenario::Five];
    /// Policy scenarios with ammonia controls.
    pub const NH3: [Scenario; 3] =
        [Scenario::ThreeNh3, Scenario::FourNh3, Scenario::FiveNh3];

    /// Identifier used in data source keys and page selectors.
    pub fn key(self) -> &'static str {
        match self {
            Scenario::Bau => "bau",
            Scenario::Three => "three",
            Scenario::Four => "four",
            Scenario::Five => "five",
            Scenario::ThreeNh3 => "three_nh3",
            Scenario::FourNh3 => "four_nh3",
            Scenario::FiveNh3 => "five_nh3",
        }
    }

    /// Stem of the scenario's CSV files.
    pub fn file_stem(self) -> &'static str {
        match self {
            Scenario::Bau => "bau",
            Scenario::Three => "3",
            Scenario::Four => "4",
            Scenario::Five => "5",
            Scenario::ThreeNh3 => "3_nh3",
            Scenario::FourNh3 => "4_nh3",
            Scenario::FiveNh3 => "5_nh3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Bau => "BAU",
            Scenario::Three => "3%",
            Scenario::Four => "4%",
            Scenario::Five => "5%",
            Scenario::ThreeNh3 => "3% + NH3",
            Scenario::FourNh3 => "4% + NH3",
            Scenario::FiveNh3 => "5% + NH3",
        }
    }

    /// Line color; an NH3 variant shares the color of its scenario.
    pub fn color(self) -> &'static str {
        match self {
            Scenario::Bau => "#525252",
            Scenario::Three | Scenario::ThreeNh3 => "#e6550d",
            Scenario::Four | Scenario::FourNh3 => "#3182bd",
            Scenario::Five | Scenario::FiveNh3 => "#31a354",
        }
    }

    /// The scenario with ammonia controls built on `self`, if any.
    pub fn nh3_variant(self) -> Option<Scenario> {
        match self {
            Scenario::Three => Some(Scenario::ThreeNh3),
            Scenario::Four => Some(Scenario::FourNh3),
            Scenario::Five => Some(Scenario::FiveNh3),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Scenario> {
        Scenario::MAIN.into_iter().chain(Scenario::NH3)
            .find(|s| s.key() == key)
    }

    /// Parse a selector value such as `"three,four,"`.  Unknown keys
    /// are ignored.
    pub fn parse_selection(value: &str) -> Vec<Scenario> {
        value.trim_end_matches(',').split(',')
            .filter_map(|k| Scenario::from_key(k.trim()))
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
