//! Access to the scenario dataset.
//!
//! Files follow a fixed layout under the dataset root:
//! `national/<scenario>.csv`, `national/<scenario>_lo.csv` and
//! `<province>/<scenario>.csv`, all with a year column `t`.

use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::Config;
use crate::constants::{province_name, ENERGY_MIX_COLUMNS, Scenario};
use crate::error::{Result, VizError};
use crate::frame::{Frame, YEAR_COLUMN};

/// First modelled year, only used to calibrate the model.
pub const CALIBRATION_YEAR: i32 = 2007;

/// Series of one parameter for several scenarios.
#[derive(Clone, Debug, Serialize)]
pub struct NationalSeries {
    pub parameter: String,
    /// One table per scenario, in chart order.
    pub sources: Vec<(Scenario, Frame)>,
    /// Values of all scenarios, concatenated (to size chart axes).
    pub data: Vec<f64>,
}

impl NationalSeries {
    fn new(parameter: &str, sources: Vec<(Scenario, Frame)>) -> Result<Self> {
        let mut data = Vec::new();
        for (_, frame) in &sources {
            data.extend_from_slice(frame.column(parameter)?);
        }
        Ok(NationalSeries { parameter: parameter.to_string(), sources, data })
    }

    pub fn get(&self, scenario: Scenario) -> Option<&Frame> {
        self.sources.iter().find(|(s, _)| *s == scenario).map(|(_, f)| f)
    }
}

/// The scenario dataset rooted at a directory.
#[derive(Clone, Debug)]
pub struct Dataset {
    root: PathBuf,
}

impl Dataset {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Dataset { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_root)
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn national_path(&self, stem: &str) -> PathBuf {
        self.root.join("national").join(format!("{stem}.csv"))
    }

    pub fn provincial_path(&self, province: &str, scenario: Scenario) -> PathBuf {
        self.root.join(province).join(format!("{}.csv", scenario.file_stem()))
    }

    fn national_frame(&self, stem: &str, usecols: &[&str]) -> Result<Frame> {
        Frame::from_path(&self.national_path(stem), usecols)
    }

    fn national_series(&self, parameter: &str, scenarios: &[Scenario],
                       stem: impl Fn(Scenario) -> String) -> Result<NationalSeries> {
        let usecols = [YEAR_COLUMN, parameter];
        let mut sources = Vec::with_capacity(scenarios.len());
        for &scenario in scenarios {
            let frame = self.national_frame(&stem(scenario), &usecols)?
                .without_year(CALIBRATION_YEAR);
            sources.push((scenario, frame));
        }
        NationalSeries::new(parameter, sources)
    }

    /// National series of `parameter` for the main scenarios, with or
    /// without business as usual.
    pub fn national(&self, parameter: &str, include_bau: bool)
                    -> Result<NationalSeries> {
        let scenarios: &[Scenario] =
            if include_bau { &Scenario::MAIN } else { &Scenario::POLICIES };
        self.national_series(parameter, scenarios,
                             |s| s.file_stem().to_string())
    }

    /// National series from the low-variant (`_lo`) files, business as
    /// usual included.
    pub fn national_lo(&self, parameter: &str) -> Result<NationalSeries> {
        self.national_series(parameter, &Scenario::MAIN,
                             |s| format!("{}_lo", s.file_stem()))
    }

    /// National series of any `scenarios` (e.g. the NH3 variants).
    pub fn national_scenarios(&self, parameter: &str, scenarios: &[Scenario])
                              -> Result<NationalSeries> {
        self.national_series(parameter, scenarios,
                             |s| s.file_stem().to_string())
    }

    /// PM2.5 concentrations of the main scenarios in 2010 and 2030.
    pub fn pm25_national(&self) -> Result<NationalSeries> {
        let parameter = "PM25_conc";
        let usecols = [YEAR_COLUMN, parameter];
        let mut sources = Vec::new();
        for scenario in Scenario::MAIN {
            let frame = self.national_frame(scenario.file_stem(), &usecols)?
                .only_years(&[2010, 2030]);
            sources.push((scenario, frame));
        }
        NationalSeries::new(parameter, sources)
    }

    /// Energy use of every source for all main scenarios, as a single
    /// table with columns `<scenario>_<source>`.
    pub fn energy_mix(&self) -> Result<Frame> {
        let mut usecols = vec![YEAR_COLUMN];
        usecols.extend(ENERGY_MIX_COLUMNS.iter().map(|(c, _)| *c));
        let mut mix: Option<Frame> = None;
        for scenario in Scenario::MAIN {
            let frame = self.national_frame(scenario.file_stem(), &usecols)?
                .without_year(CALIBRATION_YEAR);
            let all = mix.get_or_insert_with(|| Frame::with_years(
                "energy mix", frame.years().to_vec()));
            for (column, _) in ENERGY_MIX_COLUMNS {
                all.insert_column(format!("{}_{column}", scenario.key()),
                                  frame.column(column)?.to_vec());
            }
        }
        Ok(mix.unwrap_or_else(|| Frame::with_years("energy mix", vec![])))
    }

    /// Table of `parameters` for `province` under `scenario`, without
    /// the calibration year.
    pub fn provincial(&self, province: &str, scenario: Scenario,
                      parameters: &[&str]) -> Result<Frame> {
        if province_name(province).is_none() {
            return Err(VizError::UnknownProvince(province.to_string()))
        }
        let mut usecols = vec![YEAR_COLUMN];
        usecols.extend_from_slice(parameters);
        let frame = Frame::from_path(&self.provincial_path(province, scenario),
                                     &usecols)?;
        Ok(frame.without_year(CALIBRATION_YEAR))
    }
}


/// Fixture datasets written to the temporary directory.
#[cfg(test)]
pub(crate) mod fixture {
    use std::fs;
    use std::path::PathBuf;
    use crate::constants::{data_provinces, ENERGY_MIX_COLUMNS, Scenario};

    /// Column written in every fixture file, with per-file values.
    pub(crate) const PARAMETERS: [&str; 5] =
        ["CO2_emi", "PM25_conc", "COL_share", "GDP", "pop"];

    /// Value of `parameter` in `year` for a file, `seed` distinguishes
    /// files.
    pub(crate) fn value(seed: f64, parameter: usize, year: i32) -> f64 {
        seed * 100. + parameter as f64 * 10. + (year - 2000) as f64
    }

    fn write_csv(path: PathBuf, seed: f64) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut header = vec!["t".to_string()];
        header.extend(PARAMETERS.iter().map(|p| p.to_string()));
        header.extend(ENERGY_MIX_COLUMNS.iter().map(|(c, _)| c.to_string()));
        let mut out = header.join(",") + "\n";
        for year in [2007, 2010, 2015, 2020, 2025, 2030] {
            let mut row = vec![year.to_string()];
            let n = PARAMETERS.len() + ENERGY_MIX_COLUMNS.len();
            row.extend((0 .. n).map(|i| value(seed, i, year).to_string()));
            out += &(row.join(",") + "\n");
        }
        fs::write(path, out).unwrap();
    }

    /// Seed of the national file of `scenario` (and of its `_lo`
    /// variant, which adds 0.5).
    pub(crate) fn national_seed(scenario: Scenario) -> f64 {
        Scenario::MAIN.into_iter().chain(Scenario::NH3)
            .position(|s| s == scenario).unwrap() as f64 + 1.
    }

    /// Seed of a provincial file: the BAU file of each province is
    /// above its scenario 4 file.
    pub(crate) fn provincial_seed(province_index: usize, scenario: Scenario) -> f64 {
        let base = province_index as f64 + 1.;
        if scenario == Scenario::Bau { base + 0.5 } else { base }
    }

    /// Write a complete dataset under a fresh temporary directory.
    pub(crate) fn dataset(name: &str) -> PathBuf {
        let root = std::env::temp_dir()
            .join(format!("crem-viz-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        for scenario in Scenario::MAIN.into_iter().chain(Scenario::NH3) {
            let stem = scenario.file_stem();
            let seed = national_seed(scenario);
            write_csv(root.join("national").join(format!("{stem}.csv")), seed);
            write_csv(root.join("national").join(format!("{stem}_lo.csv")),
                      seed + 0.5);
        }
        for (i, province) in data_provinces().enumerate() {
            for scenario in [Scenario::Four, Scenario::Bau] {
                write_csv(root.join(province)
                          .join(format!("{}.csv", scenario.file_stem())),
                          provincial_seed(i, scenario));
            }
        }
        root
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixture::{self, value};

    #[test]
    fn paths() {
        let d = Dataset::new("/data");
        assert_eq!(d.national_path("4_lo"), PathBuf::from("/data/national/4_lo.csv"));
        assert_eq!(d.provincial_path("BJ", Scenario::Bau),
                   PathBuf::from("/data/BJ/bau.csv"));
    }

    #[test]
    fn national_without_calibration_year() {
        let d = Dataset::new(fixture::dataset("national"));
        let s = d.national("CO2_emi", true).unwrap();
        let order: Vec<_> = s.sources.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Scenario::MAIN);
        let four = s.get(Scenario::Four).unwrap();
        assert_eq!(four.years(), &[2010, 2015, 2020, 2025, 2030]);
        let seed = fixture::national_seed(Scenario::Four);
        assert_eq!(four.value_at("CO2_emi", 2030).unwrap(), value(seed, 0, 2030));
        assert_eq!(s.data.len(), 4 * 5);

        let s = d.national("CO2_emi", false).unwrap();
        assert!(s.get(Scenario::Bau).is_none());
        assert_eq!(s.data.len(), 3 * 5);
    }

    #[test]
    fn national_lo_files() {
        let d = Dataset::new(fixture::dataset("national-lo"));
        let s = d.national_lo("PM25_conc").unwrap();
        let seed = fixture::national_seed(Scenario::Bau) + 0.5;
        assert_eq!(s.get(Scenario::Bau).unwrap().value_at("PM25_conc", 2010)
                   .unwrap(), value(seed, 1, 2010));
    }

    #[test]
    fn pm25_two_years() {
        let d = Dataset::new(fixture::dataset("pm25"));
        let s = d.pm25_national().unwrap();
        assert_eq!(s.parameter, "PM25_conc");
        assert!(s.sources.iter().all(|(_, f)| f.years() == [2010, 2030]));
        assert_eq!(s.data.len(), 8);
    }

    #[test]
    fn energy_mix_is_wide() {
        let d = Dataset::new(fixture::dataset("energy"));
        let mix = d.energy_mix().unwrap();
        assert_eq!(mix.column_names().count(), 4 * ENERGY_MIX_COLUMNS.len());
        let seed = fixture::national_seed(Scenario::Five);
        let gas = fixture::PARAMETERS.len() + 2;
        assert_eq!(mix.value_at("five_GAS", 2020).unwrap(), value(seed, gas, 2020));
        assert_eq!(mix.years()[0], 2010);
    }

    #[test]
    fn provincial_table() {
        let d = Dataset::new(fixture::dataset("provincial"));
        let f = d.provincial("BJ", Scenario::Four, &["GDP", "pop"]).unwrap();
        assert_eq!(f.column_names().collect::<Vec<_>>(), ["GDP", "pop"]);
        assert!(!f.years().contains(&CALIBRATION_YEAR));
    }

    #[test]
    fn unknown_province() {
        let d = Dataset::new(fixture::dataset("unknown"));
        match d.provincial("HK", Scenario::Four, &["GDP"]) {
            Err(VizError::UnknownProvince(code)) => assert_eq!(code, "HK"),
            r => panic!("unexpected {r:?}"),
        }
        assert!(matches!(d.provincial("../BJ", Scenario::Four, &["GDP"]),
                         Err(VizError::UnknownProvince(_))));
    }

    #[test]
    fn missing_file() {
        let d = Dataset::new(fixture::dataset("missing"));
        match d.provincial("XZ", Scenario::Four, &["GDP"]) {
            Err(VizError::Io { path, .. }) => assert!(path.ends_with("XZ/4.csv")),
            r => panic!("unexpected {r:?}"),
        }
    }
}
