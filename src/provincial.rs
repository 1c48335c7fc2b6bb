//! Provincial choropleth tables.
//!
//! Every table holds one colored value per province.  The values come
//! from the scenario 4 files of each province; change tables compare
//! scenario 4 with business as usual in 2030.  The
//! [`SENTINEL_PROVINCE`] has no data: it never takes part in the
//! normalization and always gets the placeholder value and color.

use std::collections::HashMap;
use serde::{Serialize, Serializer};
use crate::{ColorScale, Config};
use crate::constants::{data_provinces, Scenario, SENTINEL_COLOR,
                       SENTINEL_PROVINCE, SENTINEL_VALUE};
use crate::data::Dataset;
use crate::error::Result;
use crate::frame::Frame;
use crate::legend::LegendSample;
use crate::normalize::{boost_or, normalize_and_color, Sign};
use crate::source::ColumnData;

/// Year of the change tables.
pub const CHANGE_YEAR: i32 = 2030;

/// Value displayed for a province.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapValue {
    Number(f64),
    NoData,
}

impl Serialize for MapValue {
    fn serialize<S: Serializer>(&self, serializer: S)
                                -> std::result::Result<S::Ok, S::Error> {
        match self {
            MapValue::Number(v) => serializer.serialize_f64(*v),
            MapValue::NoData => serializer.serialize_str(SENTINEL_VALUE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProvinceEntry {
    pub province: String,
    pub value: MapValue,
    pub color: String,
    /// Relative change, for tables comparing two scenarios.
    pub percent: Option<f64>,
}

impl ProvinceEntry {
    fn sentinel() -> Self {
        ProvinceEntry { province: SENTINEL_PROVINCE.to_string(),
                        value: MapValue::NoData,
                        color: SENTINEL_COLOR.to_string(),
                        percent: None }
    }
}

/// A colored provincial table and its legend.
///
/// `prefix` names the columns of the data source (`<prefix>_val`,
/// `<prefix>_color`, `<prefix>_percent`) so that several tables can
/// share one map.
#[derive(Clone, Debug)]
pub struct ProvincialMap {
    pub prefix: String,
    pub parameter: String,
    pub sign: Sign,
    /// Provinces with a value, then the sentinel.
    pub entries: Vec<ProvinceEntry>,
    pub legend: Vec<LegendSample>,
    with_percent: bool,
}

impl ProvincialMap {
    fn build(prefix: &str, parameter: &str, column: &[(&str, f64)],
             percents: Option<&HashMap<&str, f64>>, scale: &ColorScale,
             boost: f64, legend_x_origin: f64) -> Result<Self> {
        let normalized = normalize_and_color(column, scale, boost,
                                             legend_x_origin)?;
        let mut entries: Vec<ProvinceEntry> = normalized.rows.into_iter()
            .map(|row| ProvinceEntry {
                province: row.key.to_string(),
                value: MapValue::Number(row.value),
                color: row.color,
                percent: percents.and_then(|p| p.get(row.key).copied()),
            })
            .collect();
        entries.push(ProvinceEntry::sentinel());
        tracing::info!(prefix, parameter, scale = scale.name(), boost,
                       provinces = entries.len(), "built provincial map");
        Ok(ProvincialMap { prefix: prefix.to_string(),
                           parameter: parameter.to_string(),
                           sign: normalized.mapping.sign, entries,
                           legend: normalized.legend,
                           with_percent: percents.is_some() })
    }

    pub fn entry(&self, province: &str) -> Option<&ProvinceEntry> {
        self.entries.iter().find(|e| e.province == province)
    }

    pub fn value_key(&self) -> String { format!("{}_val", self.prefix) }

    pub fn color_key(&self) -> String { format!("{}_color", self.prefix) }

    pub fn percent_key(&self) -> String { format!("{}_percent", self.prefix) }

    /// Whether entries carry a relative change.
    pub fn has_percent(&self) -> bool { self.with_percent }

    /// The table as a column data source indexed by province code.
    pub fn column_data(&self) -> Result<ColumnData> {
        let mut data = ColumnData::new();
        data.insert("index", self.entries.iter().map(|e| &e.province))?;
        data.insert(self.value_key(), self.entries.iter().map(|e| e.value))?;
        data.insert(self.color_key(), self.entries.iter().map(|e| &e.color))?;
        if self.with_percent {
            data.insert(self.percent_key(),
                        self.entries.iter().map(|e| e.percent))?;
        }
        Ok(data)
    }

    /// The legend as a column data source (`vals`, `color`, `x`).
    pub fn legend_data(&self) -> Result<ColumnData> {
        let mut data = ColumnData::new();
        data.insert("vals", self.legend.iter().map(|s| s.value))?;
        data.insert("color", self.legend.iter().map(|s| &s.color))?;
        data.insert("x", self.legend.iter().map(|s| s.x))?;
        Ok(data)
    }
}

/// Absolute and relative change of `parameter` in 2030 between the
/// tables of scenario 4 and of business as usual.
pub fn change_vs_bau(four: &Frame, bau: &Frame, parameter: &str)
                     -> Result<(f64, f64)> {
    let four = four.value_at(parameter, CHANGE_YEAR)?;
    let bau = bau.value_at(parameter, CHANGE_YEAR)?;
    Ok((four - bau, (four - bau) / bau))
}

/// Builder of the provincial tables of the site.
pub struct MapData<'a> {
    dataset: &'a Dataset,
    legend_x_origin: f64,
    default_boost: f64,
}

impl<'a> MapData<'a> {
    pub fn new(dataset: &'a Dataset, config: &Config) -> Self {
        MapData { dataset, legend_x_origin: config.legend_x_origin,
                  default_boost: config.default_boost }
    }

    fn boost(&self, boost: Option<f64>) -> f64 {
        boost_or(boost, self.default_boost)
    }

    /// Value of `parameter` in `year` of scenario 4, per province.
    pub fn specific(&self, prefix: &str, scale: &ColorScale,
                    parameter: &str, year: i32, boost: Option<f64>)
                    -> Result<ProvincialMap> {
        let mut column = Vec::new();
        for province in data_provinces() {
            let four = self.dataset.provincial(province, Scenario::Four,
                                               &[parameter])?;
            column.push((province, four.value_at(parameter, year)?));
        }
        ProvincialMap::build(prefix, parameter, &column, None, scale,
                             self.boost(boost), self.legend_x_origin)
    }

    /// Change of `parameter` in 2030, scenario 4 against business as
    /// usual, per province.  Colors follow the absolute change.
    pub fn change_vs_bau(&self, prefix: &str, scale: &ColorScale,
                         parameter: &str) -> Result<ProvincialMap> {
        let mut column = Vec::new();
        let mut percents = HashMap::new();
        for province in data_provinces() {
            let four = self.dataset.provincial(province, Scenario::Four,
                                               &[parameter])?;
            let bau = self.dataset.provincial(province, Scenario::Bau,
                                              &[parameter])?;
            let (absolute, percent) = change_vs_bau(&four, &bau, parameter)?;
            column.push((province, absolute));
            percents.insert(province, percent);
        }
        ProvincialMap::build(prefix, parameter, &column, Some(&percents),
                             scale, self.boost(None), self.legend_x_origin)
    }

    pub fn coal_share_2010(&self, prefix: &str, scale: &ColorScale)
                           -> Result<ProvincialMap> {
        self.specific(prefix, scale, "COL_share", 2010, None)
    }

    pub fn population_2010(&self, prefix: &str, scale: &ColorScale)
                           -> Result<ProvincialMap> {
        self.specific(prefix, scale, "pop", 2010, None)
    }

    /// GDP change in 2030.  The changes are small next to their norm,
    /// hence the strong boost.
    pub fn gdp_delta_2030(&self, prefix: &str, scale: &ColorScale)
                          -> Result<ProvincialMap> {
        self.specific(prefix, scale, "GDP_delta", 2030, Some(15.))
    }

    pub fn gdp_2010(&self, prefix: &str, scale: &ColorScale)
                    -> Result<ProvincialMap> {
        self.specific(prefix, scale, "GDP", 2010, None)
    }

    pub fn pm25_exposure_2030(&self, prefix: &str, scale: &ColorScale)
                              -> Result<ProvincialMap> {
        self.specific(prefix, scale, "PM25_exposure", 2030, None)
    }

    pub fn co2_2030_change(&self, prefix: &str, scale: &ColorScale)
                           -> Result<ProvincialMap> {
        self.change_vs_bau(prefix, scale, "CO2_emi")
    }

    pub fn pm25_2030_change(&self, prefix: &str, scale: &ColorScale)
                            -> Result<ProvincialMap> {
        self.change_vs_bau(prefix, scale, "PM25_conc")
    }
}


#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    /// Table with the prefix `t` built directly from a column.
    pub(crate) fn map(column: &[(&str, f64)]) -> ProvincialMap {
        ProvincialMap::build("t", "test", column, None,
                             &ColorScale::default(), 2., 76.).unwrap()
    }
}
