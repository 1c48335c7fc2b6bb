//! Line chart definitions of the national trends.
//!
//! Charts are plain data: ranges, ticks and one [`LineSeries`] per
//! scenario (or energy source) with its own data source.  The page
//! templates draw them and wire the scenario selectors to
//! [`LinePlot::highlight`]'s alpha rule.

use serde::Serialize;
use crate::constants::{ENERGY_MIX_COLUMNS, Scenario};
use crate::data::{Dataset, NationalSeries};
use crate::error::Result;
use crate::frame::{Frame, YEAR_COLUMN};
use crate::provincial::{MapValue, ProvincialMap};
use crate::source::ColumnData;

pub const FIRST_YEAR: f64 = 2010.;
pub const LAST_YEAR: f64 = 2030.;
/// Room right of the last year, for series labels.
pub const DEFAULT_END_FACTOR: f64 = 5.;

pub const SELECTED_ALPHA: f64 = 0.8;
pub const DESELECTED_ALPHA: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

/// Horizontal range of the trend charts.
pub fn year_range(end_factor: Option<f64>) -> Range1d {
    Range1d { start: FIRST_YEAR - 1.,
              end: LAST_YEAR + end_factor.unwrap_or(DEFAULT_END_FACTOR) }
}

/// Vertical range covering `data` with a margin of a tenth of its
/// spread on both sides.  `NaN`s are ignored.
pub fn y_range(data: &[f64]) -> Range1d {
    let finite = || data.iter().copied().filter(|v| v.is_finite());
    let min = finite().fold(f64::INFINITY, f64::min);
    let max = finite().fold(f64::NEG_INFINITY, f64::max);
    if min > max { return Range1d { start: 0., end: 1. } }
    let margin = if max > min { (max - min) / 10. } else { min.abs().max(1.) / 10. };
    Range1d { start: min - margin, end: max + margin }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dashed,
}

/// Circles drawn at the data points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub line_width: f64,
    pub fill_color: String,
    pub fill_alpha: f64,
}

/// Text drawn right of the last point of a series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: String,
    pub font_size: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineSeries {
    /// Key of the series in page scripts.
    pub key: String,
    pub scenario: Option<Scenario>,
    /// Column of `source` drawn against the year column.
    pub y: String,
    pub color: String,
    pub alpha: f64,
    pub width: f64,
    pub dash: Dash,
    pub marker: Marker,
    pub label: Option<Label>,
    /// Hover text, in the templating syntax of the chart library.
    pub tooltip: String,
    pub source: Frame,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinePlot {
    pub x_range: Range1d,
    pub y_range: Range1d,
    pub width: u32,
    pub y_ticks: Vec<f64>,
    pub grid: bool,
    pub axis_color: Option<String>,
    pub series: Vec<LineSeries>,
}

impl LinePlot {
    pub fn series(&self, key: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.key == key)
    }

    /// Emphasize the series of the `selected` scenarios and of their
    /// NH3 variants; dim every other series.
    pub fn highlight(&mut self, selected: &[Scenario]) {
        let is_selected = |s: Scenario| selected.iter().any(|&sel| {
            sel == s || sel.nh3_variant() == Some(s) });
        for series in &mut self.series {
            series.alpha = match series.scenario {
                Some(s) if is_selected(s) => SELECTED_ALPHA,
                _ => DESELECTED_ALPHA,
            };
        }
    }
}

fn tooltip(parameter: &str) -> String {
    format!("@{parameter}{{0,0}} (@{YEAR_COLUMN})")
}

fn label_at_end(frame: &Frame, column: &str, dx: f64, dy: f64, text: &str,
                color: &str) -> Result<Option<Label>> {
    Ok(frame.last(column)?.map(|(year, value)| Label {
        x: year as f64 + dx, y: value + dy, text: text.to_string(),
        color: color.to_string(), font_size: "8pt" }))
}

/// One line per scenario of `national`, scenario 4 emphasized.
pub fn national_scenario_line_plot(national: &NationalSeries, y_ticks: &[f64],
                                   width: u32, grid: bool,
                                   end_factor: Option<f64>) -> Result<LinePlot> {
    let parameter = national.parameter.as_str();
    let mut series = Vec::with_capacity(national.sources.len());
    for (scenario, frame) in &national.sources {
        let color = scenario.color();
        series.push(LineSeries {
            key: scenario.key().to_string(),
            scenario: Some(*scenario),
            y: parameter.to_string(),
            color: color.to_string(),
            alpha: if *scenario == Scenario::Four { SELECTED_ALPHA }
                   else { DESELECTED_ALPHA },
            width: 2.,
            dash: Dash::Solid,
            marker: Marker { size: 4., line_width: 0.5,
                             fill_color: color.to_string(), fill_alpha: 0.6 },
            label: label_at_end(frame, parameter, 1., 0., scenario.label(),
                                color)?,
            tooltip: tooltip(parameter),
            source: frame.clone(),
        });
    }
    tracing::info!(parameter, series = series.len(), "built national line plot");
    Ok(LinePlot { x_range: year_range(end_factor),
                  y_range: y_range(&national.data), width,
                  y_ticks: y_ticks.to_vec(), grid, axis_color: None, series })
}

/// Energy use by source for one scenario, from the wide table of
/// [`Dataset::energy_mix`].
pub fn energy_mix_plot(mix: &Frame, scenario: Scenario, width: u32)
                       -> Result<LinePlot> {
    let mut series = Vec::with_capacity(ENERGY_MIX_COLUMNS.len());
    for (column, text) in ENERGY_MIX_COLUMNS {
        let key = format!("{}_{column}", scenario.key());
        series.push(LineSeries {
            label: label_at_end(mix, &key, 2., -200., text, "grey")?,
            tooltip: tooltip(&key),
            y: key.clone(),
            key,
            scenario: None,
            color: "black".to_string(),
            alpha: SELECTED_ALPHA,
            width: 2.,
            dash: Dash::Solid,
            marker: Marker { size: 4., line_width: 0.,
                             fill_color: "black".to_string(), fill_alpha: 0.6 },
            source: mix.clone(),
        });
    }
    tracing::info!(scenario = %scenario, "built energy mix plot");
    Ok(LinePlot { x_range: year_range(Some(15.)),
                  y_range: Range1d { start: 0., end: 5000. }, width,
                  y_ticks: vec![500., 2500., 4500.], grid: true,
                  axis_color: Some(scenario.color().to_string()), series })
}

/// CO2 emissions and PM2.5 concentrations side by side, driven by a
/// common scenario selector.
pub fn dual_pollution_plots(dataset: &Dataset) -> Result<(LinePlot, LinePlot)> {
    let width = 800;
    let co2 = national_scenario_line_plot(
        &dataset.national("CO2_emi", true)?, &[7000., 11000., 15000.],
        width, true, None)?;
    let pm25 = national_scenario_line_plot(
        &dataset.national("PM25_conc", true)?, &[20., 30., 40.],
        width, true, None)?;
    Ok((co2, pm25))
}

/// PM2.5 concentrations with the NH3 control scenarios drawn dashed
/// over the main ones.
pub fn nh3_plot(dataset: &Dataset) -> Result<LinePlot> {
    let parameter = "PM25_conc";
    let mut plot = national_scenario_line_plot(
        &dataset.national(parameter, true)?, &[25., 35., 45.], 1200, true,
        None)?;
    let nh3 = dataset.national_scenarios(parameter, &Scenario::NH3)?;
    for (scenario, frame) in nh3.sources {
        let color = scenario.color();
        plot.series.push(LineSeries {
            key: scenario.key().to_string(),
            scenario: Some(scenario),
            y: parameter.to_string(),
            color: color.to_string(),
            alpha: if scenario == Scenario::FourNh3 { SELECTED_ALPHA }
                   else { DESELECTED_ALPHA },
            width: 4.,
            dash: Dash::Dashed,
            marker: Marker { size: 8., line_width: 2.,
                             fill_color: "white".to_string(), fill_alpha: 1. },
            label: None,
            tooltip: tooltip(parameter),
            source: frame,
        });
    }
    Ok(plot)
}

/// One line per province, colored like the province on a choropleth.
///
/// `source` has one row per province: `index` (province code), `t` and
/// `<ys>` (the years and values of the line), `<color>`, and the label
/// position `text_x`, `text_y`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProvincialLinePlot {
    pub x_range: Range1d,
    pub y_range: Range1d,
    pub width: u32,
    pub y_ticks: Vec<f64>,
    pub ys: String,
    /// Color column, shared with the map the lines follow.
    pub color: String,
    pub alpha: f64,
    pub line_width: f64,
    pub font_size: &'static str,
    pub source: ColumnData,
}

/// `parameter` over the years of `scenario` for every province of
/// `map` that has data.  The province code is written right of the
/// last point of each line.
pub fn provincial_scenario_line_plot(dataset: &Dataset, map: &ProvincialMap,
                                     parameter: &str, scenario: Scenario,
                                     y_ticks: &[f64], width: u32)
                                     -> Result<ProvincialLinePlot> {
    let mut codes = Vec::new();
    let mut years = Vec::new();
    let mut lines = Vec::new();
    let mut colors = Vec::new();
    let mut text = Vec::new();
    let mut max = f64::NEG_INFINITY;
    for entry in &map.entries {
        if entry.value == MapValue::NoData { continue }
        let frame = dataset.provincial(&entry.province, scenario, &[parameter])?;
        let values = frame.column(parameter)?;
        max = values.iter().copied().filter(|v| v.is_finite())
            .fold(max, f64::max);
        let last = frame.last(parameter)?;
        codes.push(entry.province.as_str());
        years.push(frame.years().to_vec());
        lines.push(values.iter()
                   .map(|&v| if v.is_finite() { Some(v) } else { None })
                   .collect::<Vec<_>>());
        colors.push(entry.color.as_str());
        text.push(last.filter(|(_, v)| v.is_finite())
                  .map(|(year, v)| (year as f64 + 0.5, v)));
    }
    let mut source = ColumnData::new();
    source.insert("index", codes)?;
    source.insert(YEAR_COLUMN, years)?;
    source.insert(parameter, lines)?;
    source.insert(map.color_key(), colors)?;
    source.insert("text_x", text.iter().map(|t| t.map(|(x, _)| x)))?;
    source.insert("text_y", text.iter().map(|t| t.map(|(_, y)| y)))?;
    let y_range = if max.is_finite() { Range1d { start: 0., end: max * 1.1 } }
                  else { Range1d { start: 0., end: 1. } };
    tracing::info!(parameter, scenario = %scenario, provinces = source.len(),
                   "built provincial line plot");
    Ok(ProvincialLinePlot { x_range: year_range(Some(2.)), y_range, width,
                            y_ticks: y_ticks.to_vec(),
                            ys: parameter.to_string(), color: map.color_key(),
                            alpha: SELECTED_ALPHA, line_width: 2.,
                            font_size: "8pt", source })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn ranges() {
        assert_eq!(year_range(None), Range1d { start: 2009., end: 2035. });
        assert_eq!(year_range(Some(15.)).end, 2045.);
        assert_eq!(y_range(&[10., 20., f64::NAN, 30.]),
                   Range1d { start: 8., end: 32. });
        assert_eq!(y_range(&[]), Range1d { start: 0., end: 1. });
        let r = y_range(&[50., 50.]);
        assert!(r.start < 50. && r.end > 50.);
    }

    #[test]
    fn national_plot_emphasizes_four() {
        let d = Dataset::new(fixture::dataset("chart-national"));
        let plot = national_scenario_line_plot(
            &d.national("CO2_emi", true).unwrap(), &[1., 2.], 600, true,
            Some(2.)).unwrap();
        assert_eq!(plot.series.len(), 4);
        assert_eq!(plot.series("four").unwrap().alpha, SELECTED_ALPHA);
        assert_eq!(plot.series("bau").unwrap().alpha, DESELECTED_ALPHA);
        let label = plot.series("five").unwrap().label.as_ref().unwrap();
        assert_eq!(label.x, 2031.);
        assert_eq!(label.text, "5%");
        assert_eq!(plot.series[0].tooltip, "@CO2_emi{0,0} (@t)");
        assert_eq!(plot.x_range.end, 2032.);
    }

    #[test]
    fn highlight_selected_and_nh3() {
        let d = Dataset::new(fixture::dataset("chart-nh3"));
        let mut plot = nh3_plot(&d).unwrap();
        assert_eq!(plot.series.len(), 7);
        assert_eq!(plot.series("four_nh3").unwrap().dash, Dash::Dashed);
        plot.highlight(&Scenario::parse_selection("three,bau,"));
        let alpha = |k: &str| plot.series(k).unwrap().alpha;
        assert_eq!(alpha("three"), SELECTED_ALPHA);
        assert_eq!(alpha("three_nh3"), SELECTED_ALPHA);
        assert_eq!(alpha("bau"), SELECTED_ALPHA);
        assert_eq!(alpha("four"), DESELECTED_ALPHA);
        assert_eq!(alpha("four_nh3"), DESELECTED_ALPHA);
    }

    #[test]
    fn energy_mix_series() {
        let d = Dataset::new(fixture::dataset("chart-energy"));
        let mix = d.energy_mix().unwrap();
        let plot = energy_mix_plot(&mix, Scenario::Three, 700).unwrap();
        assert_eq!(plot.series.len(), ENERGY_MIX_COLUMNS.len());
        let coal = plot.series("three_COL").unwrap();
        let (year, value) = mix.last("three_COL").unwrap().unwrap();
        let label = coal.label.as_ref().unwrap();
        assert_eq!((label.x, label.y), (year as f64 + 2., value - 200.));
        assert_eq!(label.text, "Coal");
        assert_eq!(plot.axis_color.as_deref(), Some(Scenario::Three.color()));
    }

    #[test]
    fn dual_plots_share_scenarios() {
        let d = Dataset::new(fixture::dataset("chart-dual"));
        let (co2, pm25) = dual_pollution_plots(&d).unwrap();
        let keys = |p: &LinePlot| p.series.iter().map(|s| s.key.clone())
            .collect::<Vec<_>>();
        assert_eq!(keys(&co2), keys(&pm25));
        assert_eq!(co2.width, 800);
        assert!(serde_json::to_string(&co2).unwrap().contains("\"x_range\""));
    }

    #[test]
    fn provincial_lines_follow_the_map() {
        use serde_json::json;
        use crate::{ColorScale, Config};
        use crate::constants::{data_provinces, SENTINEL_PROVINCE};
        use crate::provincial::MapData;

        let d = Dataset::new(fixture::dataset("chart-provincial"));
        let map = MapData::new(&d, &Config::default())
            .coal_share_2010("col_2010", &ColorScale::default()).unwrap();
        let plot = provincial_scenario_line_plot(&d, &map, "CO2_emi",
                                                 Scenario::Four, &[1., 2.],
                                                 500).unwrap();
        let n = data_provinces().count();
        assert_eq!(plot.source.len(), n);
        let index = plot.source.column("index").unwrap();
        assert!(!index.contains(&json!(SENTINEL_PROVINCE)));
        assert_eq!(plot.color, "col_2010_color");
        let first = data_provinces().next().unwrap();
        assert_eq!(index[0], json!(first));
        assert_eq!(plot.source.column("col_2010_color").unwrap()[0],
                   json!(map.entry(first).unwrap().color));
        assert_eq!(plot.source.column("t").unwrap()[0],
                   json!([2010, 2015, 2020, 2025, 2030]));
        let seed = fixture::provincial_seed(0, Scenario::Four);
        assert_eq!(plot.source.column("text_x").unwrap()[0], json!(2030.5));
        assert_eq!(plot.source.column("text_y").unwrap()[0],
                   json!(fixture::value(seed, 0, 2030)));
        let top = fixture::value(fixture::provincial_seed(n - 1, Scenario::Four),
                                 0, 2030);
        assert_eq!(plot.y_range, Range1d { start: 0., end: top * 1.1 });
        assert_eq!(plot.x_range, year_range(Some(2.)));
    }
}
