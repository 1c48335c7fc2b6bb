//! Province geometry and the data sources of the choropleth map.

use std::{fs::File, io, path::Path};
use serde::{Deserialize, Serialize};
use crate::Config;
use crate::constants::SENTINEL_PROVINCE;
use crate::error::{Result, VizError};
use crate::provincial::{ProvinceEntry, ProvincialMap};
use crate::source::ColumnData;

/// Outline and label position of a province, in map coordinates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProvinceShape {
    /// Province code.
    pub alpha: String,
    #[serde(default)]
    pub name: Option<String>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    #[serde(default)]
    pub label_x: Option<f64>,
    #[serde(default)]
    pub label_y: Option<f64>,
}

/// Geometry of all provinces, read from a JSON array of
/// [`ProvinceShape`]s.
#[derive(Clone, Debug, Default)]
pub struct ProvinceGeometry {
    shapes: Vec<ProvinceShape>,
}

impl ProvinceGeometry {
    pub fn new(shapes: Vec<ProvinceShape>) -> Self { ProvinceGeometry { shapes } }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Ok(ProvinceGeometry { shapes: serde_json::from_reader(reader)? })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let fh = File::open(path).map_err(|source| VizError::Io {
            path: path.to_path_buf(), source })?;
        let geometry = Self::from_reader(io::BufReader::new(fh))?;
        tracing::debug!(path = %path.display(), provinces = geometry.shapes.len(),
                        "loaded province geometry");
        Ok(geometry)
    }

    /// Read the geometry file named by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_path(&config.province_map)
    }

    pub fn shapes(&self) -> &[ProvinceShape] { &self.shapes }

    pub fn get(&self, code: &str) -> Option<&ProvinceShape> {
        self.shapes.iter().find(|s| s.alpha == code)
    }
}

/// The map drawn in two layers: provinces with data, and the sentinel
/// drawn with its placeholder.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapSources {
    pub mainland: ColumnData,
    pub sentinel: ColumnData,
}

/// Join `map` with `geometry`.
///
/// Every province of either side gets a row (geometry order first);
/// missing cells are `null`.  The sentinel row goes to its own source.
pub fn map_sources(map: &ProvincialMap, geometry: &ProvinceGeometry)
                   -> Result<MapSources> {
    let mut codes: Vec<&str> = geometry.shapes.iter()
        .map(|s| s.alpha.as_str()).collect();
    for e in &map.entries {
        if !codes.contains(&e.province.as_str()) {
            codes.push(&e.province);
        }
    }
    let (sentinel, mainland): (Vec<&str>, Vec<&str>) = codes.into_iter()
        .partition(|&c| c == SENTINEL_PROVINCE);
    Ok(MapSources { mainland: source_of(&mainland, map, geometry)?,
                    sentinel: source_of(&sentinel, map, geometry)? })
}

fn source_of(codes: &[&str], map: &ProvincialMap, geometry: &ProvinceGeometry)
             -> Result<ColumnData> {
    let entries: Vec<Option<&ProvinceEntry>> =
        codes.iter().map(|c| map.entry(c)).collect();
    let shapes: Vec<Option<&ProvinceShape>> =
        codes.iter().map(|c| geometry.get(c)).collect();
    let mut data = ColumnData::new();
    data.insert("index", codes)?;
    data.insert(map.value_key(), entries.iter().map(|e| e.map(|e| e.value)))?;
    data.insert(map.color_key(), entries.iter().map(|e| e.map(|e| &e.color)))?;
    if map.has_percent() {
        data.insert(map.percent_key(),
                    entries.iter().map(|e| e.and_then(|e| e.percent)))?;
    }
    data.insert("name", shapes.iter().map(|s| s.and_then(|s| s.name.as_ref())))?;
    data.insert("xs", shapes.iter().map(|s| s.map(|s| &s.xs)))?;
    data.insert("ys", shapes.iter().map(|s| s.map(|s| &s.ys)))?;
    data.insert("label_x", shapes.iter().map(|s| s.and_then(|s| s.label_x)))?;
    data.insert("label_y", shapes.iter().map(|s| s.and_then(|s| s.label_y)))?;
    Ok(data)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::constants::SENTINEL_VALUE;

    const GEOMETRY: &str = r#"[
        {"alpha": "AH", "name": "Anhui", "xs": [115, 119, 117], "ys": [30, 31, 34],
         "label_x": 117.2, "label_y": 31.8},
        {"alpha": "XZ", "name": "Tibet", "xs": [80, 98, 90], "ys": [28, 30, 36]},
        {"alpha": "ZJ", "xs": [118, 122, 120], "ys": [27, 29, 31]}
    ]"#;

    fn provincial_map() -> ProvincialMap {
        crate::provincial::tests_support::map(&[("AH", 2.), ("BJ", 4.)])
    }

    #[test]
    fn geometry_from_json() {
        let g = ProvinceGeometry::from_reader(GEOMETRY.as_bytes()).unwrap();
        assert_eq!(g.shapes().len(), 3);
        assert_eq!(g.get("ZJ").unwrap().name, None);
        assert_eq!(g.get("AH").unwrap().label_x, Some(117.2));
        assert!(g.get("BJ").is_none());
    }

    #[test]
    fn outer_join_and_split() {
        let g = ProvinceGeometry::from_reader(GEOMETRY.as_bytes()).unwrap();
        let m = provincial_map();
        let s = map_sources(&m, &g).unwrap();
        assert_eq!(s.mainland.column("index").unwrap(),
                   &[json!("AH"), json!("ZJ"), json!("BJ")]);
        let colors = s.mainland.column("t_color").unwrap();
        assert!(colors[0].is_string());
        assert!(colors[1].is_null());
        assert_eq!(s.mainland.column("xs").unwrap()[2], json!(null));
        assert_eq!(s.sentinel.len(), 1);
        assert_eq!(s.sentinel.column("t_val").unwrap()[0], json!(SENTINEL_VALUE));
        assert_eq!(s.sentinel.column("name").unwrap()[0], json!("Tibet"));
        assert!(s.mainland.column("t_percent").is_none());
    }

    #[test]
    fn missing_geometry_file() {
        let r = ProvinceGeometry::from_path(Path::new("/nonexistent/provinces.json"));
        assert!(matches!(r, Err(VizError::Io { .. })));
    }

    #[test]
    fn geometry_from_config() {
        let path = std::env::temp_dir()
            .join(format!("crem-viz-{}-provinces.json", std::process::id()));
        std::fs::write(&path, GEOMETRY).unwrap();
        let config = Config { province_map: path.clone(), ..Config::default() };
        let g = ProvinceGeometry::from_config(&config).unwrap();
        assert_eq!(g.get("XZ").unwrap().name.as_deref(), Some("Tibet"));

        let config = Config { province_map: path.with_extension("missing"),
                              ..Config::default() };
        match ProvinceGeometry::from_config(&config) {
            Err(VizError::Io { path: p, .. }) => assert_eq!(p, config.province_map),
            r => panic!("unexpected {r:?}"),
        }
    }
}
