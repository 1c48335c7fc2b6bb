//! Scaling of a numeric column and its resolution to colors.
//!
//! A column is scaled by its Euclidean norm and a boost factor before
//! being fed to a [`ColorScale`].  Columns whose values are all
//! non-positive are flipped so that larger magnitudes always get the
//! darker end of a sequential scale.

use serde::Serialize;
use crate::ColorScale;
use crate::error::{Result, VizError};
use crate::legend::{self, LegendSample};

/// Boost applied when a visualization does not specify one.
pub const DEFAULT_BOOST: f64 = 2.;

/// `boost`, or `default` when it is absent or zero.
pub fn boost_or(boost: Option<f64>, default: f64) -> f64 {
    match boost {
        Some(b) if b != 0. => b,
        _ => default,
    }
}

/// Orientation of a column with respect to the color scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// `Negative` iff the maximum of `values` is ≤ 0.  `NaN`s are
    /// ignored.
    pub fn of_column(values: impl IntoIterator<Item = f64>) -> Sign {
        let max = values.into_iter().filter(|v| !v.is_nan())
            .fold(f64::NEG_INFINITY, f64::max);
        if max <= 0. { Sign::Negative } else { Sign::Positive }
    }

    #[inline]
    pub fn factor(self) -> f64 {
        match self { Sign::Positive => 1., Sign::Negative => -1. }
    }
}

/// The affine map `v ↦ v · sign / norm · boost` shared by the colored
/// rows and the legend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMapping {
    pub sign: Sign,
    /// Euclidean norm of the (unsigned) column.
    pub norm: f64,
    pub boost: f64,
}

impl ColorMapping {
    /// Mapping of the finite `values` (at least one, not all zero).
    pub fn of_values(values: &[f64], boost: f64) -> Result<Self> {
        if values.is_empty() { return Err(VizError::EmptyColumn) }
        // Scaled by the largest magnitude so the squares cannot overflow.
        let top = values.iter().fold(0., |m: f64, v| m.max(v.abs()));
        if top == 0. { return Err(VizError::ZeroNorm) }
        let norm = top * values.iter().map(|v| (v / top).powi(2))
            .sum::<f64>().sqrt();
        Ok(ColorMapping { sign: Sign::of_column(values.iter().copied()),
                          norm, boost })
    }

    #[inline]
    pub fn scaled(&self, value: f64) -> f64 {
        value * self.sign.factor() / self.norm * self.boost
    }

    pub fn color(&self, scale: &ColorScale, value: f64) -> String {
        scale.hex(self.scaled(value))
    }
}

/// A row of the column after normalization.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Colored<K> {
    pub key: K,
    pub value: f64,
    pub scaled: f64,
    pub color: String,
}

/// Result of [`normalize_and_color`].
#[derive(Clone, Debug)]
pub struct Normalized<K> {
    pub mapping: ColorMapping,
    /// Rows with a finite value, in input order.
    pub rows: Vec<Colored<K>>,
    /// Number of rows dropped because their value was missing.
    pub dropped: usize,
    pub legend: Vec<LegendSample>,
}

/// Color every row of `column` with `scale`.
///
/// Rows whose value is `NaN` (or infinite) are dropped: they take no
/// part in the norm and do not appear in the output.  The legend is
/// built from the kept values with the same mapping, its samples start
/// at `legend_x_origin`.
pub fn normalize_and_color<K: Clone>(
    column: &[(K, f64)], scale: &ColorScale, boost: f64,
    legend_x_origin: f64) -> Result<Normalized<K>> {
    let kept: Vec<&(K, f64)> = column.iter()
        .filter(|(_, v)| v.is_finite()).collect();
    let dropped = column.len() - kept.len();
    if dropped > 0 {
        tracing::warn!(dropped, "dropping rows without a value before normalization");
    }
    let values: Vec<f64> = kept.iter().map(|(_, v)| *v).collect();
    let mapping = ColorMapping::of_values(&values, boost)?;
    let rows = kept.into_iter().map(|(key, value)| {
        let scaled = mapping.scaled(*value);
        Colored { key: key.clone(), value: *value, scaled,
                  color: scale.hex(scaled) }
    }).collect();
    let legend = legend::build_legend(&values, &mapping, scale,
                                      legend_x_origin)?;
    tracing::debug!(sign = ?mapping.sign, norm = mapping.norm, boost,
                    kept = values.len(), dropped, scale = scale.name(),
                    "normalized column");
    Ok(Normalized { mapping, rows, dropped, legend })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 5e-3 }

    #[test]
    fn norm_example() {
        let col = [("a", 10.), ("b", 20.), ("c", 30.)];
        let n = normalize_and_color(&col, &ColorScale::default(), 2., 0.)
            .unwrap();
        assert_eq!(n.mapping.sign, Sign::Positive);
        assert!(close(n.mapping.norm, 37.417), "{}", n.mapping.norm);
        let scaled: Vec<f64> = n.rows.iter().map(|r| r.scaled).collect();
        for (s, e) in scaled.iter().zip([0.535, 1.069, 1.604]) {
            assert!(close(*s, e), "{s} ≉ {e}");
        }
        assert_eq!(n.dropped, 0);
    }

    #[test]
    fn sign_of_column() {
        assert_eq!(Sign::of_column([-3., 0., -1.]), Sign::Negative);
        assert_eq!(Sign::of_column([-3., 0.5]), Sign::Positive);
        assert_eq!(Sign::of_column([0., 0.]), Sign::Negative);
        assert_eq!(Sign::of_column([f64::NAN, 2.]), Sign::Positive);
    }

    #[test]
    fn negative_column_is_flipped() {
        let col = [("a", -10.), ("b", -20.)];
        let n = normalize_and_color(&col, &ColorScale::default(), 2., 0.)
            .unwrap();
        assert_eq!(n.mapping.sign, Sign::Negative);
        assert!(n.rows.iter().all(|r| r.scaled > 0.));
        assert_eq!(n.rows[0].value, -10.);
    }

    #[test]
    fn missing_values_are_dropped() {
        let col = [("a", 3.), ("b", f64::NAN), ("c", 4.)];
        let n = normalize_and_color(&col, &ColorScale::default(), 1., 0.)
            .unwrap();
        assert_eq!(n.dropped, 1);
        assert_eq!(n.mapping.norm, 5.);
        let keys: Vec<_> = n.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, ["a", "c"]);
        assert!(n.rows.iter().all(|r| r.color.starts_with('#')
                                   && r.color.len() == 7));
    }

    #[test]
    fn empty_and_zero_columns() {
        let s = ColorScale::default();
        let empty: [(&str, f64); 1] = [("a", f64::NAN)];
        assert!(matches!(normalize_and_color(&empty, &s, 2., 0.),
                         Err(VizError::EmptyColumn)));
        let zeros = [("a", 0.), ("b", 0.)];
        assert!(matches!(normalize_and_color(&zeros, &s, 2., 0.),
                         Err(VizError::ZeroNorm)));
    }

    #[test]
    fn boost_default() {
        assert_eq!(boost_or(None, DEFAULT_BOOST), 2.);
        assert_eq!(boost_or(Some(0.), DEFAULT_BOOST), 2.);
        assert_eq!(boost_or(Some(15.), DEFAULT_BOOST), 15.);
    }

    #[test]
    fn huge_values_keep_their_colors() {
        let s = ColorScale::default();
        let small = normalize_and_color(&[("a", 1.), ("b", 2.)], &s, 2., 0.)
            .unwrap();
        let huge = normalize_and_color(&[("a", 1e200), ("b", 2e200)], &s, 2., 0.)
            .unwrap();
        assert!(huge.mapping.norm.is_finite());
        assert!((huge.mapping.norm / 1e200 - 5f64.sqrt()).abs() < 1e-12);
        let colors = |n: &Normalized<&str>| n.rows.iter()
            .map(|r| r.color.clone()).collect::<Vec<_>>();
        assert_eq!(colors(&huge), colors(&small));
        assert_ne!(huge.rows[0].color, huge.rows[1].color);
    }

    #[test]
    fn larger_boost_darkens() {
        let col = [("a", 1.), ("b", 2.), ("c", 3.)];
        let s = ColorScale::default();
        let soft = normalize_and_color(&col, &s, 0.5, 0.).unwrap();
        let hard = normalize_and_color(&col, &s, 15., 0.).unwrap();
        assert_ne!(soft.rows[0].color, hard.rows[0].color);
        assert_eq!(hard.rows[2].color, "#08306b");
    }
}
