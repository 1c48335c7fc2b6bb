//! Color legend strips for choropleth maps.

use serde::Serialize;
use crate::ColorScale;
use crate::error::{Result, VizError};
use crate::normalize::ColorMapping;

/// Number of samples in a legend strip.
pub const LEGEND_SAMPLES: usize = 100;

/// Horizontal distance between two consecutive samples.
const SAMPLE_WIDTH: f64 = 0.25;

/// One sample of a legend strip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendSample {
    pub value: f64,
    pub color: String,
    pub x: f64,
}

/// Bounds of the legend of `values` (finite, non-empty).
///
/// The bounds are the rounded extrema.  When rounding collapses them,
/// the unrounded spread is used instead and, when the values are all
/// equal, the strip spans one unit around their value.
pub fn legend_range(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() { return Err(VizError::EmptyColumn) }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min.round_ties_even();
    let mut hi = max.round_ties_even();
    if hi == lo {
        hi = lo + (max - min);
        if hi == lo { return Ok((lo - 0.5, lo + 0.5)) }
    }
    Ok((lo, hi))
}

/// `n` points uniformly spread between `a` and `b`, bounds included.
fn linspace(a: f64, b: f64, n: usize) -> impl Iterator<Item = f64> {
    let last = n.saturating_sub(1);
    let flast = last as f64;
    (0 .. n).map(move |k| {
        if k == 0 { a }
        else if k == last { b }
        else {
            let alpha = (last - k) as f64;
            let beta = k as f64;
            (alpha * a + beta * b) / flast
        }
    })
}

/// Build the legend of the column `values` colored with `mapping` and
/// `scale`.
///
/// Samples are colored exactly as a column row of the same value would
/// be; in particular the norm of `mapping` is the one of the column,
/// not of the samples.  The `i`-th sample is placed at
/// `x_origin + i / 4`.
pub fn build_legend(values: &[f64], mapping: &ColorMapping,
                    scale: &ColorScale, x_origin: f64)
                    -> Result<Vec<LegendSample>> {
    let (lo, hi) = legend_range(values)?;
    let legend = linspace(lo, hi, LEGEND_SAMPLES).enumerate()
        .map(|(i, value)| LegendSample {
            value,
            color: mapping.color(scale, value),
            x: i as f64 * SAMPLE_WIDTH + x_origin,
        })
        .collect();
    Ok(legend)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_and_color, Sign};

    fn legend_of(values: &[f64], boost: f64) -> Vec<LegendSample> {
        let m = ColorMapping::of_values(values, boost).unwrap();
        build_legend(values, &m, &ColorScale::default(), 76.).unwrap()
    }

    #[test]
    fn hundred_samples() {
        let l = legend_of(&[10., 20., 30.], 2.);
        assert_eq!(l.len(), LEGEND_SAMPLES);
        assert_eq!(l[0].value, 10.);
        assert_eq!(l[99].value, 30.);
        assert_eq!(l[0].x, 76.);
        assert_eq!(l[4].x, 77.);
        assert_eq!(l[99].x, 76. + 99. / 4.);
    }

    #[test]
    fn samples_increase() {
        let l = legend_of(&[-4.2, 17.9, 3.], 2.);
        assert_eq!(l[0].value, -4.);
        assert_eq!(l[99].value, 18.);
        assert!(l.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn collapsed_range_is_widened() {
        let (lo, hi) = legend_range(&[0.21, 0.3, 0.42]).unwrap();
        assert_eq!(lo, 0.);
        assert!(hi > lo);
        assert!((hi - 0.21).abs() < 1e-12);
        let (lo, hi) = legend_range(&[5., 5.]).unwrap();
        assert_eq!((lo, hi), (4.5, 5.5));
        let l = legend_of(&[0.21, 0.3, 0.42], 2.);
        assert_eq!(l.len(), LEGEND_SAMPLES);
        assert!(l[99].value > l[0].value);
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(legend_range(&[2.5, 7.5]).unwrap(), (2., 8.));
    }

    #[test]
    fn colors_agree_with_rows() {
        let col = [("a", 10.), ("b", 20.), ("c", 30.)];
        let n = normalize_and_color(&col, &ColorScale::default(), 2., 0.)
            .unwrap();
        assert_eq!(n.legend.first().unwrap().color, n.rows[0].color);
        assert_eq!(n.legend.last().unwrap().color, n.rows[2].color);
    }

    #[test]
    fn negative_colors_agree_with_rows() {
        let col = [("a", -30.), ("b", -12.)];
        let s = ColorScale::from_name("Reds").unwrap();
        let n = normalize_and_color(&col, &s, 2., 0.).unwrap();
        assert_eq!(n.mapping.sign, Sign::Negative);
        assert_eq!(n.legend[0].value, -30.);
        assert_eq!(n.legend[0].color, n.rows[0].color);
        assert_eq!(n.legend[99].color, n.rows[1].color);
    }

    #[test]
    fn empty_column() {
        assert!(matches!(legend_range(&[]), Err(VizError::EmptyColumn)));
    }
}
