//! Named continuous color scales.

use std::fmt;
use rgb::RGB8;
use crate::{ColorRange, PaletteGradient, PaletteType, RGBColor};
use crate::error::{Result, VizError};

/// Name of the scale used when a visualization does not pick one.
pub const DEFAULT_SCALE: &str = "Blues";

/// A continuous color scale: a function from \[0, 1\] to colors,
/// built by interpolating the stops of a Brewer palette.
///
/// Inputs outside \[0, 1\] are clamped, so `scale.rgb(3.)` is the
/// darkest color of a sequential scale.  A name suffixed by `_r`
/// (e.g. `"Blues_r"`) denotes the reversed scale.
pub struct ColorScale {
    name: String,
    typ: PaletteType,
    reversed: bool,
    gradient: PaletteGradient<RGB8>,
}

impl ColorScale {
    /// Look a scale up by name (case insensitive).
    ///
    /// ```
    /// use crem_viz::ColorScale;
    /// let blues = ColorScale::from_name("Blues").unwrap();
    /// assert_eq!(blues.hex(0.), "#f7fbff");
    /// assert_eq!(blues.hex(1.), "#08306b");
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let palette = RGB8::palette(base)
            .ok_or_else(|| VizError::UnknownColorScale(name.to_string()))?;
        let name = if reversed { format!("{}_r", palette.name()) }
                   else { palette.name().to_string() };
        Ok(ColorScale { name, typ: palette.typ(), reversed,
                        gradient: palette.gradient() })
    }

    /// Canonical name of the scale, e.g. `"YlOrRd"` or `"Blues_r"`.
    pub fn name(&self) -> &str { &self.name }

    pub fn typ(&self) -> PaletteType { self.typ }

    /// CSS color of the position `t`.
    pub fn hex(&self, t: f64) -> String { self.rgb(t).to_hex() }
}

impl Default for ColorScale {
    fn default() -> Self {
        ColorScale { name: DEFAULT_SCALE.to_string(), typ: PaletteType::Seq,
                     reversed: false, gradient: RGB8::blues().gradient() }
    }
}

impl ColorRange<RGB8> for ColorScale {
    fn rgb(&self, t: f64) -> RGB8 {
        if self.reversed { self.gradient.rgb(1. - t) }
        else { self.gradient.rgb(t) }
    }
}

impl fmt::Debug for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScale").field("name", &self.name).finish()
    }
}
