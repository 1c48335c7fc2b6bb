//! Color-mapped data for climate policy visualizations.
//!
//! The core of the crate turns a column of provincial measurements
//! into colors and a matching legend:
//!
//! - [`normalize::normalize_and_color`] scales a column by its
//!   Euclidean norm and a boost factor, then maps every value through
//!   a continuous [`ColorScale`];
//! - [`legend::build_legend`] samples the same mapping over the
//!   observed range to draw a legend strip.
//!
//! Around it, [`data`] loads the scenario CSV files, [`provincial`]
//! assembles choropleth tables, [`map`] joins them with province
//! geometry and [`chart`] describes the scenario line charts.  All
//! outputs are serializable data handed to the site templates.
//!
//! Colors come from [`Gradient`]s between the stops of Brewer
//! [`Palette`]s (see <https://colorbrewer2.org/>).

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8};

mod palettes;
use palettes::ty::PaletteData;
pub use palettes::ty::PaletteType;

pub mod chart;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod frame;
pub mod legend;
pub mod map;
pub mod normalize;
pub mod provincial;
pub mod scale;
pub mod source;

pub use config::Config;
pub use error::{Result, VizError};
pub use scale::ColorScale;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use crem_viz::{RGBColor, ColorRange};
    /// let white = RGB8::new(255, 255, 255);
    /// let blue = RGB8::new(8, 48, 107);
    /// let grad = white.gradient(&blue);
    /// assert_eq!(grad.rgb(1.).to_hex(), "#08306b");
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// CSS hexadecimal notation `#rrggbb` of the color (alpha is
    /// ignored).
    fn to_hex(&self) -> String {
        let RGBA{ r, g, b, .. } = Self::to_rgba(self);
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    }

    /// Brewer "Light to dark blue" sequential scheme.
    #[inline]
    fn blues() -> Palette<Self> { Palette::new(&palettes::BLUES) }

    /// Brewer "Light to dark green" sequential scheme.
    #[inline]
    fn greens() -> Palette<Self> { Palette::new(&palettes::GREENS) }

    /// Brewer "Light to dark gray" sequential scheme.
    #[inline]
    fn greys() -> Palette<Self> { Palette::new(&palettes::GREYS) }

    /// Brewer "Light to dark orange" sequential scheme.
    #[inline]
    fn oranges() -> Palette<Self> { Palette::new(&palettes::ORANGES) }

    /// Brewer "Light to dark purple" sequential scheme.
    #[inline]
    fn purples() -> Palette<Self> { Palette::new(&palettes::PURPLES) }

    /// Brewer "Light to dark red" sequential scheme.
    #[inline]
    fn reds() -> Palette<Self> { Palette::new(&palettes::REDS) }

    /// Brewer "Light yellow to green to dark blue" sequential scheme.
    #[inline]
    fn ylgnbu() -> Palette<Self> { Palette::new(&palettes::YLGNBU) }

    /// Brewer "Light yellow to orange to dark red" sequential scheme.
    #[inline]
    fn ylorrd() -> Palette<Self> { Palette::new(&palettes::YLORRD) }

    /// Brewer "Dark red to light to dark blue" diverging scheme.
    #[inline]
    fn rdbu() -> Palette<Self> { Palette::new(&palettes::RDBU) }

    /// Look a palette up by its (case insensitive) Brewer name,
    /// e.g. `"Blues"` or `"YlOrRd"`.
    fn palette(name: &str) -> Option<Palette<Self>> {
        palettes::BY_NAME.get(&name.to_ascii_lowercase())
            .map(|&p| Palette::new(p))
    }
}

/// Round and saturate a color component to a byte.
#[inline]
fn channel(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: channel(c.r),  g: channel(c.g),  b: channel(c.b) }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    /// `c` has components in \[0, 255\].
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let (r, g, b) = (c.r / 255., c.g / 255., c.b / 255.);
        let xr = 0.4522795 * r + 0.3993744 * g + 0.1483460 * b;
        let yr = 0.2225105 * r + 0.7168863 * g + 0.0606032 * b;
        let zr = 0.0168820 * r + 0.1176865 * g + 0.8654315 * b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r: 255. * r, g: 255. * g, b: 255. * b, a: self.a }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - first color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lhc.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}


/// A Brewer color scheme.
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }
}

impl<Color> Palette<Color>
where Color: RGBColor {
    /// Brewer name of the palette, e.g. `"Blues"`.
    pub fn name(&self) -> &'static str { self.palette.name }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Says whether the palette is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient going through all the colors of the palette,
    /// evenly spaced on \[0, 1\].
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.palette.rgb.windows(2)
                .map(|c| { let c0 = Color::from_rgba(c[0]);
                           let c1 = Color::from_rgba(c[1]);
                           c0.gradient(&c1) })
                .collect() }
    }
}

/// A gradient based on a [`Palette`].
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>, // Invariant: non-empty
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}
