pub(crate) use rgb::RGBA;

/// Control colors of a continuous color scale.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
}

/// Type of palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential scheme: light colors for low values, dark colors
    /// for high values.  Used for choropleths of quantities such as
    /// population or coal share.
    Seq,
    /// Diverging scheme: light colors around the middle of the range,
    /// contrasting dark hues at both ends.  Suited to signed changes
    /// (e.g. a policy scenario relative to business as usual).
    Div,
}
