// Brewer colormaps: see http://colorbrewer2.org/
// Largest class count of each scheme; interpolated by `PaletteGradient`.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref BLUES: PaletteData = PaletteData {
    name: "Blues",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 247.0, g: 251.0, b: 255.0, a: 255.},
      RGBA{r: 222.0, g: 235.0, b: 247.0, a: 255.},
      RGBA{r: 198.0, g: 219.0, b: 239.0, a: 255.},
      RGBA{r: 158.0, g: 202.0, b: 225.0, a: 255.},
      RGBA{r: 107.0, g: 174.0, b: 214.0, a: 255.},
      RGBA{r:  66.0, g: 146.0, b: 198.0, a: 255.},
      RGBA{r:  33.0, g: 113.0, b: 181.0, a: 255.},
      RGBA{r:   8.0, g:  81.0, b: 156.0, a: 255.},
      RGBA{r:   8.0, g:  48.0, b: 107.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref GREENS: PaletteData = PaletteData {
    name: "Greens",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 247.0, g: 252.0, b: 245.0, a: 255.},
      RGBA{r: 229.0, g: 245.0, b: 224.0, a: 255.},
      RGBA{r: 199.0, g: 233.0, b: 192.0, a: 255.},
      RGBA{r: 161.0, g: 217.0, b: 155.0, a: 255.},
      RGBA{r: 116.0, g: 196.0, b: 118.0, a: 255.},
      RGBA{r:  65.0, g: 171.0, b:  93.0, a: 255.},
      RGBA{r:  35.0, g: 139.0, b:  69.0, a: 255.},
      RGBA{r:   0.0, g: 109.0, b:  44.0, a: 255.},
      RGBA{r:   0.0, g:  68.0, b:  27.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref GREYS: PaletteData = PaletteData {
    name: "Greys",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.},
      RGBA{r: 240.0, g: 240.0, b: 240.0, a: 255.},
      RGBA{r: 217.0, g: 217.0, b: 217.0, a: 255.},
      RGBA{r: 189.0, g: 189.0, b: 189.0, a: 255.},
      RGBA{r: 150.0, g: 150.0, b: 150.0, a: 255.},
      RGBA{r: 115.0, g: 115.0, b: 115.0, a: 255.},
      RGBA{r:  82.0, g:  82.0, b:  82.0, a: 255.},
      RGBA{r:  37.0, g:  37.0, b:  37.0, a: 255.},
      RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref ORANGES: PaletteData = PaletteData {
    name: "Oranges",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 245.0, b: 235.0, a: 255.},
      RGBA{r: 254.0, g: 230.0, b: 206.0, a: 255.},
      RGBA{r: 253.0, g: 208.0, b: 162.0, a: 255.},
      RGBA{r: 253.0, g: 174.0, b: 107.0, a: 255.},
      RGBA{r: 253.0, g: 141.0, b:  60.0, a: 255.},
      RGBA{r: 241.0, g: 105.0, b:  19.0, a: 255.},
      RGBA{r: 217.0, g:  72.0, b:   1.0, a: 255.},
      RGBA{r: 166.0, g:  54.0, b:   3.0, a: 255.},
      RGBA{r: 127.0, g:  39.0, b:   4.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref PURPLES: PaletteData = PaletteData {
    name: "Purples",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 252.0, g: 251.0, b: 253.0, a: 255.},
      RGBA{r: 239.0, g: 237.0, b: 245.0, a: 255.},
      RGBA{r: 218.0, g: 218.0, b: 235.0, a: 255.},
      RGBA{r: 188.0, g: 189.0, b: 220.0, a: 255.},
      RGBA{r: 158.0, g: 154.0, b: 200.0, a: 255.},
      RGBA{r: 128.0, g: 125.0, b: 186.0, a: 255.},
      RGBA{r: 106.0, g:  81.0, b: 163.0, a: 255.},
      RGBA{r:  84.0, g:  39.0, b: 143.0, a: 255.},
      RGBA{r:  63.0, g:   0.0, b: 125.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref REDS: PaletteData = PaletteData {
    name: "Reds",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 245.0, b: 240.0, a: 255.},
      RGBA{r: 254.0, g: 224.0, b: 210.0, a: 255.},
      RGBA{r: 252.0, g: 187.0, b: 161.0, a: 255.},
      RGBA{r: 252.0, g: 146.0, b: 114.0, a: 255.},
      RGBA{r: 251.0, g: 106.0, b:  74.0, a: 255.},
      RGBA{r: 239.0, g:  59.0, b:  44.0, a: 255.},
      RGBA{r: 203.0, g:  24.0, b:  29.0, a: 255.},
      RGBA{r: 165.0, g:  15.0, b:  21.0, a: 255.},
      RGBA{r: 103.0, g:   0.0, b:  13.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref YLGNBU: PaletteData = PaletteData {
    name: "YlGnBu",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 255.0, b: 217.0, a: 255.},
      RGBA{r: 237.0, g: 248.0, b: 177.0, a: 255.},
      RGBA{r: 199.0, g: 233.0, b: 180.0, a: 255.},
      RGBA{r: 127.0, g: 205.0, b: 187.0, a: 255.},
      RGBA{r:  65.0, g: 182.0, b: 196.0, a: 255.},
      RGBA{r:  29.0, g: 145.0, b: 192.0, a: 255.},
      RGBA{r:  34.0, g:  94.0, b: 168.0, a: 255.},
      RGBA{r:  37.0, g:  52.0, b: 148.0, a: 255.},
      RGBA{r:   8.0, g:  29.0, b:  88.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref YLORRD: PaletteData = PaletteData {
    name: "YlOrRd",
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 255.0, b: 204.0, a: 255.},
      RGBA{r: 255.0, g: 237.0, b: 160.0, a: 255.},
      RGBA{r: 254.0, g: 217.0, b: 118.0, a: 255.},
      RGBA{r: 254.0, g: 178.0, b:  76.0, a: 255.},
      RGBA{r: 253.0, g: 141.0, b:  60.0, a: 255.},
      RGBA{r: 252.0, g:  78.0, b:  42.0, a: 255.},
      RGBA{r: 227.0, g:  26.0, b:  28.0, a: 255.},
      RGBA{r: 189.0, g:   0.0, b:  38.0, a: 255.},
      RGBA{r: 128.0, g:   0.0, b:  38.0, a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref RDBU: PaletteData = PaletteData {
    name: "RdBu",
    typ: PaletteType::Div,
    rgb: vec![
      RGBA{r: 103.0, g:   0.0, b:  31.0, a: 255.},
      RGBA{r: 178.0, g:  24.0, b:  43.0, a: 255.},
      RGBA{r: 214.0, g:  96.0, b:  77.0, a: 255.},
      RGBA{r: 244.0, g: 165.0, b: 130.0, a: 255.},
      RGBA{r: 253.0, g: 219.0, b: 199.0, a: 255.},
      RGBA{r: 247.0, g: 247.0, b: 247.0, a: 255.},
      RGBA{r: 209.0, g: 229.0, b: 240.0, a: 255.},
      RGBA{r: 146.0, g: 197.0, b: 222.0, a: 255.},
      RGBA{r:  67.0, g: 147.0, b: 195.0, a: 255.},
      RGBA{r:  33.0, g: 102.0, b: 172.0, a: 255.},
      RGBA{r:   5.0, g:  48.0, b:  97.0, a: 255.},
    ]};
}

lazy_static! {
  /// Palettes indexed by their lowercase name.
  pub(crate) static ref BY_NAME: BTreeMap<String, &'static PaletteData> = {
    let all: [&'static PaletteData; 9] = [
      &*BLUES,
      &*GREENS,
      &*GREYS,
      &*ORANGES,
      &*PURPLES,
      &*REDS,
      &*YLGNBU,
      &*YLORRD,
      &*RDBU];
    all.into_iter().map(|p| (p.name.to_ascii_lowercase(), p)).collect()
  };
}
