//! Colormaps for ordered data.
//!
//! The catalogue holds, for each colormap, the continuous variant,
//! the discrete one when it exists (`<name>_discrete`), and the
//! reversed variants (`<name>_r`, `<name>_discrete_r`).  The discrete
//! rainbow with 1 to 23 colors is given by [`rainbow_discrete`].

use lazy_static::lazy_static;
use log::debug;
use crate::error::{Error, Result};

mod ty;
pub use ty::{Colormap, Kind, Scheme};

/// A colormap of the catalogue.
struct Entry {
    name: &'static str,
    scheme: Scheme,
    anchors: &'static [&'static str],
    bad: &'static str,
    /// The discrete variant takes every `k`-th anchor, if any.
    discrete: Option<usize>,
}

const SUNSET: &[&str] = &[
    "#364B9A", "#4A7BB7", "#6EA6CD", "#98CAE1", "#C2E4EF", "#EAECCC",
    "#FEDA8B", "#FDB366", "#F67E4B", "#DD3D2D", "#A50026"];

const NIGHTFALL: &[&str] = &[
    "#125A56", "#00767B", "#238F9D", "#42A7C6", "#60BCE9", "#9DCCEF",
    "#C6DBED", "#DEE6E7", "#ECEADA", "#F0E6B2", "#F9D576", "#FFB954",
    "#FD9A44", "#F57634", "#E94C1F", "#D11807", "#A01813"];

const BURD: &[&str] = &[
    "#2166AC", "#4393C3", "#92C5DE", "#D1E5F0", "#F7F7F7", "#FDDBC7",
    "#F4A582", "#D6604D", "#B2182B"];

const PRGN: &[&str] = &[
    "#762A83", "#9970AB", "#C2A5CF", "#E7D4E8", "#F7F7F7", "#D9F0D3",
    "#ACD39E", "#5AAE61", "#1B7837"];

const YLORBR: &[&str] = &[
    "#FFFFE5", "#FFF7BC", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014",
    "#CC4C02", "#993404", "#662506"];

const WHORBR: &[&str] = &[
    "#FFFFFF", "#FFF7BC", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014",
    "#CC4C02", "#993404", "#662506"];

const IRIDESCENT: &[&str] = &[
    "#FEFBE9", "#FCF7D5", "#F5F3C1", "#EAF0B5", "#DDECBF", "#D0E7CA",
    "#C2E3D2", "#B5DDD8", "#A8D8DC", "#9BD2E1", "#8DCBE4", "#81C4E7",
    "#7BBCE7", "#7EB2E4", "#88A5DD", "#9398D2", "#9B8AC4", "#9D7DB2",
    "#9A709E", "#906388", "#805770", "#684957", "#46353A"];

const INCANDESCENT: &[&str] = &[
    "#CEFFFF", "#C6F7D6", "#A2F49B", "#BBE453", "#D5CE04", "#E7B503",
    "#F19903", "#F6790B", "#F94902", "#E40515", "#A80003"];

// The four smooth rainbows share their middle part, purple to red.
const RAINBOW_PURD: &[&str] = &[
    "#6F4C9B", "#6059A9", "#5568B8", "#4E79C5", "#4D8AC6", "#4E96BC",
    "#549EB3", "#59A5A9", "#60AB9E", "#69B190", "#77B77D", "#8CBC68",
    "#A6BE54", "#BEBC48", "#D1B541", "#DDAA3C", "#E49C39", "#E78C35",
    "#E67932", "#E4632D", "#DF4828", "#DA2222"];

const RAINBOW_PUBR: &[&str] = &[
    "#6F4C9B", "#6059A9", "#5568B8", "#4E79C5", "#4D8AC6", "#4E96BC",
    "#549EB3", "#59A5A9", "#60AB9E", "#69B190", "#77B77D", "#8CBC68",
    "#A6BE54", "#BEBC48", "#D1B541", "#DDAA3C", "#E49C39", "#E78C35",
    "#E67932", "#E4632D", "#DF4828", "#DA2222", "#B8221E", "#95211B",
    "#721E17", "#521A13"];

const RAINBOW_WHRD: &[&str] = &[
    "#E8ECFB", "#DDD8EF", "#D1C1E1", "#C3A8D1", "#B58FC2", "#A778B4",
    "#9B62A7", "#8C4E99", "#6F4C9B", "#6059A9", "#5568B8", "#4E79C5",
    "#4D8AC6", "#4E96BC", "#549EB3", "#59A5A9", "#60AB9E", "#69B190",
    "#77B77D", "#8CBC68", "#A6BE54", "#BEBC48", "#D1B541", "#DDAA3C",
    "#E49C39", "#E78C35", "#E67932", "#E4632D", "#DF4828", "#DA2222"];

const RAINBOW_WHBR: &[&str] = &[
    "#E8ECFB", "#DDD8EF", "#D1C1E1", "#C3A8D1", "#B58FC2", "#A778B4",
    "#9B62A7", "#8C4E99", "#6F4C9B", "#6059A9", "#5568B8", "#4E79C5",
    "#4D8AC6", "#4E96BC", "#549EB3", "#59A5A9", "#60AB9E", "#69B190",
    "#77B77D", "#8CBC68", "#A6BE54", "#BEBC48", "#D1B541", "#DDAA3C",
    "#E49C39", "#E78C35", "#E67932", "#E4632D", "#DF4828", "#DA2222",
    "#B8221E", "#95211B", "#721E17", "#521A13"];

const ENTRIES: &[Entry] = &[
    Entry { name: "sunset", scheme: Scheme::Div, anchors: SUNSET,
            bad: "#FFFFFF", discrete: Some(1) },
    Entry { name: "nightfall", scheme: Scheme::Div, anchors: NIGHTFALL,
            bad: "#FFFFFF", discrete: Some(2) },
    Entry { name: "BuRd", scheme: Scheme::Div, anchors: BURD,
            bad: "#FFEE99", discrete: Some(1) },
    Entry { name: "PRGn", scheme: Scheme::Div, anchors: PRGN,
            bad: "#FFEE99", discrete: Some(1) },
    Entry { name: "YlOrBr", scheme: Scheme::Seq, anchors: YLORBR,
            bad: "#888888", discrete: Some(1) },
    Entry { name: "WhOrBr", scheme: Scheme::Seq, anchors: WHORBR,
            bad: "#888888", discrete: Some(1) },
    Entry { name: "iridescent", scheme: Scheme::Seq, anchors: IRIDESCENT,
            bad: "#999999", discrete: None },
    Entry { name: "incandescent", scheme: Scheme::Seq, anchors: INCANDESCENT,
            bad: "#888888", discrete: None },
    Entry { name: "rainbow_PuRd", scheme: Scheme::Rainbow,
            anchors: RAINBOW_PURD, bad: "#FFFFFF", discrete: None },
    Entry { name: "rainbow_PuBr", scheme: Scheme::Rainbow,
            anchors: RAINBOW_PUBR, bad: "#FFFFFF", discrete: None },
    Entry { name: "rainbow_WhRd", scheme: Scheme::Rainbow,
            anchors: RAINBOW_WHRD, bad: "#666666", discrete: None },
    Entry { name: "rainbow_WhBr", scheme: Scheme::Rainbow,
            anchors: RAINBOW_WHBR, bad: "#666666", discrete: None },
    Entry { name: "rainbow", scheme: Scheme::Rainbow,
            anchors: RAINBOW_WHBR, bad: "#666666", discrete: None },
];

/// Base colors of the discrete rainbow.
const RAINBOW_BASE: [&str; 29] = [
    "#E8ECFB", "#D9CCE3", "#D1BBD7", "#CAACCB", "#BA8DB4", "#AE76A3",
    "#AA6F9E", "#994F88", "#882E72", "#1965B0", "#437DBF", "#5289C7",
    "#6195CF", "#7BAFDE", "#4EB265", "#90C987", "#CAE0AB", "#F7F056",
    "#F7CB45", "#F6C141", "#F4A736", "#F1932D", "#EE8026", "#E8601C",
    "#E65518", "#DC050C", "#A5170E", "#72190E", "#42150A"];

/// Indices in [`RAINBOW_BASE`] of the discrete rainbow with `n`
/// colors, at position `n - 1`.
const RAINBOW_INDICES: [&[usize]; 23] = [
    &[9],
    &[9, 25],
    &[9, 17, 25],
    &[9, 14, 17, 25],
    &[9, 13, 14, 17, 25],
    &[9, 13, 14, 16, 17, 25],
    &[8, 9, 13, 14, 16, 17, 25],
    &[8, 9, 13, 14, 16, 17, 22, 25],
    &[8, 9, 13, 14, 16, 17, 22, 25, 27],
    &[8, 9, 13, 14, 16, 17, 20, 23, 25, 27],
    &[8, 9, 11, 13, 14, 16, 17, 20, 23, 25, 27],
    &[2, 5, 8, 9, 11, 13, 14, 16, 17, 20, 23, 25],
    &[2, 5, 8, 9, 11, 13, 14, 15, 16, 17, 20, 23, 25],
    &[2, 5, 8, 9, 11, 13, 14, 15, 16, 17, 19, 21, 23, 25],
    &[2, 5, 8, 9, 11, 13, 14, 15, 16, 17, 19, 21, 23, 25, 27],
    &[2, 4, 6, 8, 9, 11, 13, 14, 15, 16, 17, 19, 21, 23, 25, 27],
    &[2, 4, 6, 7, 8, 9, 11, 13, 14, 15, 16, 17, 19, 21, 23, 25, 27],
    &[2, 4, 6, 7, 8, 9, 11, 13, 14, 15, 16, 17, 19, 21, 23, 25, 26, 27],
    &[1, 3, 4, 6, 7, 8, 9, 11, 13, 14, 15, 16, 17, 19, 21, 23, 25, 26, 27],
    &[1, 3, 4, 6, 7, 8, 9, 10, 12, 13, 14, 15, 16, 17, 19, 21, 23, 25, 26,
      27],
    &[1, 3, 4, 6, 7, 8, 9, 10, 12, 13, 14, 15, 16, 17, 18, 20, 22, 24, 25,
      26, 27],
    &[1, 3, 4, 6, 7, 8, 9, 10, 12, 13, 14, 15, 16, 17, 18, 20, 22, 24, 25,
      26, 27, 28],
    &[0, 1, 3, 4, 6, 7, 8, 9, 10, 12, 13, 14, 15, 16, 17, 18, 20, 22, 24,
      25, 26, 27, 28],
];

/// Largest number of colors of [`rainbow_discrete`].
pub const RAINBOW_DISCRETE_MAX: usize = RAINBOW_INDICES.len();

fn build_catalogue() -> Vec<Colormap> {
    let mut cmaps = Vec::with_capacity(4 * ENTRIES.len());
    for e in ENTRIES {
        cmaps.push(Colormap::from_table(e.name, Kind::Continuous,
                                        e.anchors, e.bad)
                   .with_scheme(e.scheme));
        if let Some(k) = e.discrete {
            let name = format!("{}_discrete", e.name);
            let anchors: Vec<_> = e.anchors.iter().step_by(k).copied()
                .collect();
            cmaps.push(Colormap::from_table(&name, Kind::Discrete,
                                            &anchors, e.bad)
                       .with_scheme(e.scheme));
        }
    }
    let reversed: Vec<_> = cmaps.iter().map(|c| c.reversed()).collect();
    cmaps.extend(reversed);
    debug!("{} colormaps in the catalogue", cmaps.len());
    cmaps
}

fn build_rainbow_discrete() -> Vec<Colormap> {
    RAINBOW_INDICES.iter().map(|idx| {
        let anchors: Vec<_> = idx.iter().map(|&i| RAINBOW_BASE[i]).collect();
        let bad = if idx.len() == RAINBOW_DISCRETE_MAX { "#777777" }
                  else { "#FFFFFF" };
        Colormap::from_table("rainbow_discrete", Kind::Discrete, &anchors, bad)
            .with_scheme(Scheme::Rainbow)
    }).collect()
}

lazy_static! {
    static ref CATALOGUE: Vec<Colormap> = build_catalogue();
    static ref RAINBOW_DISCRETE: Vec<Colormap> = build_rainbow_discrete();
}

/// Return the colormap `name` of the catalogue, e.g. `"sunset"`,
/// `"sunset_discrete"` or `"sunset_r"`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use tol_colors::{colormap, ColorRange};
/// let cmap = colormap("BuRd")?;
/// let c: RGB8 = cmap.rgb(0.5);
/// assert_eq!(c, RGB8::new(0xF7, 0xF7, 0xF7));
/// assert_eq!(cmap.bad::<RGB8>(), RGB8::new(0xFF, 0xEE, 0x99));
/// # Ok::<(), tol_colors::Error>(())
/// ```
pub fn colormap(name: &str) -> Result<&'static Colormap> {
    CATALOGUE.iter().find(|c| c.name() == name)
        .ok_or_else(|| Error::UnknownColormap {
            name: name.to_string(),
            known: colormap_names().iter().map(|n| n.to_string()).collect() })
}

/// Names of all the colormaps of the catalogue.
pub fn colormap_names() -> Vec<&'static str> {
    CATALOGUE.iter().map(|c| c.name()).collect()
}

/// Iterate over all the colormaps of the catalogue.
pub fn colormaps() -> impl ExactSizeIterator<Item = &'static Colormap> {
    CATALOGUE.iter()
}

/// Return the discrete rainbow with `n` colors, `n` ∈ \[1, 23\].
/// Its bad color is white except for 23 colors where it is grey.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// let cmap = tol_colors::rainbow_discrete(1)?;
/// assert_eq!(cmap.colors::<RGB8>(), [RGB8::new(0x19, 0x65, 0xB0)]);
/// assert!(tol_colors::rainbow_discrete(24).is_err());
/// # Ok::<(), tol_colors::Error>(())
/// ```
pub fn rainbow_discrete(n: usize) -> Result<&'static Colormap> {
    if n == 0 || n > RAINBOW_DISCRETE_MAX {
        return Err(Error::RainbowCount(n))
    }
    Ok(&RAINBOW_DISCRETE[n - 1])
}
