use rgb::RGBA;
use crate::{ColorRange, RGBColor, hex, error::{Error, Result}};

/// How the colors between anchors are obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Linear RGB interpolation between consecutive anchors.
    Continuous,
    /// Each anchor occupies an equal-width flat band, without any
    /// blending at the band edges.
    Discrete,
}

/// Type of the colormaps of the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Diverging colormap: equal emphasis on mid-range values and on
    /// both extremes, with a light color in the middle.
    Div,
    /// Sequential colormap for data ordered from low to high.
    Seq,
    /// Rainbow colormap, for data ordered from low to high with more
    /// colors than a sequential map.
    Rainbow,
}

/// Breakpoint of a piecewise-linear map: the color reached when
/// coming from the left of `x` and the one leaving on its right.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    x: f64,
    left: RGBA<f64>,
    right: RGBA<f64>,
}

/// Breakpoints interpolating the anchors, anchor `i` being at
/// `i / (n - 1)`.
fn continuous_segments(anchors: &[RGBA<f64>]) -> Vec<Segment> {
    let n = anchors.len();
    if n == 1 {
        let c = anchors[0];
        return vec![Segment { x: 0., left: c, right: c },
                    Segment { x: 1., left: c, right: c }]
    }
    let last = (n - 1) as f64;
    anchors.iter().enumerate()
        .map(|(i, &c)| Segment { x: i as f64 / last, left: c, right: c })
        .collect()
}

/// Breakpoints giving each anchor the band `[i/n, (i+1)/n)`.  The
/// first and last anchors are duplicated so that the breakpoint at
/// `i/n` jumps from the color of band `i-1` to the one of band `i`.
fn discrete_segments(anchors: &[RGBA<f64>]) -> Vec<Segment> {
    let n = anchors.len();
    let mut c = Vec::with_capacity(n + 2);
    c.push(anchors[0]);
    c.extend_from_slice(anchors);
    c.push(anchors[n - 1]);
    c.windows(2).enumerate()
        .map(|(i, w)| Segment { x: i as f64 / n as f64,
                                left: w[0], right: w[1] })
        .collect()
}

fn lerp(c0: RGBA<f64>, c1: RGBA<f64>, t: f64) -> RGBA<f64> {
    RGBA { r: c0.r + t * (c1.r - c0.r),
           g: c0.g + t * (c1.g - c0.g),
           b: c0.b + t * (c1.b - c0.b),
           a: c0.a + t * (c1.a - c0.a) }
}

/// A colormap: a function from \[0, 1\] to colors, defined by a list
/// of anchor colors, together with the color to use for bad
/// (e.g. NaN) values.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    name: String,
    anchors: Vec<RGBA<f64>>, // Invariant: non-empty
    bad: RGBA<f64>,
    kind: Kind,
    scheme: Option<Scheme>,
    segments: Vec<Segment>, // Invariant: length ≥ 2, x₀ = 0, xₗₐₛₜ = 1
}

impl Colormap {
    /// Create a colormap from the `anchors` colors and the color
    /// `bad` for invalid data.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use tol_colors::{Colormap, ColorRange, Kind};
    /// let black = RGB8::new(0, 0, 0);
    /// let white = RGB8::new(255, 255, 255);
    /// let cmap = Colormap::new("grey", Kind::Continuous,
    ///                          &[black, white], RGB8::new(255, 0, 0))?;
    /// let c: RGB8 = cmap.rgb(0.5);
    /// assert_eq!(c, RGB8::new(128, 128, 128));
    /// # Ok::<(), tol_colors::Error>(())
    /// ```
    pub fn new<Color: RGBColor>(
        name: impl Into<String>, kind: Kind, anchors: &[Color], bad: Color,
    ) -> Result<Self> {
        let anchors: Vec<_> = anchors.iter().map(|c| c.to_rgba()).collect();
        Self::of_rgba(name.into(), kind, anchors, bad.to_rgba())
    }

    /// Same as [`Colormap::new`] with colors given as `#RRGGBB`.
    pub fn from_hex(name: impl Into<String>, kind: Kind,
                    anchors: &[&str], bad: &str) -> Result<Self> {
        let to_rgba = |s: &str| hex::parse(s).map(|c| c.to_rgba());
        let anchors = anchors.iter().map(|s| to_rgba(s))
            .collect::<Result<Vec<_>>>()?;
        Self::of_rgba(name.into(), kind, anchors, to_rgba(bad)?)
    }

    /// Continuous colormap interpolating linearly between `anchors`.
    pub fn continuous(name: impl Into<String>,
                      anchors: &[&str], bad: &str) -> Result<Self> {
        Self::from_hex(name, Kind::Continuous, anchors, bad)
    }

    /// Discrete colormap with one flat band per color of `anchors`.
    pub fn discrete(name: impl Into<String>,
                    anchors: &[&str], bad: &str) -> Result<Self> {
        Self::from_hex(name, Kind::Discrete, anchors, bad)
    }

    fn of_rgba(name: String, kind: Kind, anchors: Vec<RGBA<f64>>,
               bad: RGBA<f64>) -> Result<Self> {
        if anchors.is_empty() {
            return Err(Error::NoAnchors(name))
        }
        Ok(Self::build(name, kind, anchors, bad))
    }

    /// Colormap from the tables of this crate, whose colors are known
    /// to be valid and anchors non-empty.
    pub(crate) fn from_table(name: &str, kind: Kind, anchors: &[&str],
                             bad: &str) -> Self {
        let anchors = anchors.iter().map(|s| hex::rgba(s)).collect();
        Self::build(name.to_string(), kind, anchors, hex::rgba(bad))
    }

    fn build(name: String, kind: Kind, anchors: Vec<RGBA<f64>>,
             bad: RGBA<f64>) -> Self {
        let segments = match kind {
            Kind::Continuous => continuous_segments(&anchors),
            Kind::Discrete => discrete_segments(&anchors),
        };
        Colormap { name, anchors, bad, kind, scheme: None, segments }
    }

    pub(crate) fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Name of the colormap.
    pub fn name(&self) -> &str { &self.name }

    /// Whether the colormap is continuous or discrete.
    pub fn kind(&self) -> Kind { self.kind }

    /// Type of the colormap, if it comes from the catalogue.
    pub fn scheme(&self) -> Option<Scheme> { self.scheme }

    /// Number of anchor colors.  For a discrete colormap, this is
    /// the number of bands.
    pub fn len(&self) -> usize { self.anchors.len() }

    /// Always `false`: colormaps have at least one anchor.
    pub fn is_empty(&self) -> bool { self.anchors.is_empty() }

    /// Returns the anchor colors.
    pub fn colors<Color: RGBColor>(&self) -> Vec<Color> {
        self.anchors.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns the color for bad values.
    pub fn bad<Color: RGBColor>(&self) -> Color { Color::from_rgba(self.bad) }

    /// Says whether the name carries the `_r` suffix of reversed maps.
    pub fn is_reversed(&self) -> bool { self.name.ends_with("_r") }

    /// Return the colormap with its anchors (thus its bands) in
    /// reverse order and the same bad color.  The `_r` suffix of the
    /// name is added, or removed if present, so reversing twice gives
    /// back the original colormap.
    pub fn reversed(&self) -> Self {
        let name = match self.name.strip_suffix("_r") {
            Some(n) => n.to_string(),
            None => format!("{}_r", self.name),
        };
        let anchors = self.anchors.iter().rev().copied().collect();
        Self { scheme: self.scheme,
               ..Self::build(name, self.kind, anchors, self.bad) }
    }

    /// Returns `n` colors evenly spaced on \[0, 1\] (both ends
    /// included).
    pub fn sample<Color: RGBColor>(&self, n: usize) -> Vec<Color> {
        ColorRange::<Color>::range(self, 0., 1., n).map(|(_, c)| c).collect()
    }

    fn rgba(&self, t: f64) -> RGBA<f64> {
        if t.is_nan() { return self.bad }
        let t = t.clamp(0., 1.);
        let s = &self.segments;
        // Index of the last breakpoint ≤ t, but not the final one.
        let k = s.partition_point(|p| p.x <= t).clamp(1, s.len() - 1) - 1;
        let (p0, p1) = (&s[k], &s[k + 1]);
        lerp(p0.right, p1.left, ((t - p0.x) / (p1.x - p0.x)).clamp(0., 1.))
    }
}

impl<Color: RGBColor> ColorRange<Color> for Colormap {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values
    /// outside the interval are clamped and NaN gives the bad color.
    fn rgb(&self, t: f64) -> Color { Color::from_rgba(self.rgba(t)) }
}

impl<Color: RGBColor> ColorRange<Color> for &Colormap {
    fn rgb(&self, t: f64) -> Color { Color::from_rgba(self.rgba(t)) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    const ANCHORS: [&str; 3] = ["#000000", "#808080", "#FFFFFF"];

    #[test]
    fn continuous_interpolates() {
        let cmap = Colormap::continuous("grey", &ANCHORS, "#FF0000").unwrap();
        let c: RGB8 = cmap.rgb(0.);
        assert_eq!(c, RGB8::new(0, 0, 0));
        let c: RGB8 = cmap.rgb(0.25);
        assert_eq!(c, RGB8::new(64, 64, 64));
        let c: RGB8 = cmap.rgb(0.5);
        assert_eq!(c, RGB8::new(128, 128, 128));
        let c: RGB8 = cmap.rgb(1.);
        assert_eq!(c, RGB8::new(255, 255, 255));
        let c: RGB8 = cmap.rgb(2.);
        assert_eq!(c, RGB8::new(255, 255, 255));
        let c: RGB8 = cmap.rgb(f64::NAN);
        assert_eq!(c, RGB8::new(255, 0, 0));
    }

    #[test]
    fn discrete_has_flat_bands() {
        let cmap = Colormap::discrete("grey", &ANCHORS, "#FF0000").unwrap();
        assert_eq!(cmap.len(), 3);
        let expect = [(0., 0), (0.1, 0), (0.33, 0), (0.34, 128), (0.5, 128),
                      (0.66, 128), (0.67, 255), (0.9, 255), (1., 255)];
        for (t, v) in expect {
            let c: RGB8 = cmap.rgb(t);
            assert_eq!(c, RGB8::new(v, v, v), "t = {t}");
        }
        let c: RGB8 = cmap.rgb(-1.);
        assert_eq!(c, RGB8::new(0, 0, 0));
    }

    #[test]
    fn discrete_breakpoints() {
        let cmap = Colormap::discrete("grey", &ANCHORS, "#FF0000").unwrap();
        let x: Vec<f64> = cmap.segments.iter().map(|s| s.x).collect();
        assert_eq!(x, [0., 1. / 3., 2. / 3., 1.]);
        assert_eq!(cmap.segments[0].left, cmap.anchors[0]);
        assert_eq!(cmap.segments[3].right, cmap.anchors[2]);
    }

    #[test]
    fn single_anchor() {
        for kind in [Kind::Continuous, Kind::Discrete] {
            let c = RGB8::new(10, 20, 30);
            let cmap = Colormap::new("one", kind, &[c], c).unwrap();
            for t in [0., 0.5, 1.] {
                let x: RGB8 = cmap.rgb(t);
                assert_eq!(x, c);
            }
        }
    }

    #[test]
    fn no_anchor() {
        let r = Colormap::continuous("none", &[], "#FFFFFF");
        assert!(matches!(r, Err(Error::NoAnchors(n)) if n == "none"));
        let r = Colormap::discrete("bad", &["#12345"], "#FFFFFF");
        assert!(matches!(r, Err(Error::InvalidHex(_))));
    }

    #[test]
    fn reverse() {
        for kind in [Kind::Continuous, Kind::Discrete] {
            let cmap = Colormap::from_hex("grey", kind, &ANCHORS, "#FF0000")
                .unwrap();
            let r = cmap.reversed();
            assert_eq!(r.name(), "grey_r");
            assert!(r.is_reversed());
            assert_eq!(r.bad::<RGB8>(), cmap.bad::<RGB8>());
            let mut colors: Vec<RGB8> = cmap.colors();
            colors.reverse();
            assert_eq!(r.colors::<RGB8>(), colors);
            for t in [0., 0.2, 0.5, 0.8, 1.] {
                let a: RGB8 = cmap.rgb(t);
                let b: RGB8 = r.rgb(1. - t);
                // Band edges of the discrete map are half-open.
                if kind == Kind::Continuous || t == 0.2 || t == 0.8 {
                    assert_eq!(a, b, "t = {t}");
                }
            }
            assert_eq!(r.reversed(), cmap);
        }
    }

    #[test]
    fn sample() {
        let cmap = Colormap::continuous("grey", &ANCHORS, "#FF0000").unwrap();
        let s: Vec<RGB8> = cmap.sample(3);
        assert_eq!(s, cmap.colors::<RGB8>());
        assert!(cmap.sample::<RGB8>(0).is_empty());
    }
}
