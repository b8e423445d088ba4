//! Color schemes by Paul Tol, designed to be distinct for all people,
//! including color-blind readers.  See
//! <https://personal.sron.nl/~pault/> for background and usage.
//!
//! - Qualitative [`colorsets`]: [`BRIGHT`], [`HIGH_CONTRAST`],
//!   [`VIBRANT`], [`MUTED`], [`MEDIUM_CONTRAST`], [`PALE`], [`DARK`],
//!   [`LIGHT`] and [`LAND_COVER`], also found by name with
//!   [`colorset`].
//! - [`colormaps`] for ordered data, diverging (sunset, nightfall,
//!   BuRd, PRGn), sequential (YlOrBr, WhOrBr, iridescent,
//!   incandescent) and rainbows, found by name with [`colormap`].
//!   [`rainbow_discrete`] gives a rainbow with 1 to 23 colors.
//!
//! Colormaps are [`ColorRange`]s: they map \[0, 1\] to any color type
//! implementing [`RGBColor`].
//!
//! ```
//! use rgb::RGB8;
//! use tol_colors::{colormap, ColorRange};
//! let sunset = colormap("sunset_discrete")?;
//! let c: RGB8 = sunset.rgb(0.);
//! assert_eq!(c, RGB8::new(0x36, 0x4B, 0x9A));
//! # Ok::<(), tol_colors::Error>(())
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
pub mod hex;
pub mod colorsets;
pub mod colormaps;
pub mod registry;
pub mod config;

pub use error::{Error, Result};
pub use colorsets::{
    colorset, colorset_names, Colorset,
    Bright, HighContrast, Vibrant, Muted, MediumContrast, Pale, Dark, Light,
    LandCover,
    BRIGHT, HIGH_CONTRAST, VIBRANT, MUTED, MEDIUM_CONTRAST, PALE, DARK, LIGHT,
    LAND_COVER};
pub use colormaps::{
    colormap, colormap_names, rainbow_discrete, Colormap, Kind, Scheme};
pub use registry::{register_colormaps, registered, registered_names};
pub use config::{config_line, default_config_path, set_default_colors};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use tol_colors::{colormap, ColorRange};
    /// let cmap = colormap("YlOrBr")?;
    /// for (x, c) in ColorRange::<RGB8>::range(cmap, -1., 1., 5) {
    ///     println!("{x:5.2} ↦ {c:?}");
    /// }
    /// # Ok::<(), tol_colors::Error>(())
    /// ```
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }

    /// Number of items not yet consumed.
    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { self.remaining() }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    /// Integer encodings round to the nearest value.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Create a color from a string `#RRGGBB`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use tol_colors::{RGBColor, BRIGHT};
    /// let blue = RGB8::from_hex(BRIGHT.blue)?;
    /// assert_eq!(blue, RGB8::new(0x44, 0x77, 0xAA));
    /// # Ok::<(), tol_colors::Error>(())
    /// ```
    fn from_hex(s: &str) -> Result<Self> {
        hex::parse(s).map(|c| Self::from_rgba(c.to_rgba()))
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

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
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
              b: c.b.round() as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: c.r.round() as u16,  g: c.g.round() as u16,
              b: c.b.round() as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
              b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: c.r.round() as u16,  g: c.g.round() as u16,
              b: c.b.round() as u16, a: c.a.round() as u16 }
    }
}
