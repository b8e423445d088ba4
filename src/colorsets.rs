//! Qualitative color sets.
//!
//! Each set is a record type with one field per color (e.g. [`Bright`])
//! and a constant holding the colors (e.g. [`BRIGHT`]):
//!
//! ```
//! use tol_colors::BRIGHT;
//! assert_eq!(BRIGHT.blue, "#4477AA");
//! ```
//!
//! The uniform, ordered view of a set is a [`Colorset`], obtained by
//! name with [`colorset`].

use crate::{RGBColor, hex, error::{Error, Result}};

macro_rules! colorsets {
    ($( $(#[$doc: meta])*
        $name: literal => $ty: ident, $cst: ident {
            $($field: ident : $hex: literal),* $(,)?
        } )*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub struct $ty { $(pub $field: &'static str,)* }

            impl $ty {
                /// Name under which the set is found by [`colorset`].
                pub const NAME: &'static str = $name;

                /// The colors of the set, in order.
                pub fn colors(&self) -> Vec<&'static str> {
                    vec![$(self.$field),*]
                }

                /// Ordered view of the set.
                pub const fn colorset() -> Colorset {
                    Colorset {
                        name: $name,
                        entries: &[$((stringify!($field), $hex)),*],
                    }
                }
            }

            $(#[$doc])*
            pub const $cst: $ty = $ty { $($field: $hex,)* };
        )*

        const ALL: &[Colorset] = &[$($ty::colorset()),*];
    }
}

colorsets! {
    /// Main scheme for lines and their labels.
    "bright" => Bright, BRIGHT {
        blue: "#4477AA",
        red: "#EE6677",
        green: "#228833",
        yellow: "#CCBB44",
        cyan: "#66CCEE",
        purple: "#AA3377",
        grey: "#BBBBBB",
    }

    /// Optimized for contrast.  Works for people with monochrome
    /// vision and in a monochrome printout.
    "high_contrast" => HighContrast, HIGH_CONTRAST {
        blue: "#004488",
        yellow: "#DDAA33",
        red: "#BB5566",
        black: "#000000",
        white: "#FFFFFF",
    }

    /// Designed for TensorBoard, with its signature orange replaced
    /// by a print friendly one.
    "vibrant" => Vibrant, VIBRANT {
        orange: "#EE7733",
        blue: "#0077BB",
        cyan: "#33BBEE",
        magenta: "#EE3377",
        red: "#CC3311",
        teal: "#009988",
        grey: "#BBBBBB",
    }

    /// More colors than [`BRIGHT`] but no clear red or medium
    /// blue.  Pale grey is meant for bad data in maps.
    "muted" => Muted, MUTED {
        rose: "#CC6677",
        indigo: "#332288",
        sand: "#DDCC77",
        green: "#117733",
        cyan: "#88CCEE",
        wine: "#882255",
        teal: "#44AA99",
        olive: "#999933",
        purple: "#AA4499",
        pale_grey: "#DDDDDD",
    }

    /// Color pairs, optimized for contrast in a monochrome printout.
    "medium_contrast" => MediumContrast, MEDIUM_CONTRAST {
        light_blue: "#6699CC",
        dark_blue: "#004488",
        light_yellow: "#EECC66",
        dark_yellow: "#997700",
        light_red: "#EE99AA",
        dark_red: "#994455",
        black: "#000000",
        white: "#FFFFFF",
    }

    /// Backgrounds for black text, e.g. to highlight table cells.
    "pale" => Pale, PALE {
        pale_blue: "#BBCCEE",
        pale_red: "#FFCCCC",
        pale_green: "#CCDDAA",
        pale_yellow: "#EEEEBB",
        pale_cyan: "#CCEEFF",
        pale_grey: "#DDDDDD",
    }

    /// Text colors on a white background.
    "dark" => Dark, DARK {
        dark_blue: "#222255",
        dark_red: "#663333",
        dark_green: "#225522",
        dark_yellow: "#666633",
        dark_cyan: "#225555",
        dark_grey: "#555555",
    }

    /// Fill for labelled cells, lighter than [`BRIGHT`] and
    /// more distinct than [`PALE`], keeping black labels
    /// readable.
    "light" => Light, LIGHT {
        light_blue: "#77AADD",
        orange: "#EE8866",
        light_yellow: "#EEDD88",
        pink: "#FFAABB",
        light_cyan: "#99DDFF",
        mint: "#44BB99",
        pear: "#BBCC33",
        olive: "#AAAA00",
        pale_grey: "#DDDDDD",
    }

    /// Land cover classes of a map.
    "land_cover" => LandCover, LAND_COVER {
        water: "#5566AA",
        evergreen_needleleaf_forest: "#117733",
        deciduous_needleleaf_forest: "#44AA66",
        mixed_forest: "#55AA22",
        evergreen_broadleaf_forest: "#668822",
        deciduous_broadleaf_forest: "#99BB55",
        woodland: "#558877",
        wooded_grassland: "#88BBAA",
        grassland: "#AADDCC",
        cropland: "#44AA88",
        closed_shrubland: "#DDCC66",
        open_shrubland: "#FFDD44",
        bare_ground: "#FFEE88",
        urban_and_built: "#BB0011",
    }
}

/// Ordered view of a color set: a list of `(name, "#RRGGBB")`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Colorset {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Colorset {
    /// Name of the set, with underscores (e.g. `"high_contrast"`).
    pub fn name(&self) -> &'static str { self.name }

    /// Number of colors in the set.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Always `false`: sets have at least one color.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns the hex color named `field`, if the set has one.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries.iter().find(|(n, _)| *n == field).map(|&(_, c)| c)
    }

    /// Iterate over `(name, "#RRGGBB")` in order.
    pub fn iter(&self)
                -> impl ExactSizeIterator<Item = (&'static str, &'static str)>
    {
        self.entries.iter().copied()
    }

    /// The color names, in order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.entries.iter().map(|&(n, _)| n)
    }

    /// The colors as `#RRGGBB` strings, in order.
    pub fn hex(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.entries.iter().map(|&(_, c)| c)
    }

    /// The colors of the set.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// let c: Vec<RGB8> = tol_colors::HighContrast::colorset().colors();
    /// assert_eq!(c[0], RGB8::new(0x00, 0x44, 0x88));
    /// ```
    pub fn colors<Color: RGBColor>(&self) -> Vec<Color> {
        self.hex().map(|c| Color::from_rgba(hex::rgba(c))).collect()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

/// Return the color set `name`.  Hyphens are accepted in place of
/// underscores and case is ignored, so `"high-contrast"` works.
///
/// # Example
///
/// ```
/// use tol_colors::colorset;
/// let cset = colorset("bright").unwrap();
/// assert_eq!(cset.get("red"), Some("#EE6677"));
/// assert_eq!(colorset("high-contrast").unwrap(),
///            colorset("high_contrast").unwrap());
/// ```
pub fn colorset(name: &str) -> Result<Colorset> {
    let key = normalize(name);
    ALL.iter().find(|c| c.name == key).copied()
        .ok_or_else(|| Error::UnknownColorset {
            name: name.to_string(),
            known: colorset_names() })
}

/// Names of all the color sets.
pub fn colorset_names() -> Vec<&'static str> {
    ALL.iter().map(|c| c.name).collect()
}

/// Iterate over all the color sets.
pub fn colorsets() -> impl ExactSizeIterator<Item = Colorset> {
    ALL.iter().copied()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    #[test]
    fn all_sets_are_valid() {
        assert_eq!(colorsets().len(), 9);
        for cset in colorsets() {
            assert!(!cset.is_empty());
            for (field, c) in cset.iter() {
                assert!(hex::is_valid(c), "{}.{field} = {c}", cset.name());
            }
            let again = colorset(cset.name()).unwrap();
            assert_eq!(cset, again);
            assert_eq!(cset.colors::<RGB8>(), again.colors::<RGB8>());
        }
    }

    #[test]
    fn hyphens_and_case() {
        for name in ["high_contrast", "medium_contrast", "land_cover"] {
            let hyphen = name.replace('_', "-");
            assert_eq!(colorset(name).unwrap(), colorset(&hyphen).unwrap());
        }
        assert_eq!(colorset("Bright").unwrap().name(), "bright");
    }

    #[test]
    fn unknown_set() {
        match colorset("brigth") {
            Err(Error::UnknownColorset { name, known }) => {
                assert_eq!(name, "brigth");
                assert_eq!(known, colorset_names());
            }
            r => panic!("expected UnknownColorset, got {r:?}"),
        }
        let msg = colorset("nope").unwrap_err().to_string();
        assert!(msg.contains("land_cover"), "{msg}");
    }

    #[test]
    fn typed_records_match_views() {
        assert_eq!(BRIGHT.blue, "#4477AA");
        assert_eq!(VIBRANT.magenta, "#EE3377");
        assert_eq!(MUTED.sand, "#DDCC77");
        assert_eq!(HIGH_CONTRAST.yellow, "#DDAA33");
        assert_eq!(MEDIUM_CONTRAST.light_red, "#EE99AA");
        assert_eq!(PALE.pale_red, "#FFCCCC");
        assert_eq!(LIGHT.pink, "#FFAABB");
        assert_eq!(DARK.dark_green, "#225522");
        assert_eq!(LAND_COVER.mixed_forest, "#55AA22");

        let cset = colorset(Bright::NAME).unwrap();
        assert_eq!(cset.hex().collect::<Vec<_>>(), BRIGHT.colors());
        assert_eq!(cset.get("purple"), Some(BRIGHT.purple));
        assert_eq!(cset.get("black"), None);
        assert_eq!(LandCover::colorset().len(), LAND_COVER.colors().len());
        assert_eq!(colorset("muted").unwrap().fields().last(),
                   Some("pale_grey"));
    }
}
