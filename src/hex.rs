//! Conversion between `#RRGGBB` strings and RGB values.

use rgb::{RGBA, RGB8};
use crate::error::{Error, Result};

/// Parse a color of the form `#RRGGBB` (case insensitive).
pub fn parse(s: &str) -> Result<RGB8> {
    let invalid = || Error::InvalidHex(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid())
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i .. i + 2], 16).map_err(|_| invalid()) };
    Ok(RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}

/// Says whether `s` is a valid `#RRGGBB` color.
pub fn is_valid(s: &str) -> bool { parse(s).is_ok() }

/// Format the color as `#RRGGBB` (upper case).
pub fn format(c: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

/// Parse a color known to be valid (all the tables of this crate).
/// Invalid strings give black; the tables are checked by the tests.
pub(crate) fn rgba(s: &str) -> RGBA<f64> {
    parse(s).map_or(RGBA { r: 0., g: 0., b: 0., a: 255. },
                    |c| RGBA { r: c.r as f64, g: c.g as f64,
                               b: c.b as f64, a: 255. })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(parse("#4477AA").unwrap(), RGB8::new(0x44, 0x77, 0xAA));
        assert_eq!(parse("#ee6677").unwrap(), RGB8::new(0xEE, 0x66, 0x77));
        assert!(matches!(parse("4477AA"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse("#4477A"), Err(Error::InvalidHex(_))));
        assert!(matches!(parse("#4477AG"), Err(Error::InvalidHex(_))));
        assert!(!is_valid("#12345é"));
        assert!(!is_valid("#1é345"));
        assert!(!is_valid("#+F+F+F"));
        assert!(!is_valid("##4477AA"));
    }

    #[test]
    fn format_hex() {
        assert_eq!(format(RGB8::new(0x22, 0x88, 0x33)), "#228833");
        assert_eq!(format(parse("#aa3377").unwrap()), "#AA3377");
    }
}
