//! Set the default color cycle of Matplotlib from a color set, by
//! editing the `axes.prop_cycle` line of a `matplotlibrc` file.

use std::{env, fs,
          io::{self, ErrorKind, Write},
          path::{Path, PathBuf}};
use log::info;
use crate::{colorsets::colorset, error::Result};

const KEY: &str = "axes.prop_cycle";

/// Return the line of `matplotlibrc` setting the default color cycle
/// to the colors of the set `name`.
///
/// # Example
///
/// ```
/// let line = tol_colors::config_line("high-contrast")?;
/// assert_eq!(line, "axes.prop_cycle : cycler('color', \
///                   ['004488', 'DDAA33', 'BB5566', '000000', 'FFFFFF'])");
/// # Ok::<(), tol_colors::Error>(())
/// ```
pub fn config_line(name: &str) -> Result<String> {
    let colors: Vec<String> = colorset(name)?.hex()
        .map(|c| format!("'{}'", c.trim_start_matches('#')))
        .collect();
    Ok(format!("{KEY} : cycler('color', [{}])", colors.join(", ")))
}

/// Says whether `line` sets (or is a commented out setting of) the
/// color cycle.
fn is_cycle_line(line: &str) -> bool {
    let line = line.trim_start().trim_start_matches('#').trim_start();
    match line.strip_prefix(KEY) {
        Some(rest) => rest.trim_start().starts_with(':'),
        None => false,
    }
}

/// Return `content` with the first color cycle line replaced by
/// `new_line`, or with `new_line` appended if there is none.
fn patch(content: &str, new_line: &str) -> String {
    let mut lines: Vec<&str> = content.lines().collect();
    match lines.iter().position(|l| is_cycle_line(l)) {
        Some(i) => lines[i] = new_line,
        None => lines.push(new_line),
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Set the default color cycle in the configuration file `path` to
/// the colors of the set `name`.  Other lines of the file are kept;
/// the file and its directory are created if they do not exist.
///
/// With `dry`, the new line is only printed and the file is not
/// touched.
pub fn set_default_colors(name: &str, path: impl AsRef<Path>,
                          dry: bool) -> Result<()> {
    set_default_colors_to(name, path.as_ref(), dry, &mut io::stdout())
}

/// Same as [`set_default_colors`] with the dry run output sent to `out`.
fn set_default_colors_to(name: &str, path: &Path, dry: bool,
                         out: &mut impl Write) -> Result<()> {
    let line = config_line(name)?;
    if dry {
        info!("dry run, {} left untouched", path.display());
        writeln!(out, "New config line: {line}")?;
        return Ok(())
    }
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, patch(&content, &line))?;
    info!("default colors set to “{name}” in {}", path.display());
    Ok(())
}

/// Location of the user `matplotlibrc`: `$MPLCONFIGDIR/matplotlibrc`,
/// else `$XDG_CONFIG_HOME/matplotlib/matplotlibrc`, else
/// `$HOME/.config/matplotlib/matplotlibrc`.  Returns `None` if none
/// of these variables is set.
pub fn default_config_path() -> Option<PathBuf> {
    let var = |v: &str| {
        env::var_os(v).filter(|s| !s.is_empty()).map(PathBuf::from) };
    let dir = var("MPLCONFIGDIR")
        .or_else(|| var("XDG_CONFIG_HOME").map(|d| d.join("matplotlib")))
        .or_else(|| var("HOME")
                 .map(|d| d.join(".config").join("matplotlib")))?;
    Some(dir.join("matplotlibrc"))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const BRIGHT_LINE: &str = "axes.prop_cycle : cycler('color', \
        ['4477AA', 'EE6677', '228833', 'CCBB44', '66CCEE', 'AA3377', \
        'BBBBBB'])";

    #[test]
    fn line() {
        assert_eq!(config_line("bright").unwrap(), BRIGHT_LINE);
        assert!(matches!(config_line("dim"),
                         Err(Error::UnknownColorset { .. })));
    }

    #[test]
    fn cycle_lines() {
        assert!(is_cycle_line("axes.prop_cycle : cycler('color', [])"));
        assert!(is_cycle_line("#axes.prop_cycle: cycler('color', [])"));
        assert!(is_cycle_line("  # axes.prop_cycle  : x"));
        assert!(!is_cycle_line("axes.prop_cycler : x"));
        assert!(!is_cycle_line("font.size : 9"));
    }

    #[test]
    fn patch_content() {
        assert_eq!(patch("", "L"), "L\n");
        assert_eq!(patch("a : 1\n", "L"), "a : 1\nL\n");
        assert_eq!(patch("axes.prop_cycle : x\n\nfont.size : 9\n", "L"),
                   "L\n\nfont.size : 9\n");
        assert_eq!(patch("a : 1\n#axes.prop_cycle : x\naxes.prop_cycle : y",
                         "L"),
                   "a : 1\nL\naxes.prop_cycle : y\n");
    }

    #[test]
    fn write_file() {
        let dir = tempfile::tempdir().unwrap();
        let fname = dir.path().join("matplotlibrc");

        let mut out = Vec::new();
        set_default_colors_to("bright", &fname, true, &mut out).unwrap();
        assert!(!fname.exists());
        assert_eq!(String::from_utf8(out).unwrap(),
                   format!("New config line: {BRIGHT_LINE}\n"));

        set_default_colors("bright", &fname, false).unwrap();
        assert_eq!(fs::read_to_string(&fname).unwrap(),
                   format!("{BRIGHT_LINE}\n"));

        set_default_colors("vibrant", &fname, false).unwrap();
        let vibrant = config_line("vibrant").unwrap();
        assert_eq!(fs::read_to_string(&fname).unwrap(), format!("{vibrant}\n"));

        fs::write(&fname, format!("{vibrant}\n\nfont.size : 9\n")).unwrap();
        set_default_colors("pale", &fname, false).unwrap();
        let pale = config_line("pale").unwrap();
        assert_eq!(fs::read_to_string(&fname).unwrap(),
                   format!("{pale}\n\nfont.size : 9\n"));

        assert!(set_default_colors("nope", &fname, false).is_err());
    }

    #[test]
    fn unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        let r = set_default_colors("bright", dir.path(), false);
        assert!(matches!(r, Err(Error::Io(_))));
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fname = dir.path().join("config").join("matplotlib")
            .join("matplotlibrc");
        set_default_colors("bright", &fname, false).unwrap();
        assert_eq!(fs::read_to_string(&fname).unwrap(),
                   format!("{BRIGHT_LINE}\n"));
    }

    // The only test touching these variables, so no other test races
    // with it.
    #[test]
    fn config_path_from_env() {
        let vars = ["MPLCONFIGDIR", "XDG_CONFIG_HOME", "HOME"];
        let saved: Vec<_> = vars.iter().map(|v| env::var_os(v)).collect();
        for v in vars { env::remove_var(v); }
        assert_eq!(default_config_path(), None);

        env::set_var("HOME", "/home/tol");
        assert_eq!(default_config_path(),
                   Some(PathBuf::from("/home/tol/.config/matplotlib/matplotlibrc")));
        env::set_var("XDG_CONFIG_HOME", "/y");
        assert_eq!(default_config_path(),
                   Some(PathBuf::from("/y/matplotlib/matplotlibrc")));
        env::set_var("MPLCONFIGDIR", "/x");
        assert_eq!(default_config_path(),
                   Some(PathBuf::from("/x/matplotlibrc")));
        // Empty values are ignored.
        env::set_var("MPLCONFIGDIR", "");
        assert_eq!(default_config_path(),
                   Some(PathBuf::from("/y/matplotlib/matplotlibrc")));

        for (v, s) in vars.iter().zip(saved) {
            match s {
                Some(s) => env::set_var(v, s),
                None => env::remove_var(v),
            }
        }
    }
}
