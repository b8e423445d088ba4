//! End-to-end checks of the public catalogue.

use rgb::{RGB8, RGBA8};
use tol_colors::{
    colormap, colormap_names, colorset, colorset_names, hex,
    rainbow_discrete, register_colormaps, registered, set_default_colors,
    ColorRange, Error, Kind, BRIGHT};

#[test]
fn colorsets_by_name() {
    assert_eq!(colorset_names(),
               ["bright", "high_contrast", "vibrant", "muted",
                "medium_contrast", "pale", "dark", "light", "land_cover"]);
    for name in colorset_names() {
        let cset = colorset(name).unwrap();
        assert!(cset.hex().all(hex::is_valid));
        assert_eq!(cset.colors::<RGB8>().len(), cset.len());
        assert_eq!(colorset(&name.replace('_', "-")).unwrap(), cset);
    }
    assert_eq!(colorset("bright").unwrap().get("blue"), Some(BRIGHT.blue));
    assert_eq!(BRIGHT.blue, "#4477AA");
}

#[test]
fn colormaps_by_name() {
    for name in colormap_names() {
        let cmap = colormap(name).unwrap();
        assert_eq!(cmap.name(), name);
        let c: RGBA8 = cmap.rgb(f64::NAN);
        assert_eq!(c, cmap.bad::<RGBA8>());
    }
    let d = colormap("PRGn_discrete_r").unwrap();
    assert_eq!(d.kind(), Kind::Discrete);
    let c: RGB8 = d.rgb(0.);
    assert_eq!(hex::format(c), "#1B7837");
    let rainbow = colormap("rainbow").unwrap();
    assert_eq!(rainbow.kind(), Kind::Continuous);
    let c: RGB8 = rainbow.rgb(1.);
    assert_eq!(hex::format(c), "#521A13");
    assert!(colormap("rainbow_r").unwrap().is_reversed());
    assert!(matches!(colormap("rainbow_discrete"),
                     Err(Error::UnknownColormap { .. })));
}

#[test]
fn discrete_rainbow() {
    let one = rainbow_discrete(1).unwrap();
    assert_eq!(one.colors::<RGB8>(), [RGB8::new(0x19, 0x65, 0xB0)]);
    for n in 1 ..= 23 {
        assert_eq!(rainbow_discrete(n).unwrap().len(), n);
    }
    let err = rainbow_discrete(0).unwrap_err();
    assert!(err.to_string().contains("1..=23"), "{err}");
}

#[test]
fn registration() {
    register_colormaps();
    let cmap = registered("tol.WhOrBr_discrete").unwrap();
    assert_eq!(&cmap, colormap("WhOrBr_discrete").unwrap());
}

#[test]
fn default_colors() {
    let dir = tempfile::tempdir().unwrap();
    let fname = dir.path().join("matplotlibrc");
    std::fs::write(&fname, "font.size : 9\n").unwrap();
    set_default_colors("muted", &fname, false).unwrap();
    let content = std::fs::read_to_string(&fname).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "font.size : 9");
    assert!(lines[1].starts_with("axes.prop_cycle : cycler('color', \
                                  ['CC6677', '332288',"));
}
