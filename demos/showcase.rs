//! Write `showcase.html` displaying all color sets and colormaps,
//! each with a grayscale strip below it.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tol_colors::{hex, colorsets, colormaps, rainbow_discrete,
                 RGBColor, Colormap, Kind};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8], labels: &[&str],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (i, &c) in colors.iter().enumerate() {
        let title = labels.get(i).copied().unwrap_or("");
        writeln!(fh, "  <td title=\"{title}\" style=\"width: {width}px; \
                      height: 30px; background-color: {}\"></td>",
                 hex::format(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 hex::format(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn colormap(fh: &mut impl Write, cmap: &Colormap) -> Result<(), Err> {
    let (n, width) = match cmap.kind() {
        Kind::Continuous => (256, 1),
        Kind::Discrete => (8 * cmap.len(), 4),
    };
    let comment = format!("{} (bad: {})", cmap.name(),
                          hex::format(cmap.bad::<RGB8>()));
    table_of_colors(fh, &cmap.sample::<RGB8>(n), &[], width, &comment)
}

fn main() -> Result<(), Err> {
    env_logger::init();
    let mut fh = BufWriter::new(File::create("showcase.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>tol_colors: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Color sets</h3>")?;
    for cset in colorsets::colorsets() {
        let fields: Vec<_> = cset.fields().collect();
        let c = format!("{} ({} colors)", cset.name(), cset.len());
        table_of_colors(&mut fh, &cset.colors::<RGB8>(), &fields, 40, &c)?;
    }

    writeln!(fh, "<h3>Colormaps</h3>")?;
    for cmap in colormaps::colormaps().filter(|c| !c.is_reversed()) {
        colormap(&mut fh, cmap)?;
    }

    writeln!(fh, "<h3>Discrete rainbow</h3>")?;
    for n in 1 ..= colormaps::RAINBOW_DISCRETE_MAX {
        let cmap = rainbow_discrete(n)?;
        let bad = hex::format(cmap.bad::<RGB8>());
        let c = format!("{n} colors (bad: {bad})");
        table_of_colors(&mut fh, &cmap.colors::<RGB8>(), &[], 20, &c)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
