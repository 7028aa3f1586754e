use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use log::info;
use rgb::RGB;
use color_contrast::{css_string, parse_color, Contrast, Selection};

type Err = Box<dyn Error>;

const DEFAULT_COLORS: [&str; 12] = [
    "white", "black", "red", "green", "blue", "yellow", "orange",
    "purple", "gray", "#808080", "#7f7f7f", "navy"];

fn swatch(fh: &mut impl Write, c: RGB<f64>, label: &str)
          -> Result<(), Err> {
    writeln!(fh, "<div style=\"background-color: {}; color: {}; \
                  padding: 12px; font-family: sans-serif\">\
                  {label}: luminance {:.4}</div>",
             css_string(c), c.foreground().css(), c.luminance())?;
    Ok(())
}

/// Replay a picker session: each color is reported while dragging,
/// the last one is reported as final, then the picker is closed.
fn session(fh: &mut impl Write, colors: &[RGB<f64>]) -> Result<(), Err> {
    let mut selection = Selection::default();
    swatch(fh, selection.color(), "initial")?;
    selection.toggle();
    for &c in colors {
        selection.select(c, true);
        swatch(fh, selection.color(), "picking")?;
    }
    if let Some(&last) = colors.last() {
        selection.finish(last);
    }
    selection.toggle();
    swatch(fh, selection.color(), "final")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args: Vec<String> = env::args().skip(1).collect();
    let names: Vec<&str> = if args.is_empty() {
        DEFAULT_COLORS.to_vec()
    } else {
        args.iter().map(|s| s.as_str()).collect()
    };
    let colors = names.iter()
        .map(|s| parse_color(s).map(|c| (*s, c)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color contrast swatches</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Colors</h3>")?;
    for &(name, c) in &colors {
        swatch(&mut fh, c, name)?;
    }
    writeln!(fh, "<h3>Picker session</h3>")?;
    let picked: Vec<_> = colors.iter().map(|&(_, c)| c).collect();
    session(&mut fh, &picked)?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    info!("wrote {} swatches to swatches.html", colors.len());
    Ok(())
}
