use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use carto_brewery::{color_brewer, quantile_domain, scale_legend,
                    tick_labels, RGBColor, Scheme};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>", c.to_hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>", c.to_gray().to_hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn legend(fh: &mut impl Write, labels: &[String]) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px\"><tr>")?;
    for l in labels {
        writeln!(fh, "  <td style=\"width: 40px\">{l}</td>")?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG")
                         .unwrap_or_else(|_| "info".to_string()))
        .with_target(true)
        .init();

    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>carto-brewery: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Schemes</h3>")?;
    for s in Scheme::ALL {
        for (n, width) in [(6, 40), (9, 27), (30, 8), (253, 1)] {
            if let Some(c) = color_brewer(s.name(), n)? {
                let comment = format!("{s} ({} colors)", c.len());
                table_of_colors(&mut fh, &c.rgb(), width, &comment)?;
            }
        }
    }

    writeln!(fh, "<h3>Legend</h3>")?;
    let series: Vec<f64> = (0 .. 500).map(|x| (x * x) as f64 / 7.).collect();
    let domain = quantile_domain(&series)?;
    writeln!(fh, "<p>Quantile domain: {domain:?}</p>")?;
    let values: Vec<u32> = (0 .. 30).map(|x| 100 * x).collect();
    if let Some(c) = color_brewer("YlGnBu", values.len())? {
        table_of_colors(&mut fh, &c.rgb(), 40, "")?;
    }
    legend(&mut fh, &tick_labels(&scale_legend(&values, 10)))?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
