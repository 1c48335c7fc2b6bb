//! Write `legend.html` showing the legend strips of a few color scales
//! and, when the dataset is available, of the coal share map.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use crem_viz::{ColorScale, Config};
use crem_viz::data::Dataset;
use crem_viz::legend::LegendSample;
use crem_viz::normalize::normalize_and_color;
use crem_viz::provincial::MapData;

type Err = Box<dyn Error>;

fn strip(fh: &mut impl Write, legend: &[LegendSample], comment: &str)
         -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for s in legend {
        writeln!(fh, "  <td title=\"{:.2}\" style=\"width: 4px; height: 30px; \
                      background-color: {}\"></td>", s.value, s.color)?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env();
    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>crem-viz: legends {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Scales</h3>")?;
    let column = [("a", 12.), ("b", 30.), ("c", 47.5), ("d", 80.)];
    for name in ["Blues", "Greens", "Reds", "YlOrRd", "YlGnBu", "RdBu", "Blues_r"] {
        let scale = ColorScale::from_name(name)?;
        for boost in [1., 2.] {
            let n = normalize_and_color(&column, &scale, boost,
                                        config.legend_x_origin)?;
            strip(&mut fh, &n.legend, &format!("{name} (boost {boost})"))?;
        }
    }

    let dataset = Dataset::from_config(&config);
    if dataset.root().is_dir() {
        writeln!(fh, "<h3>Coal share in 2010</h3>")?;
        let map = MapData::new(&dataset, &config)
            .coal_share_2010("col_2010", &ColorScale::default())?;
        strip(&mut fh, &map.legend, "COL_share")?;
    } else {
        tracing::warn!(root = %dataset.root().display(),
                       "dataset not found, skipping the coal share legend");
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
