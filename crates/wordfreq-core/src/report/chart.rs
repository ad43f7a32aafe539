//! Horizontal bar chart of the selected words.
//!
//! Rendered with plotters' SVG backend: words on the vertical axis, highest
//! count at the top, frequency on the horizontal axis.

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt;
use std::path::Path;

use super::top::WordCount;

/// Bar colour parsed from `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Matplotlib's "skyblue".
    pub const SKY_BLUE: Rgb = Rgb(0x87, 0xCE, 0xEB);

    pub fn parse_hex(s: &str) -> Result<Rgb> {
        let hex = s
            .strip_prefix('#')
            .with_context(|| format!("colour {:?} must start with '#'", s))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("colour {:?} must be #RRGGBB", s);
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Fixed chart appearance.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub bar_color: Rgb,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            bar_color: Rgb::SKY_BLUE,
        }
    }
}

fn draw_err<E: fmt::Display>(e: E) -> anyhow::Error {
    anyhow::anyhow!("draw chart: {}", e)
}

/// Room for the longest word label, in pixels.
fn label_area_width(words: &[WordCount]) -> u32 {
    let longest = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0) as u32;
    (longest * 9 + 24).clamp(48, 240)
}

fn present(root: &DrawingArea<SVGBackend<'_>, Shift>, path: &Path) -> Result<()> {
    root.present()
        .map_err(draw_err)
        .with_context(|| format!("write chart {}", path.display()))
}

/// Writes the chart to `path`, overwriting any existing file.
/// The parent directory must already exist.
pub fn render_bar_chart(
    path: &Path,
    title: &str,
    words: &[WordCount],
    style: &ChartStyle,
) -> Result<()> {
    let max = words.iter().map(|w| w.count).max().unwrap_or(0);
    let x_end = max + max / 10 + 1;

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    if words.is_empty() {
        ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(label_area_width(words))
            .build_cartesian_2d(0u64..x_end, 0u32..1)
            .map_err(draw_err)?
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Frequency")
            .y_desc("Words")
            .y_labels(0)
            .draw()
            .map_err(draw_err)?;
        present(&root, path)?;
        tracing::debug!("empty chart written to {}", path.display());
        return Ok(());
    }

    // One segment per word; the first segment sits at the bottom of the plot,
    // so the least frequent word goes first and the most frequent ends on top.
    let rows: Vec<WordCount> = words.iter().rev().cloned().collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(label_area_width(words))
        .build_cartesian_2d(0u64..x_end, (&rows[..]).into_segmented())
        .map_err(draw_err)?;

    let label = |v: &SegmentValue<&WordCount>| match v {
        SegmentValue::CenterOf(w) | SegmentValue::Exact(w) => w.word.clone(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Frequency")
        .y_desc("Words")
        .y_labels(rows.len())
        .y_label_formatter(&label)
        .draw()
        .map_err(draw_err)?;

    let Rgb(r, g, b) = style.bar_color;
    let fill = RGBColor(r, g, b).filled();
    chart
        .draw_series(rows.iter().enumerate().map(|(i, w)| {
            let upper = rows
                .get(i + 1)
                .map_or(SegmentValue::Last, SegmentValue::Exact);
            let mut bar = Rectangle::new([(0, SegmentValue::Exact(w)), (w.count, upper)], fill);
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(draw_err)?;

    present(&root, path)?;
    tracing::debug!("chart with {} bars written to {}", rows.len(), path.display());
    Ok(())
}
