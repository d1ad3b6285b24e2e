//! Chart data handed to a rendering collaborator.
//!
//! Handlers build `Chart` values; how (or whether) they are drawn is up to
//! the `ChartRenderer` implementation. The default binary uses the text
//! renderer; the JSON renderer writes the same data for external tooling.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
    pub reference_line: Option<ReferenceLine>,
}

pub trait ChartRenderer {
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

/// Renders a chart as horizontal bars on a terminal.
pub struct TextRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: 40 }
    }
}

impl<W: Write> ChartRenderer for TextRenderer<W> {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        writeln!(self.out, "\n{}", chart.title)?;
        writeln!(self.out, "{} by {}", chart.y_label, chart.x_label)?;

        let max = chart
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.y.abs())
            .chain(chart.reference_line.iter().map(|r| r.value.abs()))
            .fold(0.0_f64, f64::max);

        for series in &chart.series {
            writeln!(self.out, "\n[{}]", series.label)?;
            for point in &series.points {
                let bar = if max > 0.0 {
                    let len = (point.y.abs() / max * self.width as f64).round() as usize;
                    "#".repeat(len.min(self.width))
                } else {
                    String::new()
                };
                writeln!(self.out, "{:>12} | {:<width$} {:.1}", point.x, bar, point.y, width = self.width)?;
            }
        }

        if let Some(reference) = &chart.reference_line {
            writeln!(self.out, "\n---- {}: {:.1} ----", reference.label, reference.value)?;
        }

        Ok(())
    }
}

/// Writes the chart as a JSON document, for piping into external plotters.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ChartRenderer for JsonRenderer<W> {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, chart)?;
        writeln!(self.out)?;
        Ok(())
    }
}
