//! Description of the figures to draw, independent of any backend.

use crate::table::DataTable;

/// Matplotlib format string of convergence curves: solid line with
/// square markers.
pub const CURVE_FMT: &str = "-s";

/// Scale of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Name of the scale as understood by Matplotlib.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Linear => "linear",
            Scale::Log => "log",
        }
    }
}

/// Aspect ratio of the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Auto,
    /// Same scaling per unit (per decade on log axes) along x and y.
    Equal,
}

/// Texts attached to a figure and its curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub xlabel: String,
    pub ylabel: String,
    pub title: String,
    /// Legend entry of the curve.
    pub series: String,
}

/// A labeled line-plus-marker series.  Holds its own copy of the points.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub fmt: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// The top level description of a plot: curves, labels, axes settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub xscale: Scale,
    pub yscale: Scale,
    pub aspect: Aspect,
    pub legend: bool,
    pub curves: Vec<Curve>,
}

impl Figure {
    /// Log-log figure, with equal aspect and a legend, holding a single
    /// curve drawn from `table`.  An empty table gives a curve without
    /// points.
    pub fn build(table: &DataTable, labels: &Labels) -> Figure {
        let curve = Curve {
            label: labels.series.clone(),
            fmt: CURVE_FMT,
            x: table.x().to_vec(),
            y: table.y().to_vec(),
        };
        Figure {
            title: labels.title.clone(),
            xlabel: labels.xlabel.clone(),
            ylabel: labels.ylabel.clone(),
            xscale: Scale::Log,
            yscale: Scale::Log,
            aspect: Aspect::Equal,
            legend: true,
            curves: vec![curve],
        }
    }
}
