//! Fixed inputs and labels of the convergence plots.

use std::path::{Path, PathBuf};
use crate::figure::Labels;

/// Degrees of freedom vs. estimated error.
pub const DOF_FILE: &str = "conv_dof_est_h1.dat";
/// CPU time vs. estimated error.
pub const CPU_FILE: &str = "conv_cpu_est_h1.dat";

pub const TITLE: &str = "Error convergence";
pub const ERROR_LABEL: &str = "Error [%]";
pub const SERIES_LABEL: &str = "error (est)";

/// One figure to produce: where its data lives and how to label it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub path: PathBuf,
    pub labels: Labels,
}

/// The figures to produce, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub plots: Vec<PlotConfig>,
}

impl Default for Config {
    /// Data files are looked up in the current directory.
    fn default() -> Self {
        Self {
            plots: vec![
                PlotConfig {
                    path: DOF_FILE.into(),
                    labels: Labels::convergence("Degrees of freedom"),
                },
                PlotConfig {
                    path: CPU_FILE.into(),
                    labels: Labels::convergence("CPU time (s)"),
                },
            ],
        }
    }
}

impl Config {
    /// Same as [`Config::default`] with the data files looked up in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let mut c = Self::default();
        for p in &mut c.plots {
            p.path = dir.as_ref().join(&p.path);
        }
        c
    }
}

impl Labels {
    /// Labels of an error convergence plot against `xlabel`.
    pub fn convergence(xlabel: &str) -> Self {
        Labels {
            xlabel: xlabel.to_string(),
            ylabel: ERROR_LABEL.to_string(),
            title: TITLE.to_string(),
            series: SERIES_LABEL.to_string(),
        }
    }
}
