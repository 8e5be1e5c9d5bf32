//! Error convergence plots.
//!
//! Reads the convergence data of an adaptive computation, degrees of
//! freedom vs. estimated error (`conv_dof_est_h1.dat`) and CPU time
//! vs. estimated error (`conv_cpu_est_h1.dat`), and shows each as a
//! log-log curve in its own [Matplotlib][] window.
//!
//! Usage
//! -----
//!
//! With the `matplotlib` feature (on by default), `convplot::run()` does
//! the whole job.  Other display surfaces plug in through [`Surface`]
//! and [`run_with`].
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod config;
mod error;
pub mod figure;
#[cfg(feature = "matplotlib")]
pub mod plt;
pub mod surface;
pub mod table;

use log::debug;

pub use config::Config;
pub use error::{Error, Result};
pub use figure::Figure;
pub use surface::Surface;
pub use table::DataTable;

/// Load every table of `config` and build its figure, in order, then
/// hand all figures to `surface`.  Nothing is presented if a table
/// fails to load.
pub fn run_with<S>(config: &Config, surface: &mut S) -> Result<()>
where S: Surface + ?Sized {
    let mut figures = Vec::with_capacity(config.plots.len());
    for plot in &config.plots {
        let table = DataTable::load(&plot.path)?;
        debug!("building figure {:?} from {}", plot.labels.xlabel,
               plot.path.display());
        figures.push(Figure::build(&table, &plot.labels));
    }
    surface.present(&figures)
}

/// Plot the convergence files of the current directory in Matplotlib
/// windows and wait until they are closed.
///
/// # Example
///
/// ```no_run
/// // Blocks until the windows are closed.
/// convplot::run()?;
/// # Ok::<(), convplot::Error>(())
/// ```
#[cfg(feature = "matplotlib")]
pub fn run() -> Result<()> {
    run_with(&Config::default(), &mut surface::Pyplot::new())
}
