//! Minimal bindings to the [Matplotlib][] explicit interface.
//!
//! Only what the convergence figures need is exposed.  Every object is
//! reached through an explicit handle ([`Figure`], [`Axes`]), never
//! through pyplot's "current figure".
//!
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use numpy::PyArray1;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::PyDict,
};
use crate::error::{Error, Result};

macro_rules! getattr {
    ($py: ident, $lib: expr, $f: literal) => {
        $lib.getattr($py, intern!($py, $f))
    };
}

/// Call the method `$m` of the Python object `$obj` with `$args`.
macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
        })
    };
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, $m).map(|m| m.unbind()))
}}

lazy_static! {
    // Import matplotlib modules.
    static ref FIGURE: std::result::Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
    static ref PYPLOT: std::result::Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}


/// Values that can be copied into a `numpy.ndarray`.
pub trait Data {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>>;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, self.as_ref())
    }
}

/// A single plotting area of a [`Figure`].
#[derive(Debug, Clone)]
pub struct Axes {
    pub(crate) ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

impl Figure {
    /// Return a new `Figure`, not managed by pyplot.  It will not be
    /// displayed by [`show`] but can be saved.
    pub fn new() -> Result<Figure> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = getattr!(py, figure, "Figure")?.call0(py)?;
            Ok(Self { fig })
        })
    }

    /// Add a single set of axes covering the whole figure.
    pub fn add_subplot(&self) -> Result<Axes> {
        Python::with_gil(|py| {
            let ax = self.fig.call_method0(py, intern!(py, "add_subplot"))?;
            Ok(Axes { ax })
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone() }
    }
}

pub struct Savefig {
    fig: PyObject,
}

impl Savefig {
    /// Save the figure.  The format is deduced from the extension of
    /// `path`.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        Python::with_gil(|py| {
            self.fig.call_method1(
                py, intern!(py, "savefig"), (path.as_ref(),)
            ).map_err(|e| {
                if e.is_instance_of::<PyFileNotFoundError>(py) {
                    Error::FileNotFound
                } else if e.is_instance_of::<PyPermissionError>(py) {
                    Error::PermissionDenied
                } else {
                    Error::Python(e)
                }
            })?;
            Ok(())
        })
    }
}


/// Return a new figure managed by pyplot, to be displayed by [`show`].
pub fn figure() -> Result<Figure> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = getattr!(py, pyplot, "figure")?.call0(py)?;
        Ok(Figure { fig })
    })
}

/// Display all open figures.  With an interactive backend, this blocks
/// until all windows are closed.
pub fn show() -> Result<()> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        getattr!(py, pyplot, "show")?.call0(py)?;
        Ok(())
    })
}


impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use convplot::plt;
    /// let fig = plt::Figure::new()?;
    /// let mut ax = fig.add_subplot()?;
    /// ax.xy(&[10., 20., 40.], &[5., 2.5, 1.25]).fmt("-s").plot()?;
    /// fig.save().to_file("target/XY_plot.pdf")?;
    /// # Ok::<(), convplot::Error>(())
    /// ```
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // Mutably borrow `self` to reflect that the final `.plot()` will
        // mutate the underlying Python object.
        XY { axes: self, options: PlotOptions::new(), x, y }
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    /// Set the xaxis' scale.  Possible values for `v` are "linear",
    /// "log", "symlog", "logit",...
    pub fn set_xscale(&mut self, v: &str) -> Result<&mut Self> {
        meth!(self.ax, set_xscale, (v,))?;
        Ok(self)
    }

    /// Set the yaxis' scale.  See [`Axes::set_xscale`].
    pub fn set_yscale(&mut self, v: &str) -> Result<&mut Self> {
        meth!(self.ax, set_yscale, (v,))?;
        Ok(self)
    }

    /// Set axis properties, e.g. "equal" for the same scaling along x
    /// and y.
    pub fn axis(&mut self, v: &str) -> Result<&mut Self> {
        meth!(self.ax, axis, (v,))?;
        Ok(self)
    }

    pub fn legend(&mut self) -> Result<&mut Self> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    label: &'a str,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", label: "" }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        Ok(kwargs)
    }
}

pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    /// Matplotlib format string, e.g. "-s" or "r.".
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    /// Legend entry of the curve.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<()> {
        Python::with_gil(|py| {
            let xn = self.x.to_numpy(py);
            let yn = self.y.to_numpy(py);
            let kwargs = self.options.kwargs(py)?;
            self.axes.ax.call_method_bound(
                py, intern!(py, "plot"), (xn, yn, self.options.fmt),
                Some(&kwargs))?;
            Ok(())
        })
    }
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Run `f`, treating an absent Matplotlib as a skipped test.
    pub(crate) fn with_matplotlib(f: impl FnOnce() -> Result<()>)
                                  -> Result<()> {
        match f() {
            Err(Error::NoMatplotlib) => {
                eprintln!("matplotlib not available, test skipped");
                Ok(())
            }
            r => r,
        }
    }

    #[test]
    fn a_basic_pdf() -> Result<()> {
        with_matplotlib(|| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("a_basic.pdf");
            let fig = Figure::new()?;
            let mut ax = fig.add_subplot()?;
            ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
            fig.save().to_file(&path)?;
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
            Ok(())
        })
    }

    #[test]
    fn a_loglog_png() -> Result<()> {
        with_matplotlib(|| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("loglog.png");
            let fig = Figure::new()?;
            let mut ax = fig.add_subplot()?;
            let x = vec![10., 20., 40.];
            let y = vec![5., 2.5, 1.25];
            ax.xy(&x, &y).fmt("-s").label("error (est)").plot()?;
            ax.set_xscale("log")?.set_yscale("log")?.axis("equal")?.legend()?;
            fig.save().to_file(&path)?;
            assert!(path.exists());
            Ok(())
        })
    }

    #[test]
    fn save_into_missing_dir() -> Result<()> {
        with_matplotlib(|| {
            let dir = tempfile::tempdir().unwrap();
            let fig = Figure::new()?;
            fig.add_subplot()?;
            match fig.save().to_file(dir.path().join("nope/fig.pdf")) {
                Err(Error::FileNotFound) => Ok(()),
                r => panic!("expected FileNotFound, got {:?}", r),
            }
        })
    }

    #[test]
    fn unknown_scale_is_an_error() -> Result<()> {
        with_matplotlib(|| {
            let fig = Figure::new()?;
            let mut ax = fig.add_subplot()?;
            assert!(matches!(ax.set_xscale("no such scale"),
                             Err(Error::Python(_))));
            Ok(())
        })
    }
}
