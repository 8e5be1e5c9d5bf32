//! Drawing built [`Figure`]s on an output surface.

use crate::{error::Result, figure::Figure};
#[cfg(feature = "matplotlib")]
use crate::{figure::Aspect, plt};
#[cfg(feature = "matplotlib")]
use log::info;

/// Something able to display figures.
pub trait Surface {
    /// Render all `figures` then wait until they are dismissed.  This is
    /// the only blocking call of the program.
    fn present(&mut self, figures: &[Figure]) -> Result<()>;
}

/// Draw `fig` on the axes `ax`.
#[cfg(feature = "matplotlib")]
pub fn render(fig: &Figure, ax: &mut plt::Axes) -> Result<()> {
    for c in &fig.curves {
        ax.xy(&c.x, &c.y).fmt(c.fmt).label(&c.label).plot()?;
    }
    ax.set_xscale(fig.xscale.as_str())?
        .set_yscale(fig.yscale.as_str())?
        .set_title(&fig.title)?
        .set_xlabel(&fig.xlabel)?
        .set_ylabel(&fig.ylabel)?;
    if fig.aspect == Aspect::Equal {
        ax.axis("equal")?;
    }
    if fig.legend {
        ax.legend()?;
    }
    Ok(())
}

/// Interactive Matplotlib windows, one per figure.
#[cfg(feature = "matplotlib")]
#[derive(Debug, Default)]
pub struct Pyplot;

#[cfg(feature = "matplotlib")]
impl Pyplot {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "matplotlib")]
impl Surface for Pyplot {
    fn present(&mut self, figures: &[Figure]) -> Result<()> {
        for f in figures {
            let fig = plt::figure()?;
            let mut ax = fig.add_subplot()?;
            render(f, &mut ax)?;
        }
        info!("showing {} figure(s)", figures.len());
        plt::show()
    }
}
