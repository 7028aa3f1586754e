//! State of a screen showing a selected color, with a color picker
//! that can be shown over it.
//!
//! Picker callbacks are plain method calls on [`Selection`]: each one
//! replaces the current color and the foreground is recomputed on
//! demand.

use log::{debug, trace};
use rgb::RGB;
use crate::{Contrast, Foreground};

/// The current color of the screen and whether the picker is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    color: RGB<f64>,
    shown: bool,
}

impl Default for Selection {
    /// White, with the picker hidden.
    fn default() -> Self {
        Selection::new(RGB { r: 1., g: 1., b: 1. })
    }
}

impl Selection {
    /// A selection starting at `initial`, with the picker hidden.
    pub fn new(initial: RGB<f64>) -> Self {
        Selection { color: initial, shown: false }
    }

    /// The selected color.
    pub fn color(&self) -> RGB<f64> { self.color }

    /// Whether the picker is currently shown.
    pub fn is_shown(&self) -> bool { self.shown }

    /// Foreground to draw on the selected color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB;
    /// use color_contrast::{Foreground, Selection};
    /// let mut s = Selection::default();
    /// assert_eq!(s.foreground(), Foreground::Black);
    /// s.select(RGB { r: 0., g: 0., b: 1. }, false);
    /// assert_eq!(s.foreground(), Foreground::White);
    /// ```
    pub fn foreground(&self) -> Foreground { self.color.foreground() }

    /// Show the picker if hidden, hide it otherwise.
    pub fn toggle(&mut self) {
        self.shown = !self.shown;
        debug!("picker {}", if self.shown { "shown" } else { "hidden" });
    }

    /// The picker reported `color`.  `continuously` is set while the
    /// user is still dragging.  The selection is updated even if the
    /// picker is already hidden.
    pub fn select(&mut self, color: RGB<f64>, continuously: bool) {
        trace!("picked {:?} (continuously: {})", color, continuously);
        self.color = color;
    }

    /// The picker reported `color` as its final value.  The picker
    /// stays shown until [`toggle`][Selection::toggle] is called.
    pub fn finish(&mut self, color: RGB<f64>) {
        self.color = color;
        debug!("picker finished with {:?}, foreground {:?}",
               color, self.foreground());
    }
}
