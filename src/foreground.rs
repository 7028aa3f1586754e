use rgb::RGB;
use crate::Contrast;

/// Color of the text and controls drawn on top of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Foreground {
    /// For dark colors.
    White,
    /// For light colors.
    Black,
}

impl Foreground {
    /// Returns [`Foreground::White`] if `c` is dark and
    /// [`Foreground::Black`] otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_contrast::Foreground;
    /// let navy = RGB8::new(0, 0, 128);
    /// assert_eq!(Foreground::for_color(&navy), Foreground::White);
    /// ```
    pub fn for_color(c: &impl Contrast) -> Self {
        if c.is_dark() { Foreground::White } else { Foreground::Black }
    }

    /// The foreground as a normalized color.
    pub fn rgb(self) -> RGB<f64> {
        match self {
            Foreground::White => RGB { r: 1., g: 1., b: 1. },
            Foreground::Black => RGB { r: 0., g: 0., b: 0. },
        }
    }

    /// The foreground as a CSS color.
    pub fn css(self) -> &'static str {
        match self {
            Foreground::White => "#ffffff",
            Foreground::Black => "#000000",
        }
    }
}
