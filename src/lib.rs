//! Dark/light classification of colors.
//!
//! A color is *dark* when its relative luminance, computed with the
//! ITU-R BT.709 weights, is below ½.  Text and controls drawn over a
//! dark color should be white, over a light color black; see
//! [`Foreground`].
//!
//! - [`Contrast`] for the `rgb` pixel types, or the free function
//!   [`is_dark`]
//! - [`Selection`] for the state of a screen showing a picked color
//! - [`parse_color`] and [`css_string`] to go from and to text
//!
//! Alpha never takes part in the classification.

use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
mod foreground;
mod named;
mod picker;

pub use error::{Channel, Error};
pub use foreground::Foreground;
pub use named::{css_string, named, parse_color};
pub use picker::Selection;

/// Weight of the red channel in the relative luminance.
pub const RED_WEIGHT: f64 = 0.2126;
/// Weight of the green channel in the relative luminance.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Weight of the blue channel in the relative luminance.
pub const BLUE_WEIGHT: f64 = 0.0722;
/// Colors with a relative luminance strictly below this are dark.
pub const DARK_THRESHOLD: f64 = 0.5;

#[inline]
fn clamp_channel(x: f64) -> f64 {
    if x.is_nan() { 0. } else { x.clamp(0., 1.) }
}

/// Clamp all channels to \[0, 1\], NaN becoming 0.
#[inline]
pub(crate) fn clamp_rgb(c: RGB<f64>) -> RGB<f64> {
    RGB { r: clamp_channel(c.r), g: clamp_channel(c.g),
          b: clamp_channel(c.b) }
}

#[inline]
pub(crate) fn normalize_rgb8(c: RGB8) -> RGB<f64> {
    RGB { r: c.r as f64 / 255., g: c.g as f64 / 255., b: c.b as f64 / 255. }
}

#[inline]
fn normalize_rgb16(c: RGB16) -> RGB<f64> {
    RGB { r: c.r as f64 / 65535., g: c.g as f64 / 65535.,
          b: c.b as f64 / 65535. }
}

#[inline]
fn weighted(c: RGB<f64>) -> f64 {
    RED_WEIGHT * c.r + GREEN_WEIGHT * c.g + BLUE_WEIGHT * c.b
}

/// Classification of colors as dark or light.
///
/// The unchecked methods ([`luminance`][Contrast::luminance],
/// [`is_dark`][Contrast::is_dark], [`foreground`][Contrast::foreground])
/// clamp every channel to \[0, 1\] (a NaN channel counts as 0) and
/// never fail.  The checked methods reject such channels instead.
pub trait Contrast: Sized {
    /// Return the red, green and blue components of the color, in
    /// \[0, 1\] for valid colors.  Alpha, if any, is dropped.
    fn to_rgb(&self) -> RGB<f64>;

    /// Relative luminance of the color, in \[0, 1\].
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB;
    /// use color_contrast::Contrast;
    /// let green = RGB { r: 0., g: 1., b: 0. };
    /// assert_eq!(green.luminance(), 0.7152);
    /// ```
    fn luminance(&self) -> f64 { weighted(clamp_rgb(self.to_rgb())) }

    /// Whether the color is dark, i.e., whether its luminance is
    /// below [`DARK_THRESHOLD`].  A luminance of exactly ½ is light.
    fn is_dark(&self) -> bool { self.luminance() < DARK_THRESHOLD }

    /// The foreground contrasting with this color.
    fn foreground(&self) -> Foreground { Foreground::for_color(self) }

    /// Relative luminance of the color, or an error if a channel is
    /// NaN or outside \[0, 1\].
    fn checked_luminance(&self) -> Result<f64, Error> {
        let RGB { r, g, b } = self.to_rgb();
        let c = RGB { r: error::check(Channel::Red, r)?,
                      g: error::check(Channel::Green, g)?,
                      b: error::check(Channel::Blue, b)? };
        Ok(weighted(c))
    }

    /// Same as [`is_dark`][Contrast::is_dark] but fails instead of
    /// clamping invalid channels.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB;
    /// use color_contrast::Contrast;
    /// assert_eq!(RGB { r: 0., g: 0., b: 1. }.try_is_dark(), Ok(true));
    /// assert!(RGB { r: 0., g: 1.2, b: 0. }.try_is_dark().is_err());
    /// ```
    fn try_is_dark(&self) -> Result<bool, Error> {
        Ok(self.checked_luminance()? < DARK_THRESHOLD)
    }
}

/// Whether `color` is dark.  Shorthand for [`Contrast::is_dark`].
///
/// # Example
///
/// ```
/// use rgb::RGB;
/// use color_contrast::is_dark;
/// assert!(is_dark(RGB { r: 0., g: 0., b: 0. }));
/// assert!(!is_dark(RGB { r: 0.5, g: 0.5, b: 0.5 }));
/// ```
#[inline]
pub fn is_dark(color: RGB<f64>) -> bool { color.is_dark() }

impl Contrast for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }
}

impl Contrast for RGB<f32> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }
}

impl Contrast for RGBA<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { RGB { r: self.r, g: self.g, b: self.b } }
}

impl Contrast for RGBA<f32> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }
}

impl Contrast for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { normalize_rgb8(*self) }
}

impl Contrast for RGB16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { normalize_rgb16(*self) }
}

impl Contrast for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        normalize_rgb8(RGB8 { r: self.r, g: self.g, b: self.b })
    }
}

impl Contrast for RGBA16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        normalize_rgb16(RGB16 { r: self.r, g: self.g, b: self.b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> RGB<f64> { RGB { r, g, b } }

    #[test]
    fn classify() {
        assert!(is_dark(rgb(0., 0., 0.)));
        assert!(!is_dark(rgb(1., 1., 1.)));
        assert!(!is_dark(rgb(0., 1., 0.)));
        assert!(is_dark(rgb(0., 0., 1.)));
        assert!(is_dark(rgb(1., 0., 0.)));
        // Luminance exactly ½ is light.
        assert_eq!(rgb(0.5, 0.5, 0.5).luminance(), DARK_THRESHOLD);
        assert!(!is_dark(rgb(0.5, 0.5, 0.5)));
        // An equal-weight average would say light.
        assert!(is_dark(rgb(1., 0., 1.)));
    }

    #[test]
    fn deterministic() {
        let c = rgb(0.3, 0.61, 0.2);
        let first = is_dark(c);
        for _ in 0 .. 100 {
            assert_eq!(is_dark(c), first);
            assert_eq!(c.luminance(), c.luminance());
        }
    }

    #[test]
    fn monotone() {
        let steps: Vec<f64> = (-5 ..= 15).map(|i| i as f64 / 10.).collect();
        for &g in &steps {
            for &b in &steps {
                let mut prev_lum = f64::NEG_INFINITY;
                let mut seen_light = false;
                for &r in &steps {
                    let c = rgb(r, g, b);
                    assert!(c.luminance() >= prev_lum, "{:?}", c);
                    prev_lum = c.luminance();
                    if seen_light {
                        assert!(!c.is_dark(), "{:?} flipped to dark", c);
                    }
                    seen_light |= !c.is_dark();
                }
            }
        }
    }

    #[test]
    fn clamping() {
        assert_eq!(rgb(2., 2., 2.).luminance(), 1.);
        assert_eq!(rgb(-1., -1., -1.).luminance(), 0.);
        assert_eq!(rgb(f64::NAN, 1., 0.).luminance(), GREEN_WEIGHT);
        assert!(is_dark(rgb(f64::NAN, f64::NAN, f64::NAN)));
        // Clamped to (1, 0, 1) and (1, 1, 0).
        assert!(is_dark(rgb(f64::INFINITY, 0., 10.)));
        assert!(!is_dark(rgb(f64::INFINITY, 10., 0.)));
        assert!(RGBA { r: 3f32, g: 0., b: 0., a: 1. }.is_dark());
    }

    #[test]
    fn checked() {
        assert_eq!(rgb(0., 1., 0.).checked_luminance(), Ok(GREEN_WEIGHT));
        assert_eq!(rgb(0.5, 0.5, 0.5).try_is_dark(), Ok(false));
        assert_eq!(rgb(0.2, -0.1, 0.).try_is_dark(),
                   Err(Error::OutOfRange { channel: Channel::Green,
                                          value: -0.1 }));
        assert_eq!(rgb(0.2, 0.1, f64::NAN).try_is_dark(),
                   Err(Error::NotANumber { channel: Channel::Blue }));
    }

    #[test]
    fn integer_pixels() {
        assert!(RGB8::new(127, 127, 127).is_dark());
        assert!(!RGB8::new(128, 128, 128).is_dark());
        assert!(!RGB8::new(0, 255, 0).is_dark());
        assert!(RGB16::new(0, 0, 65535).is_dark());
        assert!(!RGB16::new(65535, 65535, 65535).is_dark());
        assert_eq!(RGB8::new(255, 255, 255).try_is_dark(), Ok(false));
        let c: RGB<f32> = RGB { r: 0.5, g: 0.5, b: 0.5 };
        assert!(!c.is_dark());
    }

    #[test]
    fn alpha_ignored() {
        for a in [0, 128, 255] {
            assert!(RGBA8::new(0, 0, 0, a).is_dark());
            assert!(!RGBA8::new(255, 255, 255, a).is_dark());
            assert!(RGBA16::new(0, 0, 65535, a as u16 * 257).is_dark());
        }
        for a in [0., 0.5, 1., f64::NAN] {
            let c = RGBA { r: 0., g: 1., b: 0., a };
            assert_eq!(c.luminance(), GREEN_WEIGHT);
            assert_eq!(c.try_is_dark(), Ok(false));
            let c = RGBA { r: 0f32, g: 1., b: 0., a: a as f32 };
            assert_eq!(c.luminance(), GREEN_WEIGHT);
        }
    }

    #[test]
    fn foreground() {
        assert_eq!(rgb(0., 0., 1.).foreground(), Foreground::White);
        assert_eq!(RGB8::new(255, 255, 0).foreground(), Foreground::Black);
    }
}
