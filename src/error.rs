use std::fmt::{self, Display};

/// A color channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Error returned by the checked operations of [`crate::Contrast`]
/// and by [`crate::parse_color`].
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The channel holds a NaN.
    NotANumber { channel: Channel },
    /// The channel lies outside \[0, 1\].
    OutOfRange { channel: Channel, value: f64 },
    /// The string is neither a hex color nor a known color name.
    Parse(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotANumber { channel } =>
                write!(f, "{channel} channel is NaN"),
            Error::OutOfRange { channel, value } =>
                write!(f, "{channel} channel {value} is not in [0, 1]"),
            Error::Parse(s) =>
                write!(f, "not a color “{s}”"),
        }
    }
}

impl std::error::Error for Error {}

/// Check that `value` is a valid normalized channel.
pub(crate) fn check(channel: Channel, value: f64) -> Result<f64, Error> {
    if value.is_nan() {
        Err(Error::NotANumber { channel })
    } else if !(0. ..= 1.).contains(&value) {
        Err(Error::OutOfRange { channel, value })
    } else {
        Ok(value)
    }
}
