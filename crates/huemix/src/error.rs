//! Utility module with huemix's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, PyErr};

/// An erroneous color format.
///
/// Huemix accepts 24-bit colors in hexadecimal notation only, i.e., an
/// optional `#` followed by exactly six hexadecimal digits in either case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with an unexpected number of characters. For example,
    /// `#fff` is too short for the strict six-digit format, whereas `#💩0000`
    /// has the wrong number of bytes.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efgabc` has a malformed first coordinate.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedCharacters => {
                f.write_str("color format should have six hexadecimal digits after optional `#`")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
