//! The paints available for mixing.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::Rgb;

/// A paint with a fixed color.
///
/// The six hue pigments fill a challenge's three palette slots, whereas white
/// and black are always available for tinting and shading a mix.
///
/// ```
/// # use huemix::pigment::Pigment;
/// # use huemix::color::Rgb;
/// assert_eq!(Pigment::Orange.rgb(), Rgb::new(255, 165, 0));
/// assert_eq!(Pigment::Purple.name(), "purple");
/// assert_eq!(Pigment::Purple.to_string(), "Purple");
/// assert!(Pigment::Black.is_shade());
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huemix")
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pigment {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    White,
    Black,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Pigment {
    /// Get this pigment's color.
    pub const fn rgb(&self) -> Rgb {
        use Pigment::*;

        match self {
            Red => Rgb::new(255, 0, 0),
            Yellow => Rgb::new(255, 255, 0),
            Blue => Rgb::new(0, 0, 255),
            Green => Rgb::new(0, 255, 0),
            Purple => Rgb::new(128, 0, 128),
            Orange => Rgb::new(255, 165, 0),
            White => Rgb::new(255, 255, 255),
            Black => Rgb::new(0, 0, 0),
        }
    }

    /// Get this pigment's lower-case identifier.
    pub const fn name(&self) -> &'static str {
        use Pigment::*;

        match self {
            Red => "red",
            Yellow => "yellow",
            Blue => "blue",
            Green => "green",
            Purple => "purple",
            Orange => "orange",
            White => "white",
            Black => "black",
        }
    }

    /// Get this pigment's human-readable label.
    pub const fn label(&self) -> &'static str {
        use Pigment::*;

        match self {
            Red => "Red",
            Yellow => "Yellow",
            Blue => "Blue",
            Green => "Green",
            Purple => "Purple",
            Orange => "Orange",
            White => "White",
            Black => "Black",
        }
    }

    /// Determine whether this pigment is white or black.
    pub const fn is_shade(&self) -> bool {
        matches!(self, Pigment::White | Pigment::Black)
    }
}

impl Pigment {
    /// The pigments eligible for palette slots.
    pub const HUES: [Pigment; 6] = [
        Pigment::Red,
        Pigment::Yellow,
        Pigment::Blue,
        Pigment::Green,
        Pigment::Purple,
        Pigment::Orange,
    ];

    /// All pigments.
    pub const ALL: [Pigment; 8] = [
        Pigment::Red,
        Pigment::Yellow,
        Pigment::Blue,
        Pigment::Green,
        Pigment::Purple,
        Pigment::Orange,
        Pigment::White,
        Pigment::Black,
    ];
}

impl core::fmt::Display for Pigment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod test {
    use super::Pigment;

    #[test]
    fn test_hues() {
        for pigment in Pigment::HUES {
            assert!(!pigment.is_shade());
        }
        assert_eq!(
            Pigment::ALL.iter().filter(|p| p.is_shade()).count(),
            2
        );
        assert_eq!(Pigment::ALL[..6], Pigment::HUES);
    }

    #[test]
    fn test_names() {
        for pigment in Pigment::ALL {
            assert_eq!(pigment.name(), pigment.label().to_lowercase());
            assert_eq!(format!("{}", pigment), pigment.label());
        }
    }
}
