//! Colors and the conversions between them.
//!
//! This module defines the four color representations used by huemix:
//!
//!   * [`Rgb`] is the 24-bit sRGB color used at all boundaries, i.e., for target
//!     colors, pigments, and mixing results.
//!   * [`Xyz`] holds CIE 1931 tristimulus values relative to the D65 white
//!     point, scaled so that white has luminance 100.
//!   * [`Lab`] holds CIELAB coordinates, the space in which perceptual
//!     differences are measured.
//!   * [`Hsl`] holds hue, saturation, and lightness, which serve only for
//!     classifying a target color's hue.
//!
//! The free functions follow the conversion pipeline step by step. All of them
//! are pure and total; conversions ending in [`Rgb`] clamp and round each
//! channel.
//!
//! ```
//! # use huemix::color::{hex_to_rgb, lab_to_rgb, rgb_to_lab, Rgb};
//! let steel = Rgb::new(76, 117, 172);
//! let lab = rgb_to_lab(steel);
//! assert_eq!(lab_to_rgb(lab), steel);
//! assert_eq!(hex_to_rgb("#4c75ac"), Some(steel));
//! assert_eq!(steel.to_string(), "#4c75ac");
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    from_24bit, hsl_to_srgb, lab_to_srgb, lab_to_xyz as lab_to_xyz_coordinates, srgb_to_hsl,
    srgb_to_lab, srgb_to_xyz, to_24bit, to_eq_coordinates,
    xyz_to_lab as xyz_to_lab_coordinates, xyz_to_srgb,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit sRGB color.
///
/// Rust code creates a new color with [`Rgb::new`] or by parsing hashed
/// hexadecimal notation and accesses its channels through [`Rgb::r`],
/// [`Rgb::g`], [`Rgb::b`], by indexing, or with `AsRef<[u8; 3]>`.
///
/// ```
/// # use huemix::color::Rgb;
/// let orange: Rgb = "#ffa500".parse().unwrap();
/// assert_eq!(orange, Rgb::new(255, 165, 0));
/// assert_eq!(orange[1], 165);
/// assert_eq!(orange.as_ref(), &[255_u8, 165, 0]);
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "huemix")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new 24-bit color from its channels.
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a color in hexadecimal notation. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Access the red channel.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Access the green channel.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Access the blue channel.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Rgb {
    /// Create a new 24-bit color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access the red channel.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Access the green channel.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Access the blue channel.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }
}

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// White.
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Get the sum of all three channels.
    ///
    /// The sum serves as a crude measure of brightness when comparing a mix
    /// with its target.
    pub fn brightness(&self) -> u16 {
        self.0.iter().map(|c| *c as u16).sum()
    }

    /// Get the unit-range floating point coordinates.
    #[inline]
    pub(crate) fn to_unit(self) -> [Float; 3] {
        let [r, g, b] = self.0;
        from_24bit(r, g, b)
    }

    /// Convert this color to XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(srgb_to_xyz(&self.to_unit()))
    }

    /// Convert this color to CIELAB.
    pub fn to_lab(&self) -> Lab {
        Lab::from(srgb_to_lab(&self.to_unit()))
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from(srgb_to_hsl(&self.to_unit()))
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl core::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a color in hexadecimal notation.
    ///
    /// The string must consist of exactly six hexadecimal digits, optionally
    /// prefixed by `#`. Digits may be upper or lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorFormatError::UnexpectedCharacters);
        } else if !digits.as_bytes().iter().all(u8::is_ascii_hexdigit) {
            return Err(ColorFormatError::MalformedHex);
        }

        fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
            let t = s
                .get(2 * index..2 * (index + 1))
                .ok_or(ColorFormatError::UnexpectedCharacters)?;
            u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
        }

        Ok(Self([
            parse_coordinate(digits, 0)?,
            parse_coordinate(digits, 1)?,
            parse_coordinate(digits, 2)?,
        ]))
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================

macro_rules! coordinate_struct_impls {
    ($name:ident, $c1:ident, $c2:ident, $c3:ident) => {
        impl $name {
            /// Get the three coordinates as an array.
            pub const fn coordinates(&self) -> [Float; 3] {
                [self.$c1, self.$c2, self.$c3]
            }
        }

        impl From<[Float; 3]> for $name {
            fn from(value: [Float; 3]) -> Self {
                let [$c1, $c2, $c3] = value;
                Self { $c1, $c2, $c3 }
            }
        }

        impl From<$name> for [Float; 3] {
            fn from(value: $name) -> Self {
                value.coordinates()
            }
        }

        impl PartialEq for $name {
            /// Compare coordinates after rounding them to a fixed precision.
            fn eq(&self, other: &Self) -> bool {
                to_eq_coordinates(&self.coordinates()) == to_eq_coordinates(&other.coordinates())
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                to_eq_coordinates(&self.coordinates()).hash(state);
            }
        }
    };
}

/// A color's CIE 1931 tristimulus values.
///
/// Values are relative to the D65 white point and scaled so that the
/// luminance `y` of white is 100.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

coordinate_struct_impls!(Xyz, x, y, z);

impl Xyz {
    /// Create new tristimulus values.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Convert to CIELAB.
    pub fn to_lab(&self) -> Lab {
        Lab::from(xyz_to_lab_coordinates(&self.coordinates()))
    }

    /// Convert to 24-bit sRGB, clamping out-of-gamut channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(to_24bit(&xyz_to_srgb(&self.coordinates())))
    }
}

/// A CIELAB color.
///
/// Lightness `l` ranges `0..=100`, whereas the opponent axes `a` and `b` are
/// unbounded, though 24-bit colors keep them well within `-128..=128`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

coordinate_struct_impls!(Lab, l, a, b);

impl Lab {
    /// Create a new CIELAB color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    /// Convert to XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(lab_to_xyz_coordinates(&self.coordinates()))
    }

    /// Convert to 24-bit sRGB, clamping out-of-gamut channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(to_24bit(&lab_to_srgb(&self.coordinates())))
    }
}

/// An HSL color.
///
/// Hue `h` is in degrees `0..360`, saturation `s` and lightness `l` in percent
/// `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

coordinate_struct_impls!(Hsl, h, s, l);

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    /// Convert to 24-bit sRGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(to_24bit(&hsl_to_srgb(&self.coordinates())))
    }
}

// ====================================================================================================================

/// Convert a 24-bit color to XYZ.
pub fn rgb_to_xyz(color: Rgb) -> Xyz {
    color.to_xyz()
}

/// Convert XYZ to CIELAB.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    xyz.to_lab()
}

/// Convert CIELAB to XYZ.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    lab.to_xyz()
}

/// Convert XYZ to a 24-bit color, clamping out-of-gamut channels.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    xyz.to_rgb()
}

/// Convert a 24-bit color to CIELAB.
pub fn rgb_to_lab(color: Rgb) -> Lab {
    color.to_lab()
}

/// Convert CIELAB to a 24-bit color, clamping out-of-gamut channels.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    lab.to_rgb()
}

/// Convert a 24-bit color to HSL.
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    color.to_hsl()
}

/// Convert HSL to a 24-bit color.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

/// Format a 24-bit color in hashed hexadecimal notation.
pub fn rgb_to_hex(color: Rgb) -> String {
    color.to_string()
}

/// Parse a 24-bit color in hexadecimal notation.
///
/// This function returns `None` for anything but six hexadecimal digits with
/// an optional leading `#`. Use [`Rgb as
/// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb) to learn what went wrong.
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    s.parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_same_channels;
    use crate::error::ColorFormatError;

    #[test]
    fn test_hex() {
        assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("#4C75aC"), Some(Rgb::new(76, 117, 172)));
        assert_eq!(hex_to_rgb("notacolor"), None);
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("##ff0000"), None);

        assert_eq!(
            "#ff00".parse::<Rgb>(),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            "#+f0000".parse::<Rgb>(),
            Err(ColorFormatError::MalformedHex)
        );
        assert_eq!(
            "#💩00".parse::<Rgb>(),
            Err(ColorFormatError::MalformedHex)
        );

        assert_eq!(rgb_to_hex(Rgb::new(0, 10, 255)), "#000aff");
        assert_eq!(format!("{}", Rgb::new(255, 165, 0)), "#ffa500");
    }

    #[test]
    fn test_lab_round_trip() {
        // Sample the cube with a stride that hits both ends of every channel.
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let color = Rgb::new(r, g, b);
                    assert_same_channels!(lab_to_rgb(rgb_to_lab(color)), color);
                    assert_same_channels!(xyz_to_rgb(rgb_to_xyz(color)), color);
                }
            }
        }
    }

    #[test]
    fn test_hsl_round_trip() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let color = Rgb::new(r, g, b);
                    assert_same_channels!(hsl_to_rgb(rgb_to_hsl(color)), color);
                }
            }
        }
    }

    #[test]
    fn test_composition() {
        let color = Rgb::new(24, 103, 155);
        assert_eq!(rgb_to_lab(color), xyz_to_lab(rgb_to_xyz(color)));
        let xyz = lab_to_xyz(rgb_to_lab(color));
        assert_same_channels!(xyz.to_rgb(), color);
        assert_eq!(Rgb::WHITE.brightness(), 765);
        assert_eq!(Rgb::BLACK.to_hsl(), Hsl::new(0.0, 0.0, 0.0));
    }
}
