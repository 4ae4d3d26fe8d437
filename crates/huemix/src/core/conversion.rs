use crate::core::FloatExt;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the unit-range color coordinates to 24-bit representation.
///
/// This function scales each coordinate by 255 before clamping it to the range
/// `0x00..=0xff` and rounding it to the nearest integer.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r * 255.0).to_channel(),
        (g * 255.0).to_channel(),
        (b * 255.0).to_channel(),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
///
/// Out-of-gamut inputs produce out-of-range outputs, which are clamped only
/// when converting to 24-bit coordinates.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.0031308 {
            value * 12.92
        } else {
            value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

// The four-digit sRGB matrices, with XYZ scaled to 0..=100.

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 41.24, 35.76, 18.05 ],
    [ 21.26, 71.52,  7.22 ],
    [  1.93, 11.92, 95.05 ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
#[inline]
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  0.032406, -0.015372, -0.004986 ],
    [ -0.009689,  0.018758,  0.000415 ],
    [  0.000557, -0.002040,  0.010570 ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
#[inline]
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 reference white with luminance 100.
const D65: [Float; 3] = [95.047, 100.0, 108.883];

const EPSILON: Float = 0.008856;
const KAPPA: Float = 7.787;
const OFFSET: Float = 16.0 / 116.0;

/// Convert coordinates for XYZ to CIELAB. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn xyz_to_cielab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, OFFSET)
        }
    }

    let x = f(value[0] / D65[0]);
    let y = f(value[1] / D65[1]);
    let z = f(value[2] / D65[2]);

    // Black would otherwise end up with a lightness just below zero.
    let L = (116.0 as Float).mul_add(y, -16.0).max(0.0);
    [L, 500.0 * (x - y), 200.0 * (y - z)]
}

/// Convert coordinates for CIELAB to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn cielab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f_inverse(t: Float) -> Float {
        let cubed = t * t * t;
        if cubed > EPSILON {
            cubed
        } else {
            (t - OFFSET) / KAPPA
        }
    }

    let [L, a, b] = *value;
    let y = (L + 16.0) / 116.0;
    let x = a / 500.0 + y;
    let z = y - b / 200.0;

    [
        f_inverse(x) * D65[0],
        f_inverse(y) * D65[1],
        f_inverse(z) * D65[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert unit-range sRGB coordinates to XYZ. This is a two-hop conversion.
#[inline]
pub(crate) fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert XYZ coordinates to unit-range sRGB. This is a two-hop conversion.
#[inline]
pub(crate) fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_rgb_to_rgb(&linear_srgb)
}

/// Convert XYZ coordinates to CIELAB. This is a one-hop conversion.
#[inline]
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_cielab(value)
}

/// Convert CIELAB coordinates to XYZ. This is a one-hop conversion.
#[inline]
pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    cielab_to_xyz(value)
}

/// Convert unit-range sRGB coordinates to CIELAB. This is a three-hop
/// conversion.
#[inline]
pub(crate) fn srgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_cielab(&srgb_to_xyz(value))
}

/// Convert CIELAB coordinates to unit-range sRGB. This is a three-hop
/// conversion.
#[inline]
pub(crate) fn lab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_srgb(&cielab_to_xyz(value))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert unit-range sRGB coordinates to HSL with hue in degrees and
/// saturation as well as lightness in percent.
///
/// Achromatic colors have zero hue and zero saturation.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l * 100.0];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Ties between channels resolve in favor of red, then green.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h / 6.0 * 360.0, s * 100.0, l * 100.0]
}

/// Convert HSL coordinates with hue in degrees and saturation as well as
/// lightness in percent to unit-range sRGB.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let h = value[0] / 360.0;
    let s = value[1] / 100.0;
    let l = value[2] / 100.0;

    if s == 0.0 {
        return [l, l, l];
    }

    fn hue_to_rgb(p: Float, q: Float, mut t: Float) -> Float {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            (q - p).mul_add(6.0 * t, p)
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
        } else {
            p
        }
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = (2.0 as Float).mul_add(l, -q);

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_within;

    #[test]
    fn test_white_and_black() {
        let white = srgb_to_xyz(&[1.0, 1.0, 1.0]);
        assert_within!(white[0], 95.05, 1e-9);
        assert_within!(white[1], 100.0, 1e-9);
        assert_within!(white[2], 108.9, 1e-9);

        let lab = srgb_to_lab(&[1.0, 1.0, 1.0]);
        assert_within!(lab[0], 100.0, 1e-2);
        assert_within!(lab[1], 0.0, 2e-2);
        assert_within!(lab[2], 0.0, 2e-2);

        assert_eq!(srgb_to_lab(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(to_24bit(&lab_to_srgb(&[0.0, 0.0, 0.0])), [0, 0, 0]);
    }

    #[test]
    fn test_dark_lightness() {
        for level in 0..=16 {
            for [r, g, b] in [[level, 0, 0], [0, level, 0], [0, 0, level], [level, level, level]] {
                let lab = srgb_to_lab(&from_24bit(r, g, b));
                assert!(lab[0] >= 0.0, "#{:02x}{:02x}{:02x} has lightness {}", r, g, b, lab[0]);
            }
        }

        assert_eq!(srgb_to_lab(&from_24bit(0, 0, 0))[0], 0.0);
    }

    #[test]
    fn test_primaries() {
        // Red, green, and blue under the four-digit sRGB matrix.
        let red = srgb_to_lab(&from_24bit(255, 0, 0));
        assert_within!(red[0], 53.2329, 1e-3);
        assert_within!(red[1], 80.1093, 1e-3);
        assert_within!(red[2], 67.2201, 1e-3);

        let green = srgb_to_lab(&from_24bit(0, 255, 0));
        assert_within!(green[0], 87.7370, 1e-3);
        assert_within!(green[1], -86.1846, 1e-3);
        assert_within!(green[2], 83.1812, 1e-3);

        let blue = srgb_to_lab(&from_24bit(0, 0, 255));
        assert_within!(blue[0], 32.3026, 1e-3);
        assert_within!(blue[1], 79.1967, 1e-3);
        assert_within!(blue[2], -107.8637, 1e-3);
    }

    #[test]
    fn test_linear_branch() {
        // Coordinates at or below the threshold stay on the linear segment.
        let dark = rgb_to_linear_rgb(&[0.04, 0.0, 0.02]);
        assert_within!(dark[0], 0.04 / 12.92, 1e-12);
        assert_within!(dark[2], 0.02 / 12.92, 1e-12);

        let back = linear_rgb_to_rgb(&dark);
        assert_within!(back[0], 0.04, 1e-9);
        assert_within!(back[2], 0.02, 1e-9);

        // Very dark Lab lightness exercises the inverse linear floor.
        let xyz = cielab_to_xyz(&[5.0, 0.0, 0.0]);
        let lab = xyz_to_cielab(&xyz);
        assert_within!(lab[0], 5.0, 1e-9);
    }

    #[test]
    fn test_hsl() {
        assert_eq!(srgb_to_hsl(&[0.5, 0.5, 0.5]), [0.0, 0.0, 50.0]);

        let [h, s, l] = srgb_to_hsl(&from_24bit(76, 117, 172));
        assert_within!(h, 214.375, 1e-9);
        assert_within!(s, 38.7096774, 1e-6);
        assert_within!(l, 48.6274510, 1e-6);

        // Pure red sits at hue zero, pure magenta just shy of 360.
        assert_eq!(srgb_to_hsl(&[1.0, 0.0, 0.0])[0], 0.0);
        assert_within!(srgb_to_hsl(&[1.0, 0.0, 0.5])[0], 330.0, 1e-9);

        assert_eq!(to_24bit(&hsl_to_srgb(&[120.0, 100.0, 50.0])), [0, 255, 0]);
        assert_eq!(to_24bit(&hsl_to_srgb(&[0.0, 0.0, 100.0])), [255, 255, 255]);
    }
}
