use crate::Float;

/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation, and adds the handful of
/// operations the delta E computation performs over and over again.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Raise this number to the seventh power.
    fn pow7(self) -> Self;

    /// Clamp this number to the 8-bit channel range and round it.
    fn to_channel(self) -> u8;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[inline]
    fn pow7(self) -> Self {
        self.powi(7)
    }

    #[inline]
    fn to_channel(self) -> u8 {
        self.clamp(0.0, 255.0).round() as u8
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    #[inline]
    fn pow7(self) -> Self {
        self.powi(7)
    }

    #[inline]
    fn to_channel(self) -> u8 {
        self.clamp(0.0, 255.0).round() as u8
    }
}

/// The seventh power of 25, which appears twice in CIEDE2000.
pub(crate) const TWENTY_FIVE_POW7: Float = 6_103_515_625.0;
