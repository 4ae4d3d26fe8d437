//! Mixing pigments.
//!
//! A [`MixSpec`] records how much of each palette pigment as well as of white
//! and black goes into a mix. [`mix_colors`] turns that recipe into a color
//! with a simple, additive model:
//!
//!  1. Starting from black, each primary contributes its color scaled by its
//!     percentage.
//!  2. The distractor contributes its color scaled by its percentage and then
//!     by a fifth.
//!  3. White, if present, adds the same amount to all channels, which are then
//!     capped at 255.
//!  4. Black, if present, scales all channels down.
//!
//! Channels are clamped and rounded only once, at the very end. Since the
//! primaries alone may exceed 255, black can darken a mix that is brighter
//! than displayable.
//!
//! ```
//! # use huemix::mix::{mix_colors, MixSpec, PaletteEntry};
//! # use huemix::pigment::Pigment;
//! # use huemix::color::Rgb;
//! let spec = MixSpec::new(
//!     PaletteEntry::new(Pigment::Red, 100),
//!     PaletteEntry::new(Pigment::Blue, 100),
//!     PaletteEntry::new(Pigment::Green, 0),
//! )
//! .with_black(50);
//! assert_eq!(mix_colors(&spec), Rgb::new(128, 0, 128));
//! ```

use crate::color::Rgb;
use crate::core::FloatExt;
use crate::pigment::Pigment;
use crate::Float;

/// The weight of the distractor relative to the primaries.
const DISTRACTOR_WEIGHT: Float = 0.2;

/// Clamp a percentage to `0..=100`.
#[inline]
const fn clamp_percentage(percentage: u8) -> u8 {
    if percentage > 100 {
        100
    } else {
        percentage
    }
}

/// One of the three palette slots of a challenge.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary1,
    Primary2,
    Distractor,
}

impl Slot {
    /// All slots in canonical order.
    pub const ALL: [Slot; 3] = [Slot::Primary1, Slot::Primary2, Slot::Distractor];
}

/// A pigment together with the percentage used of it.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawPaletteEntry")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pigment: Pigment,
    percentage: u8,
}

impl PaletteEntry {
    /// Create a new palette entry. The percentage is clamped to `0..=100`.
    pub const fn new(pigment: Pigment, percentage: u8) -> Self {
        Self {
            pigment,
            percentage: clamp_percentage(percentage),
        }
    }

    /// Get the pigment.
    pub const fn pigment(&self) -> Pigment {
        self.pigment
    }

    /// Get the percentage.
    pub const fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Update the percentage, clamping it to `0..=100`.
    pub fn set_percentage(&mut self, percentage: u8) {
        self.percentage = clamp_percentage(percentage);
    }

    /// Get a copy of this entry with the given percentage.
    #[must_use]
    pub const fn with_percentage(&self, percentage: u8) -> Self {
        Self::new(self.pigment, percentage)
    }

    /// Get the pigment's color.
    pub const fn rgb(&self) -> Rgb {
        self.pigment.rgb()
    }

    /// Get the pigment's label.
    pub const fn label(&self) -> &'static str {
        self.pigment.label()
    }
}

/// A recipe for mixing a color.
///
/// The primaries' percentages need not add up to 100. All percentages,
/// including white and black, are clamped to `0..=100`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawMixSpec")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MixSpec {
    pub primary1: PaletteEntry,
    pub primary2: PaletteEntry,
    pub distractor: PaletteEntry,
    white: u8,
    black: u8,
}

impl MixSpec {
    /// Create a new mix specification without white or black.
    pub const fn new(primary1: PaletteEntry, primary2: PaletteEntry, distractor: PaletteEntry) -> Self {
        Self {
            primary1,
            primary2,
            distractor,
            white: 0,
            black: 0,
        }
    }

    /// Get the entry for the given slot.
    pub const fn entry(&self, slot: Slot) -> &PaletteEntry {
        match slot {
            Slot::Primary1 => &self.primary1,
            Slot::Primary2 => &self.primary2,
            Slot::Distractor => &self.distractor,
        }
    }

    /// Get the mutable entry for the given slot.
    pub fn entry_mut(&mut self, slot: Slot) -> &mut PaletteEntry {
        match slot {
            Slot::Primary1 => &mut self.primary1,
            Slot::Primary2 => &mut self.primary2,
            Slot::Distractor => &mut self.distractor,
        }
    }

    /// Get the percentage of white.
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Get the percentage of black.
    pub const fn black(&self) -> u8 {
        self.black
    }

    /// Update the percentage of white, clamping it to `0..=100`.
    pub fn set_white(&mut self, white: u8) {
        self.white = clamp_percentage(white);
    }

    /// Update the percentage of black, clamping it to `0..=100`.
    pub fn set_black(&mut self, black: u8) {
        self.black = clamp_percentage(black);
    }

    /// Get a copy with the given percentage of white.
    #[must_use]
    pub const fn with_white(mut self, white: u8) -> Self {
        self.white = clamp_percentage(white);
        self
    }

    /// Get a copy with the given percentage of black.
    #[must_use]
    pub const fn with_black(mut self, black: u8) -> Self {
        self.black = clamp_percentage(black);
        self
    }

    /// Zero out all percentages while keeping the pigments.
    pub fn clear(&mut self) {
        for slot in Slot::ALL {
            self.entry_mut(slot).set_percentage(0);
        }
        self.white = 0;
        self.black = 0;
    }
}

/// The deserialized form of a palette entry, before clamping.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPaletteEntry {
    pigment: Pigment,
    percentage: u8,
}

#[cfg(feature = "serde")]
impl From<RawPaletteEntry> for PaletteEntry {
    fn from(value: RawPaletteEntry) -> Self {
        Self::new(value.pigment, value.percentage)
    }
}

/// The deserialized form of a mix specification, before clamping.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMixSpec {
    primary1: PaletteEntry,
    primary2: PaletteEntry,
    distractor: PaletteEntry,
    white: u8,
    black: u8,
}

#[cfg(feature = "serde")]
impl From<RawMixSpec> for MixSpec {
    fn from(value: RawMixSpec) -> Self {
        Self::new(value.primary1, value.primary2, value.distractor)
            .with_white(value.white)
            .with_black(value.black)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the color resulting from the given mix specification.
pub fn mix_colors(spec: &MixSpec) -> Rgb {
    let [r, g, b] = mix_coordinates(spec);
    Rgb::new(r.to_channel(), g.to_channel(), b.to_channel())
}

/// Compute the unclamped, unrounded channels for a mix.
fn mix_coordinates(spec: &MixSpec) -> [Float; 3] {
    let mut channels: [Float; 3] = [0.0; 3];

    let contributions = [
        (&spec.primary1, 1.0),
        (&spec.primary2, 1.0),
        (&spec.distractor, DISTRACTOR_WEIGHT),
    ];
    for (entry, weight) in contributions {
        if entry.percentage > 0 {
            let factor = entry.percentage as Float / 100.0 * weight;
            let color = entry.rgb();
            for (channel, value) in channels.iter_mut().zip(color.as_ref()) {
                *channel += *value as Float * factor;
            }
        }
    }

    if spec.white > 0 {
        let amount = 255.0 * (spec.white as Float / 100.0);
        for channel in channels.iter_mut() {
            *channel = (*channel + amount).min(255.0);
        }
    }

    if spec.black > 0 {
        let factor = 1.0 - spec.black as Float / 100.0;
        for channel in channels.iter_mut() {
            *channel *= factor;
        }
    }

    channels
}

#[cfg(test)]
mod test {
    use super::{mix_colors, MixSpec, PaletteEntry, Slot};
    use crate::color::Rgb;
    use crate::pigment::Pigment;

    fn spec(p1: Pigment, c1: u8, p2: Pigment, c2: u8, d: Pigment, cd: u8) -> MixSpec {
        MixSpec::new(
            PaletteEntry::new(p1, c1),
            PaletteEntry::new(p2, c2),
            PaletteEntry::new(d, cd),
        )
    }

    #[test]
    fn test_single_pigments() {
        for pigment in Pigment::HUES {
            let mix = spec(pigment, 100, Pigment::Yellow, 0, Pigment::Blue, 0);
            assert_eq!(mix_colors(&mix), pigment.rgb());
        }

        let orange = spec(Pigment::Orange, 100, Pigment::Yellow, 0, Pigment::Blue, 0);
        assert_eq!(mix_colors(&orange), Rgb::new(255, 165, 0));
        assert_eq!(
            mix_colors(&spec(Pigment::Red, 0, Pigment::Blue, 0, Pigment::Green, 0)),
            Rgb::BLACK
        );
    }

    #[test]
    fn test_shades() {
        let base = spec(Pigment::Red, 70, Pigment::Blue, 40, Pigment::Green, 30);
        assert_eq!(mix_colors(&base.with_black(100)), Rgb::BLACK);
        assert_eq!(mix_colors(&base.with_white(100)), Rgb::WHITE);

        // White applies before black, so both at 50% give mid gray.
        let gray = base.with_white(100).with_black(50);
        assert_eq!(mix_colors(&gray), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_additive() {
        let mix = spec(Pigment::Red, 50, Pigment::Green, 50, Pigment::Blue, 0);
        assert_eq!(mix_colors(&mix), Rgb::new(128, 128, 0));

        // The distractor counts for a fifth: 255 * 0.5 * 0.2 = 25.5.
        let mix = spec(Pigment::Red, 0, Pigment::Green, 0, Pigment::Blue, 50);
        assert_eq!(mix_colors(&mix), Rgb::new(0, 0, 26));

        // Primaries may overflow before black is applied.
        let mix = spec(Pigment::Yellow, 100, Pigment::Orange, 100, Pigment::Blue, 0);
        assert_eq!(mix_colors(&mix), Rgb::new(255, 255, 0));
        assert_eq!(mix_colors(&mix.with_black(50)), Rgb::new(255, 210, 0));
    }

    #[test]
    fn test_clamping() {
        let mut mix = spec(Pigment::Red, 250, Pigment::Green, 0, Pigment::Blue, 0);
        assert_eq!(mix.primary1.percentage(), 100);

        mix.set_white(101);
        mix.set_black(200);
        assert_eq!(mix.white(), 100);
        assert_eq!(mix.black(), 100);

        mix.entry_mut(Slot::Distractor).set_percentage(180);
        assert_eq!(mix.entry(Slot::Distractor).percentage(), 100);

        mix.clear();
        assert_eq!(mix, spec(Pigment::Red, 0, Pigment::Green, 0, Pigment::Blue, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_clamps() -> Result<(), serde_json::Error> {
        let entry: PaletteEntry = serde_json::from_str(r#"{"pigment":"red","percentage":250}"#)?;
        assert_eq!(entry, PaletteEntry::new(Pigment::Red, 100));

        let mix: MixSpec = serde_json::from_str(
            r#"{
                "primary1": {"pigment": "yellow", "percentage": 101},
                "primary2": {"pigment": "orange", "percentage": 40},
                "distractor": {"pigment": "blue", "percentage": 255},
                "white": 200,
                "black": 255
            }"#,
        )?;
        assert_eq!(mix.primary1.percentage(), 100);
        assert_eq!(mix.primary2.percentage(), 40);
        assert_eq!(mix.distractor.percentage(), 100);
        assert_eq!(mix.white(), 100);
        assert_eq!(mix.black(), 100);
        assert_eq!(mix_colors(&mix), Rgb::BLACK);

        let json = serde_json::to_string(&mix)?;
        assert_eq!(serde_json::from_str::<MixSpec>(&json)?, mix);
        Ok(())
    }
}
