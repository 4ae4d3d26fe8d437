//! Telling players how they are doing.
//!
//! This module turns a scored attempt into words: [`Feedback`] rates the delta
//! E, [`color_hints`] suggests channel and shade adjustments, and
//! [`mixing_tips`] explains what the two primaries combine into.

use crate::color::Rgb;
use crate::pigment::Pigment;
use crate::Float;

/// The channel difference beyond which a hint suggests an adjustment.
const CHANNEL_THRESHOLD: i16 = 30;

/// The brightness difference beyond which a hint suggests white or black.
const BRIGHTNESS_THRESHOLD: i16 = 100;

/// A color channel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in RGB order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Get the channel's lower-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// A suggestion for improving a mix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hint {
    /// The mix lacks the channel.
    AddMore(Channel),
    /// The mix has too much of the channel.
    Reduce(Channel),
    /// The mix is too dark.
    AddWhite,
    /// The mix is too bright.
    AddBlack,
    /// No adjustment stands out.
    VeryClose,
}

impl core::fmt::Display for Hint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Hint::AddMore(channel) => write!(f, "Add more {}", channel.name()),
            Hint::Reduce(channel) => write!(f, "Reduce {}", channel.name()),
            Hint::AddWhite => f.write_str("Add more white"),
            Hint::AddBlack => f.write_str("Add more black"),
            Hint::VeryClose => f.write_str("You're very close!"),
        }
    }
}

/// Suggest adjustments for the mixed color to better match the target.
///
/// For each channel differing by more than 30, this function suggests adding
/// or reducing that channel, in RGB order. It then suggests white or black if
/// the sums of the channels differ by more than 100. Without any suggestions,
/// the result is [`Hint::VeryClose`] alone.
///
/// ```
/// # use huemix::color::Rgb;
/// # use huemix::feedback::{color_hints, Channel, Hint};
/// let hints = color_hints(Rgb::new(200, 100, 50), Rgb::new(100, 100, 100));
/// assert_eq!(hints, vec![Hint::AddMore(Channel::Red), Hint::Reduce(Channel::Blue)]);
/// ```
pub fn color_hints(target: Rgb, mixed: Rgb) -> Vec<Hint> {
    let mut hints = Vec::new();

    for (index, channel) in Channel::ALL.into_iter().enumerate() {
        let wanted = target[index] as i16;
        let actual = mixed[index] as i16;

        if actual < wanted - CHANNEL_THRESHOLD {
            hints.push(Hint::AddMore(channel));
        }
        if actual > wanted + CHANNEL_THRESHOLD {
            hints.push(Hint::Reduce(channel));
        }
    }

    let wanted = target.brightness() as i16;
    let actual = mixed.brightness() as i16;
    if wanted > actual + BRIGHTNESS_THRESHOLD {
        hints.push(Hint::AddWhite);
    } else if wanted < actual - BRIGHTNESS_THRESHOLD {
        hints.push(Hint::AddBlack);
    }

    if hints.is_empty() {
        hints.push(Hint::VeryClose);
    }
    hints
}

// --------------------------------------------------------------------------------------------------------------------

/// A rating of how closely a mix matches its target.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Delta E below 1, i.e., imperceptible.
    Perfect,
    /// Delta E below 2, i.e., perceptible only upon close observation.
    Excellent,
    /// Delta E below 5.
    VeryGood,
    /// Delta E below 10.
    Good,
    /// Delta E below 20.
    NotBad,
    /// Everything else.
    KeepMixing,
}

impl Feedback {
    /// Rate the given delta E.
    pub fn from_delta_e(delta_e: Float) -> Self {
        if delta_e < 1.0 {
            Self::Perfect
        } else if delta_e < 2.0 {
            Self::Excellent
        } else if delta_e < 5.0 {
            Self::VeryGood
        } else if delta_e < 10.0 {
            Self::Good
        } else if delta_e < 20.0 {
            Self::NotBad
        } else {
            Self::KeepMixing
        }
    }

    /// Get the message for this rating.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect match! 🎉",
            Self::Excellent => "Excellent! Nearly perfect! 👏",
            Self::VeryGood => "Very good! Very close! 👍",
            Self::Good => "Good job! Getting closer! 💪",
            Self::NotBad => "Not bad! Keep trying! 🎨",
            Self::KeepMixing => "Keep mixing! You can do it! 🎨",
        }
    }
}

impl From<Float> for Feedback {
    fn from(value: Float) -> Self {
        Self::from_delta_e(value)
    }
}

impl core::fmt::Display for Feedback {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

// --------------------------------------------------------------------------------------------------------------------

const SHADING_TIPS: [&str; 3] = [
    "Use white to lighten the color",
    "Use black to darken the color",
    "Start with small amounts and build up",
];

/// Get tips for mixing the two pigments.
///
/// The first tip depends on the pair, in either order. The remaining three
/// tips are always the same.
pub fn mixing_tips(pigment1: Pigment, pigment2: Pigment) -> Vec<&'static str> {
    use Pigment::*;

    let pair = match (pigment1, pigment2) {
        (Red, Blue) | (Blue, Red) => "Red + Blue = Purple",
        (Red, Yellow) | (Yellow, Red) => "Red + Yellow = Orange",
        (Blue, Yellow) | (Yellow, Blue) => "Blue + Yellow = Green",
        (Red, Green) | (Green, Red) => "Red + Green = Brown",
        (Blue, Orange) | (Orange, Blue) => "Blue + Orange = Brown",
        _ => "Mix these colors to create new hues",
    };

    let mut tips = Vec::with_capacity(1 + SHADING_TIPS.len());
    tips.push(pair);
    tips.extend_from_slice(&SHADING_TIPS);
    tips
}
