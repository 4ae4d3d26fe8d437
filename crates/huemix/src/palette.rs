//! Choosing target colors and the pigments for matching them.
//!
//! Each challenge offers three pigments: two primaries that can reproduce the
//! target's hue and a distractor that pulls the mix away from it. The palette
//! is determined by the target's HSL hue, using the first matching rule of
//! [`HUE_RULES`]. Hues between the rules fall back on perceptual distance to
//! the six hue pigments.
//!
//! Randomness only affects presentation. It decides which of the two
//! primaries occupies the first slot and in which order the three slots are
//! displayed, but never which pigment plays the distractor.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::Rgb;
use crate::core::delta_e_2000;
use crate::mix::{MixSpec, PaletteEntry, Slot};
use crate::pigment::Pigment;
use crate::Float;

/// A rule mapping a range of hues to a palette.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HueRule {
    /// A short name for diagnostics.
    pub name: &'static str,
    /// The smallest hue covered by this rule, in degrees.
    pub low: Float,
    /// The largest hue covered by this rule, in degrees.
    pub high: Float,
    /// The two pigments that reproduce hues in this range.
    pub primaries: [Pigment; 2],
    /// The pigment that works against them.
    pub distractor: Pigment,
}

impl HueRule {
    /// Determine whether this rule covers the given hue. Both bounds are
    /// inclusive.
    pub fn covers(&self, hue: Float) -> bool {
        self.low <= hue && hue <= self.high
    }
}

/// The palette rules, in order of precedence.
///
/// Several ranges share a boundary and the magenta range overlaps the purple
/// range at 300°. The first matching rule wins.
#[rustfmt::skip]
pub const HUE_RULES: [HueRule; 6] = [
    HueRule { name: "blue",         low: 210.0, high: 240.0, primaries: [Pigment::Blue, Pigment::Green],   distractor: Pigment::Red },
    HueRule { name: "magenta",      low: 300.0, high: 360.0, primaries: [Pigment::Red, Pigment::Blue],     distractor: Pigment::Green },
    HueRule { name: "teal",         low: 150.0, high: 210.0, primaries: [Pigment::Blue, Pigment::Green],   distractor: Pigment::Red },
    HueRule { name: "purple",       low: 240.0, high: 300.0, primaries: [Pigment::Red, Pigment::Blue],     distractor: Pigment::Yellow },
    HueRule { name: "red-orange",   low:   0.0, high:  60.0, primaries: [Pigment::Red, Pigment::Orange],   distractor: Pigment::Blue },
    HueRule { name: "yellow-green", low:  60.0, high: 120.0, primaries: [Pigment::Yellow, Pigment::Green], distractor: Pigment::Purple },
];

/// Find the first rule covering the given hue.
pub fn find_hue_rule(hue: Float) -> Option<&'static HueRule> {
    HUE_RULES.iter().find(|rule| rule.covers(hue))
}

// --------------------------------------------------------------------------------------------------------------------

/// The three pigments available during a challenge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    primary1: Pigment,
    primary2: Pigment,
    distractor: Pigment,
    order: [Slot; 3],
}

impl Palette {
    /// Create a new palette with canonical display order.
    pub const fn new(primary1: Pigment, primary2: Pigment, distractor: Pigment) -> Self {
        Self {
            primary1,
            primary2,
            distractor,
            order: Slot::ALL,
        }
    }

    /// Get the first primary.
    pub const fn primary1(&self) -> Pigment {
        self.primary1
    }

    /// Get the second primary.
    pub const fn primary2(&self) -> Pigment {
        self.primary2
    }

    /// Get the distractor.
    pub const fn distractor(&self) -> Pigment {
        self.distractor
    }

    /// Get the pigment for the given slot.
    pub const fn pigment(&self, slot: Slot) -> Pigment {
        match slot {
            Slot::Primary1 => self.primary1,
            Slot::Primary2 => self.primary2,
            Slot::Distractor => self.distractor,
        }
    }

    /// Get the order in which to display the slots.
    pub const fn display_order(&self) -> [Slot; 3] {
        self.order
    }

    /// Get the slots and their pigments in display order.
    pub fn displayed(&self) -> [(Slot, Pigment); 3] {
        self.order.map(|slot| (slot, self.pigment(slot)))
    }

    /// Create a mix specification with this palette's pigments and all
    /// percentages zero.
    pub const fn to_mix_spec(&self) -> MixSpec {
        MixSpec::new(
            PaletteEntry::new(self.primary1, 0),
            PaletteEntry::new(self.primary2, 0),
            PaletteEntry::new(self.distractor, 0),
        )
    }
}

/// Generate the palette for the given target color.
///
/// The pigments depend on the target only. The random number generator
/// decides which primary is first and the display order.
///
/// ```
/// # use huemix::color::Rgb;
/// # use huemix::palette::generate_color_palette;
/// # use huemix::pigment::Pigment;
/// let palette = generate_color_palette(Rgb::new(76, 117, 172), &mut rand::rng());
/// assert_eq!(palette.distractor(), Pigment::Red);
/// ```
pub fn generate_color_palette<R: Rng + ?Sized>(target: Rgb, rng: &mut R) -> Palette {
    let hue = target.to_hsl().h;

    let (mut primaries, distractor) = find_hue_rule(hue).map_or_else(
        || {
            let (primaries, distractor) = nearest_pigments(target);
            debug!(
                "target {} with hue {:.1}° uses nearest pigments {} and {} with distractor {}",
                target, hue, primaries[0], primaries[1], distractor
            );
            (primaries, distractor)
        },
        |rule| {
            debug!("target {} with hue {:.1}° uses {} palette", target, hue, rule.name);
            (rule.primaries, rule.distractor)
        },
    );

    if rng.random_bool(0.5) {
        primaries.swap(0, 1);
    }
    let mut order = Slot::ALL;
    order.shuffle(rng);

    Palette {
        primary1: primaries[0],
        primary2: primaries[1],
        distractor,
        order,
    }
}

/// Rank the hue pigments by perceptual distance from the target, returning the
/// two nearest and the farthest.
fn nearest_pigments(target: Rgb) -> ([Pigment; 2], Pigment) {
    let lab = target.to_lab().coordinates();
    let mut ranking = Pigment::HUES.map(|pigment| {
        let distance = delta_e_2000(&lab, &pigment.rgb().to_lab().coordinates());
        (pigment, distance)
    });
    ranking.sort_by(|(_, d1), (_, d2)| d1.total_cmp(d2));

    ([ranking[0].0, ranking[1].0], ranking[5].0)
}

/// Generate a random target color with independent, uniform channels.
pub fn generate_random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Generate a random target color with the thread-local generator.
///
/// ```
/// # use huemix::palette::random_color;
/// let target = random_color();
/// assert_eq!(target.to_string().len(), 7);
/// ```
pub fn random_color() -> Rgb {
    generate_random_color(&mut rand::rng())
}

/// Generate the palette for the target color with the thread-local generator.
///
/// ```
/// # use huemix::color::Rgb;
/// # use huemix::palette::color_palette;
/// # use huemix::pigment::Pigment;
/// let palette = color_palette(Rgb::new(255, 120, 0));
/// let mut primaries = [palette.primary1(), palette.primary2()];
/// primaries.sort();
/// assert_eq!(primaries, [Pigment::Red, Pigment::Orange]);
/// assert_eq!(palette.distractor(), Pigment::Blue);
/// ```
pub fn color_palette(target: Rgb) -> Palette {
    generate_color_palette(target, &mut rand::rng())
}

#[cfg(test)]
mod test {
    use super::{find_hue_rule, generate_color_palette, generate_random_color, Palette};
    use crate::color::Rgb;
    use crate::mix::Slot;
    use crate::pigment::Pigment::{self, *};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_palette(palette: &Palette, primaries: [Pigment; 2], distractor: Pigment) {
        let mut actual = [palette.primary1(), palette.primary2()];
        actual.sort();
        let mut expected = primaries;
        expected.sort();
        assert_eq!(actual, expected);
        assert_eq!(palette.distractor(), distractor);

        let mut order = palette.display_order();
        order.sort_by_key(|slot| Slot::ALL.iter().position(|s| s == slot));
        assert_eq!(order, Slot::ALL);
    }

    #[test]
    fn test_hue_rules() {
        assert_eq!(find_hue_rule(214.375).map(|r| r.name), Some("blue"));
        assert_eq!(find_hue_rule(210.0).map(|r| r.name), Some("blue"));
        assert_eq!(find_hue_rule(300.0).map(|r| r.name), Some("magenta"));
        assert_eq!(find_hue_rule(240.5).map(|r| r.name), Some("purple"));
        assert_eq!(find_hue_rule(0.0).map(|r| r.name), Some("red-orange"));
        assert_eq!(find_hue_rule(120.0).map(|r| r.name), Some("yellow-green"));
        assert_eq!(find_hue_rule(135.0), None);
        assert_eq!(find_hue_rule(149.9), None);
    }

    #[test]
    fn test_palettes() {
        let mut rng = StdRng::seed_from_u64(42);

        let cases = [
            (Rgb::new(76, 117, 172), [Blue, Green], Red),
            (Rgb::new(0, 0, 255), [Blue, Green], Red),
            (Rgb::new(255, 0, 255), [Red, Blue], Green),
            (Rgb::new(0, 255, 128), [Blue, Green], Red),
            (Rgb::new(128, 0, 255), [Red, Blue], Yellow),
            (Rgb::new(255, 0, 0), [Red, Orange], Blue),
            (Rgb::new(128, 128, 128), [Red, Orange], Blue),
            (Rgb::new(0, 255, 0), [Yellow, Green], Purple),
            (Rgb::new(0, 255, 64), [Green, Yellow], Purple),
            (Rgb::new(40, 200, 90), [Green, Yellow], Purple),
        ];

        for (target, primaries, distractor) in cases {
            for _ in 0..8 {
                let palette = generate_color_palette(target, &mut rng);
                assert_palette(&palette, primaries, distractor);
            }
        }
    }

    #[test]
    fn test_randomized_presentation() {
        let mut rng = StdRng::seed_from_u64(7);
        let target = Rgb::new(76, 117, 172);

        let mut first = Vec::new();
        let mut orders = Vec::new();
        for _ in 0..64 {
            let palette = generate_color_palette(target, &mut rng);
            first.push(palette.primary1());
            orders.push(palette.display_order());
            assert_eq!(palette.pigment(Slot::Distractor), Red);
        }

        assert!(first.contains(&Blue));
        assert!(first.contains(&Green));
        orders.sort_by_key(|order| order.map(|s| s as u8));
        orders.dedup();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_determinism() {
        let target = Rgb::new(200, 30, 160);
        let p1 = generate_color_palette(target, &mut StdRng::seed_from_u64(1));
        let p2 = generate_color_palette(target, &mut StdRng::seed_from_u64(1));
        assert_eq!(p1, p2);

        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..16 {
            assert_eq!(generate_random_color(&mut rng1), generate_random_color(&mut rng2));
        }
    }
}
