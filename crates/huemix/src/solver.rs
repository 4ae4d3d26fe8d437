//! Finding the best achievable mix for a target color.
//!
//! The solver minimizes the CIEDE2000 distance between the target and the mix
//! over the percentages of both primaries, white, and black, with the
//! distractor always left out. It proceeds in three phases:
//!
//!  1. A coarse search visits every pair of primary percentages in increasing
//!     order. For each pair, it sweeps white with no black and then black with
//!     no white.
//!  2. A refinement revisits the primary percentages within a window around
//!     the best candidate, keeping white and black fixed.
//!  3. A second refinement revisits white and black within a window around the
//!     best candidate, keeping the primaries fixed.
//!
//! Every phase only accepts strictly better candidates, so the first minimum
//! in search order wins. With the `parallel` feature, the coarse search fans
//! out across rows of the first primary and merges the rows' minima in row
//! order, which yields exactly the sequential result.
//!
//! The search is exhaustive but not globally optimal, since it never combines
//! white and black during the coarse search.

use log::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::Rgb;
use crate::core::delta_e_2000;
use crate::mix::{mix_colors, MixSpec};
use crate::opt::SolverOptions;
use crate::palette::Palette;
use crate::pigment::Pigment;
use crate::Float;

/// The largest percentage.
const FULL: u8 = 100;

/// A candidate mix, with the distractor at zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Candidate {
    primary1: u8,
    primary2: u8,
    white: u8,
    black: u8,
}

/// The best candidate seen so far.
#[derive(Copy, Clone, Debug)]
struct Best {
    candidate: Option<Candidate>,
    delta_e: Float,
}

impl Best {
    const fn none() -> Self {
        Self {
            candidate: None,
            delta_e: Float::INFINITY,
        }
    }

    /// Offer a candidate, which replaces the current best only if it is
    /// strictly closer.
    #[inline]
    fn offer(&mut self, candidate: Candidate, delta_e: Float) {
        if delta_e < self.delta_e {
            trace!("improved to ΔE {:.4} with {:?}", delta_e, candidate);
            self.candidate = Some(candidate);
            self.delta_e = delta_e;
        }
    }

    /// Merge the best of a later part of the search.
    fn merge(&mut self, other: Best) {
        if let Some(candidate) = other.candidate {
            self.offer(candidate, other.delta_e);
        }
    }
}

/// Compute the bounds of a window around the given percentage.
fn window(center: u8, radius: u8) -> core::ops::RangeInclusive<u8> {
    center.saturating_sub(radius)..=center.saturating_add(radius).min(FULL)
}

// --------------------------------------------------------------------------------------------------------------------

/// The state of one search, with the target's CIELAB coordinates computed
/// once.
struct Search {
    target: [Float; 3],
    base: MixSpec,
}

impl Search {
    fn new(target: Rgb, palette: &Palette) -> Self {
        Self {
            target: target.to_lab().coordinates(),
            base: palette.to_mix_spec(),
        }
    }

    /// Turn the candidate into a mix specification.
    fn spec(&self, candidate: Candidate) -> MixSpec {
        let mut spec = self.base;
        spec.primary1.set_percentage(candidate.primary1);
        spec.primary2.set_percentage(candidate.primary2);
        spec.distractor.set_percentage(0);
        spec.set_white(candidate.white);
        spec.set_black(candidate.black);
        spec
    }

    /// Offer the candidate to the best so far.
    #[inline]
    fn evaluate(&self, best: &mut Best, candidate: Candidate) {
        let mixed = mix_colors(&self.spec(candidate));
        let delta_e = delta_e_2000(&self.target, &mixed.to_lab().coordinates());
        best.offer(candidate, delta_e);
    }

    /// Search all second primaries and shades for one first primary.
    fn search_row(&self, primary1: u8, options: &SolverOptions) -> Best {
        let mut best = Best::none();

        for primary2 in 0..=FULL {
            for white in 0..=options.max_white() {
                let candidate = Candidate { primary1, primary2, white, black: 0 };
                self.evaluate(&mut best, candidate);
            }
            // Black zero duplicates white zero and can never be strictly better.
            for black in 1..=options.max_black() {
                let candidate = Candidate { primary1, primary2, white: 0, black };
                self.evaluate(&mut best, candidate);
            }
        }

        best
    }

    fn coarse_search(&self, options: &SolverOptions) -> Best {
        #[cfg(feature = "parallel")]
        {
            if options.parallel() {
                let rows: Vec<Best> = (0..=FULL)
                    .into_par_iter()
                    .map(|primary1| self.search_row(primary1, options))
                    .collect();

                let mut best = Best::none();
                for row in rows {
                    best.merge(row);
                }
                return best;
            }
        }

        let mut best = Best::none();
        for primary1 in 0..=FULL {
            best.merge(self.search_row(primary1, options));
        }
        best
    }

    fn refine_primaries(&self, best: &mut Best, start: Candidate, radius: u8) {
        for primary1 in window(start.primary1, radius) {
            for primary2 in window(start.primary2, radius) {
                self.evaluate(best, Candidate { primary1, primary2, ..start });
            }
        }
    }

    fn refine_shades(&self, best: &mut Best, start: Candidate, radius: u8) {
        for white in window(start.white, radius) {
            for black in window(start.black, radius) {
                self.evaluate(best, Candidate { white, black, ..start });
            }
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the best achievable mix for the target with the default options.
///
/// The distractor of the returned mix specification is always zero.
pub fn calculate_optimal_mix(target: Rgb, palette: &Palette) -> MixSpec {
    optimal_mix_with(target, palette, &SolverOptions::default())
}

/// Compute the best achievable mix for the target with the given options.
pub fn optimal_mix_with(target: Rgb, palette: &Palette, options: &SolverOptions) -> MixSpec {
    let search = Search::new(target, palette);

    let mut best = search.coarse_search(options);
    let Some(coarse) = best.candidate else {
        warn!("no candidate mix for {}, falling back on channel ratios", target);
        return estimate_mix(target, palette);
    };
    debug!("coarse search for {} found {:?} with ΔE {:.4}", target, coarse, best.delta_e);

    search.refine_primaries(&mut best, coarse, options.refine_window());
    let refined = best.candidate.unwrap_or(coarse);
    debug!("primary refinement for {} found {:?} with ΔE {:.4}", target, refined, best.delta_e);

    search.refine_shades(&mut best, refined, options.refine_window());
    let result = best.candidate.unwrap_or(refined);
    debug!("shade refinement for {} found {:?} with ΔE {:.4}", target, result, best.delta_e);

    search.spec(result)
}

/// Estimate a mix from the target's channel ratios alone.
///
/// This closed-form estimate ignores white and black and serves as the last
/// resort when searching fails.
pub fn estimate_mix(target: Rgb, palette: &Palette) -> MixSpec {
    let mut spec = palette.to_mix_spec();
    spec.primary1.set_percentage(channel_ratio(palette.primary1(), target));
    spec.primary2.set_percentage(channel_ratio(palette.primary2(), target));
    spec
}

/// Estimate the percentage of the pigment from the target's channels.
fn channel_ratio(pigment: Pigment, target: Rgb) -> u8 {
    let r = target.r() as Float;
    let g = target.g() as Float;
    let b = target.b() as Float;

    let ratio = match pigment {
        Pigment::Red => r / 255.0,
        Pigment::Green => g / 255.0,
        Pigment::Blue => b / 255.0,
        Pigment::Yellow => (r + g) / 510.0,
        Pigment::Purple => (r + b) / 510.0,
        Pigment::Orange => (0.7 as Float).mul_add(r, 0.3 * g) / 255.0,
        Pigment::White | Pigment::Black => 0.0,
    };

    (ratio * 100.0).clamp(0.0, 100.0).round() as u8
}
