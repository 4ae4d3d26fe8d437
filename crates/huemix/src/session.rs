//! The state of a game in progress.
//!
//! A [`Session`] tracks the current challenge with its target color, palette,
//! and mix as well as the history of submitted attempts. The session belongs
//! to the caller, who passes in the random number generator whenever a new
//! target is required.
//!
//! ```
//! # use huemix::mix::Slot;
//! # use huemix::session::Session;
//! let mut session = Session::new(&mut rand::rng());
//! session.set_percentage(Slot::Primary1, 60);
//! session.set_percentage(Slot::Primary2, 20);
//! session.set_white(10);
//!
//! let attempt = session.submit();
//! assert_eq!(attempt.challenge, 1);
//! assert!(attempt.match_percentage <= 100);
//! assert_eq!(session.history().len(), 1);
//! ```

use std::time::{Instant, SystemTime};

use log::debug;
use rand::Rng;

use crate::color::Rgb;
use crate::feedback::{color_hints, Feedback, Hint};
use crate::mix::{mix_colors, MixSpec, Slot};
use crate::palette::{generate_color_palette, generate_random_color, Palette};
use crate::solver::calculate_optimal_mix;
use crate::{delta_e, percentage_match, Float};

/// A submitted attempt at matching a target.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Attempt {
    /// The number of the challenge, starting with 1.
    pub challenge: u32,
    /// The target color.
    pub target: Rgb,
    /// The mixed color.
    pub mixed: Rgb,
    /// The recipe for the mixed color.
    pub mix: MixSpec,
    /// The wall-clock time of submission.
    pub timestamp: SystemTime,
    /// The seconds since the challenge started or was reset, rounded.
    pub elapsed: u64,
    /// The match percentage.
    pub match_percentage: u8,
    /// The CIEDE2000 difference between target and mixed color.
    pub delta_e: Float,
}

impl Attempt {
    /// Rate this attempt.
    pub fn feedback(&self) -> Feedback {
        Feedback::from_delta_e(self.delta_e)
    }
}

/// A game session.
#[derive(Debug)]
pub struct Session {
    challenge: u32,
    target: Rgb,
    palette: Palette,
    mix: MixSpec,
    started: Instant,
    history: Vec<Attempt>,
}

impl Session {
    /// Start a new session with a random target color.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let target = generate_random_color(rng);
        Self::with_target(target, rng)
    }

    /// Start a new session with the given target color.
    pub fn with_target<R: Rng + ?Sized>(target: Rgb, rng: &mut R) -> Self {
        let palette = generate_color_palette(target, rng);
        debug!("challenge 1 with target {}", target);

        Self {
            challenge: 1,
            target,
            palette,
            mix: palette.to_mix_spec(),
            started: Instant::now(),
            history: Vec::new(),
        }
    }

    /// Move on to the next challenge with a new random target color.
    ///
    /// The history of attempts carries over.
    pub fn new_challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.challenge += 1;
        self.target = generate_random_color(rng);
        self.palette = generate_color_palette(self.target, rng);
        self.mix = self.palette.to_mix_spec();
        self.started = Instant::now();
        debug!("challenge {} with target {}", self.challenge, self.target);
    }

    /// Get the number of the current challenge, starting with 1.
    pub fn challenge(&self) -> u32 {
        self.challenge
    }

    /// Get the target color.
    pub fn target(&self) -> Rgb {
        self.target
    }

    /// Get the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Get the current mix.
    pub fn mix(&self) -> &MixSpec {
        &self.mix
    }

    /// Update the percentage for the given slot.
    pub fn set_percentage(&mut self, slot: Slot, percentage: u8) {
        self.mix.entry_mut(slot).set_percentage(percentage);
    }

    /// Update the percentage of white.
    pub fn set_white(&mut self, white: u8) {
        self.mix.set_white(white);
    }

    /// Update the percentage of black.
    pub fn set_black(&mut self, black: u8) {
        self.mix.set_black(black);
    }

    /// Zero out all percentages and restart the timer. The target and palette
    /// stay the same.
    pub fn reset(&mut self) {
        self.mix.clear();
        self.started = Instant::now();
    }

    /// Get the color of the current mix.
    pub fn mixed(&self) -> Rgb {
        mix_colors(&self.mix)
    }

    /// Score the current mix and record it in the history.
    pub fn submit(&mut self) -> &Attempt {
        let mixed = self.mixed();
        let delta_e = delta_e(&self.target, &mixed);
        let attempt = Attempt {
            challenge: self.challenge,
            target: self.target,
            mixed,
            mix: self.mix,
            timestamp: SystemTime::now(),
            elapsed: self.started.elapsed().as_secs_f64().round() as u64,
            match_percentage: percentage_match(delta_e),
            delta_e,
        };
        debug!(
            "challenge {} attempt {} scores {}% with ΔE {:.2}",
            self.challenge,
            self.history.len() + 1,
            attempt.match_percentage,
            delta_e
        );

        self.history.push(attempt);
        &self.history[self.history.len() - 1]
    }

    /// Get all attempts in order of submission.
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Get the most recent attempts, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &Attempt> + '_ {
        self.history.iter().rev().take(count)
    }

    /// Compute the best achievable mix for the current challenge.
    pub fn optimal_mix(&self) -> MixSpec {
        calculate_optimal_mix(self.target, &self.palette)
    }

    /// Suggest adjustments to the current mix.
    pub fn hints(&self) -> Vec<Hint> {
        color_hints(self.target, self.mixed())
    }
}

#[cfg(test)]
mod test {
    use super::Session;
    use crate::color::Rgb;
    use crate::feedback::{Feedback, Hint};
    use crate::mix::Slot;
    use crate::pigment::Pigment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn orange_session() -> Session {
        Session::with_target(Pigment::Orange.rgb(), &mut StdRng::seed_from_u64(3))
    }

    fn select(session: &mut Session, pigment: Pigment, percentage: u8) {
        let slot = Slot::ALL
            .into_iter()
            .find(|slot| session.palette().pigment(*slot) == pigment);
        if let Some(slot) = slot {
            session.set_percentage(slot, percentage);
        }
    }

    #[test]
    fn test_submit() {
        let mut session = orange_session();
        assert_eq!(session.mixed(), Rgb::BLACK);
        assert_eq!(session.mix().distractor.pigment(), Pigment::Blue);

        select(&mut session, Pigment::Orange, 100);
        assert_eq!(session.mixed(), Pigment::Orange.rgb());
        assert_eq!(session.hints(), vec![Hint::VeryClose]);

        let attempt = session.submit().clone();
        assert_eq!(attempt.challenge, 1);
        assert_eq!(attempt.mixed, attempt.target);
        assert_eq!(attempt.delta_e, 0.0);
        assert_eq!(attempt.match_percentage, 100);
        assert_eq!(attempt.feedback(), Feedback::Perfect);
        assert_eq!(attempt.elapsed, 0);
        assert_eq!(attempt.mix, *session.mix());
    }

    #[test]
    fn test_reset() {
        let mut session = orange_session();
        let palette = *session.palette();

        select(&mut session, Pigment::Red, 40);
        session.set_white(30);
        session.set_black(250);
        assert_eq!(session.mix().black(), 100);
        assert_eq!(session.mixed(), Rgb::BLACK);

        session.reset();
        assert_eq!(*session.palette(), palette);
        assert_eq!(*session.mix(), palette.to_mix_spec());
        assert_eq!(session.target(), Pigment::Orange.rgb());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = Session::new(&mut rng);

        for percentage in [10, 20, 30] {
            session.set_percentage(Slot::Primary1, percentage);
            session.submit();
        }
        session.new_challenge(&mut rng);
        assert_eq!(session.challenge(), 2);
        assert_eq!(*session.mix(), session.palette().to_mix_spec());
        session.submit();

        assert_eq!(session.history().len(), 4);
        let recent: Vec<_> = session.recent(3).map(|a| a.challenge).collect();
        assert_eq!(recent, vec![2, 1, 1]);
        let recent: Vec<_> = session
            .recent(3)
            .skip(1)
            .map(|a| a.mix.primary1.percentage())
            .collect();
        assert_eq!(recent, vec![30, 20]);
        assert_eq!(session.recent(10).count(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let mut session = Session::with_target(Rgb::new(76, 117, 172), &mut StdRng::seed_from_u64(5));
        session.set_percentage(Slot::Primary1, 38);
        session.set_percentage(Slot::Primary2, 16);
        session.set_white(30);
        let attempt = session.submit().clone();

        let json = serde_json::to_string(&attempt)?;
        assert!(json.contains("\"target\":[76,117,172]"));
        let restored: super::Attempt = serde_json::from_str(&json)?;
        assert_eq!(restored.mix, attempt.mix);
        assert_eq!(restored.mixed, attempt.mixed);
        assert_eq!(restored.timestamp, attempt.timestamp);
        assert_eq!(restored.match_percentage, attempt.match_percentage);
        assert!((restored.delta_e - attempt.delta_e).abs() < 1e-9);
        Ok(())
    }
}
