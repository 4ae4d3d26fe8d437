//! # Hue 🎨 Mix
//!
//! Huemix is the engine behind a color-matching puzzle. Each challenge picks
//! a random target color and a palette of three pigments. Players blend the
//! pigments, plus white and black, trying to reproduce the target, and receive
//! a perceptual score for every attempt.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Huemix's main abstractions are:
//!
//!   * [`Rgb`](color::Rgb) is the 24-bit color used for targets, pigments,
//!     and mixes. The [`color`] module also provides [`Xyz`](color::Xyz),
//!     [`Lab`](color::Lab), and [`Hsl`](color::Hsl) together with the
//!     conversions between them.
//!   * [`delta_e`] measures the **perceptual difference** between two colors
//!     with CIEDE2000 and [`percentage_match`] turns that into a score.
//!   * [`Pigment`](pigment::Pigment) enumerates the eight paints.
//!     [`MixSpec`](mix::MixSpec) is a recipe for mixing them and
//!     [`mix_colors`](mix::mix_colors) implements the **mixing model**.
//!   * [`generate_color_palette`](palette::generate_color_palette) picks each
//!     challenge's **palette** of two primaries and one distractor.
//!   * [`calculate_optimal_mix`](solver::calculate_optimal_mix) searches for
//!     the **best achievable mix**, configured by
//!     [`SolverOptions`](opt::SolverOptions).
//!   * The [`feedback`] module rates attempts and offers hints, whereas
//!     [`Session`](session::Session) keeps track of a game in progress.
//!
//!
//! ## 2. A Challenge in Four Steps
//!
//! ```
//! # use huemix::color::Rgb;
//! # use huemix::feedback::{color_hints, Feedback};
//! # use huemix::mix::mix_colors;
//! # use huemix::palette::generate_color_palette;
//! # use huemix::pigment::Pigment;
//! # use huemix::{delta_e, percentage_match};
//! // 1. Pick the target and its palette
//! let target = Rgb::new(76, 117, 172);
//! let palette = generate_color_palette(target, &mut rand::rng());
//!
//! // 2. Mix some paint
//! let mut spec = palette.to_mix_spec();
//! if palette.primary1() == Pigment::Blue {
//!     spec.primary1.set_percentage(38);
//!     spec.primary2.set_percentage(16);
//! } else {
//!     spec.primary1.set_percentage(16);
//!     spec.primary2.set_percentage(38);
//! }
//! spec.set_white(30);
//! let mixed = mix_colors(&spec);
//!
//! // 3. Score the attempt
//! let difference = delta_e(&target, &mixed);
//! assert!(percentage_match(difference) >= 95);
//! assert!(Feedback::from_delta_e(difference) <= Feedback::Excellent);
//!
//! // 4. Ask for help
//! let hints = color_hints(target, mixed);
//! assert_eq!(hints[0].to_string(), "You're very close!");
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Huemix supports four feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`parallel`** spreads the solver's coarse search across threads with
//!     [rayon](https://crates.io/crates/rayon). The result is the same as for
//!     the sequential search. This feature is enabled by default.
//!   - **`serde`** derives serialization for colors, mixes, palettes, and
//!     attempts. This feature is disabled by default.
//!   - **`pyffi`** controls huemix's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Huemix logs through the [log](https://crates.io/crates/log) facade and
//! leaves the choice of logger to the application.
//!
//!
//! ## 4. Acknowledgements
//!
//! The CIEDE2000 implementation follows the notation and is validated against
//! the test data of Gaurav Sharma, Wencheng Wu, and Edul N. Dalal's [implementation
//! notes](https://hajim.rochester.edu/ece/sites/gsharma/ciede2000/). Thank
//! you! 🎨
//!
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod color;
mod core;
pub mod error;
pub mod feedback;
pub mod mix;
pub mod opt;
pub mod palette;
pub mod pigment;
pub mod session;
pub mod solver;

#[doc(hidden)]
pub use core::to_eq_bits;

use color::{Lab, Rgb};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Compute the CIEDE2000 difference between two 24-bit colors.
///
/// ```
/// # use huemix::color::Rgb;
/// # use huemix::delta_e;
/// let steel = Rgb::new(76, 117, 172);
/// assert_eq!(delta_e(&steel, &steel), 0.0);
/// assert!(delta_e(&steel, &Rgb::new(255, 0, 0)) > 40.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn delta_e(color1: &Rgb, color2: &Rgb) -> Float {
    core::delta_e_2000(&color1.to_lab().coordinates(), &color2.to_lab().coordinates())
}

/// Compute the CIEDE2000 difference between two CIELAB colors.
pub fn delta_e_2000(lab1: &Lab, lab2: &Lab) -> Float {
    core::delta_e_2000(&lab1.coordinates(), &lab2.coordinates())
}

/// Convert a delta E into a match percentage.
///
/// The percentage falls off linearly, from 100 for identical colors to 0 for
/// colors a delta E of 50 or more apart.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn percentage_match(delta_e: Float) -> u8 {
    core::match_percentage(delta_e)
}

/// The delta E at and beyond which the match percentage is zero.
pub const MAX_DELTA_E: Float = core::MAX_DELTA_E;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn huemix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(delta_e, m)?)?;
    m.add_function(wrap_pyfunction!(percentage_match, m)?)?;
    m.add("MAX_DELTA_E", MAX_DELTA_E)?;

    m.add_class::<color::Rgb>()?;
    m.add_class::<pigment::Pigment>()?;

    Ok(())
}
