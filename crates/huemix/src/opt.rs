//! Helper module with the options for the optimal-mix solver.
//!
//! This module provides the options for searching the best achievable mix and
//! the corresponding builder. The defaults reproduce the reference search,
//! which is exhaustive over both primaries and the full range of white and
//! black.
//!
//!
//! # Example
//!
//! ```
//! # use huemix::opt::SolverOptions;
//! let options = SolverOptions::builder()
//!     .max_black(60)
//!     .parallel(false)
//!     .build();
//!
//! assert_eq!(options.max_black(), 60);
//! assert_eq!(options.refine_window(), 10);
//! assert!(!options.parallel());
//! ```

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionData {
    refine_window: u8,
    max_white: u8,
    max_black: u8,
    parallel: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            refine_window: 10,
            max_white: 100,
            max_black: 100,
            parallel: cfg!(feature = "parallel"),
        }
    }
}

/// A builder of solver options.
#[derive(Debug)]
pub struct SolverOptionBuilder(OptionData);

impl SolverOptionBuilder {
    /// Set the half-width of the refinement windows.
    ///
    /// After the coarse search, the solver revisits all primary percentages
    /// and then all white and black percentages within this distance of the
    /// best candidate.
    pub fn refine_window(&mut self, window: u8) -> &mut Self {
        self.0.refine_window = window;
        self
    }

    /// Set the largest percentage of white tried during the coarse search.
    /// Values above 100 are clamped.
    pub fn max_white(&mut self, white: u8) -> &mut Self {
        self.0.max_white = white.min(100);
        self
    }

    /// Set the largest percentage of black tried during the coarse search.
    /// Values above 100 are clamped.
    pub fn max_black(&mut self, black: u8) -> &mut Self {
        self.0.max_black = black.min(100);
        self
    }

    /// Set whether to use multiple threads.
    ///
    /// Without the `parallel` feature, the solver is always sequential and
    /// this option has no effect.
    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.0.parallel = parallel;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> SolverOptions {
        SolverOptions(self.0.clone())
    }
}

/// A solver options object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverOptions(OptionData);

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions(OptionData::new())
    }
}

impl SolverOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> SolverOptionBuilder {
        SolverOptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but without multiple threads.
    pub fn sequential() -> SolverOptions {
        Self::builder().parallel(false).build()
    }

    /// Get the half-width of the refinement windows.
    pub fn refine_window(&self) -> u8 {
        self.0.refine_window
    }

    /// Get the largest percentage of white for the coarse search.
    pub fn max_white(&self) -> u8 {
        self.0.max_white
    }

    /// Get the largest percentage of black for the coarse search.
    pub fn max_black(&self) -> u8 {
        self.0.max_black
    }

    /// Determine whether to use multiple threads.
    pub fn parallel(&self) -> bool {
        self.0.parallel
    }
}

#[cfg(test)]
mod test {
    use super::SolverOptions;

    #[test]
    fn test_defaults() {
        let options = SolverOptions::default();
        assert_eq!(options.refine_window(), 10);
        assert_eq!(options.max_white(), 100);
        assert_eq!(options.max_black(), 100);
        assert_eq!(options.parallel(), cfg!(feature = "parallel"));
        assert_eq!(SolverOptions::builder().build(), options);
    }

    #[test]
    fn test_builder() {
        let options = SolverOptions::builder()
            .max_white(250)
            .max_black(60)
            .refine_window(5)
            .build();
        assert_eq!(options.max_white(), 100);
        assert_eq!(options.max_black(), 60);
        assert_eq!(options.refine_window(), 5);
        assert!(!SolverOptions::sequential().parallel());
    }
}
