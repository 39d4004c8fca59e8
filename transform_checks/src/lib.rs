//! `transform_checks`
//!
//! Randomized property checks for `transform_math`, a runner that filters,
//! shuffles and times them, and JSON / JUnit-XML reports of the outcome.
//!
//! Every check gets its own seeded RNG derived from the run seed and the
//! check's registry position, so a failing check reproduces with the same
//! seed regardless of filtering or run order.

pub mod config;
pub mod context;
pub mod report;
pub mod runner;
pub mod suite;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::context::*;
    pub use crate::report::*;
    pub use crate::runner::*;
    pub use crate::suite::registry;
}
