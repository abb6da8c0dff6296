//! Game engine: round generation, session state machine, scoring.
//!
//! Everything in here is UI-agnostic and side-effect free apart from the
//! injected random source. The presentation layer drives a
//! [`session::Session`] with ticks and submissions and renders whatever it
//! exposes.

pub mod constants;
pub mod round;
pub mod sampler;
pub mod score;
pub mod session;
pub mod summary;

pub use round::{QuestionVariant, Round};
pub use score::ScoreLedger;
pub use session::{Outcome, Phase, Session};
pub use summary::{GameSummary, ResultSink};
