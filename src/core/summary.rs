//! The boundary between a finished session and whoever records it.

/// Final report of one play-through. Handed to a [`ResultSink`] at most
/// once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: &'static str,
    pub score: u32,
    pub duration_seconds: u64,
    /// Codes of places answered correctly, in play order.
    pub correct: Vec<&'static str>,
    /// Codes of places answered incorrectly, in play order.
    pub incorrect: Vec<&'static str>,
}

/// External collaborator that persists a finished session.
///
/// The engine never retries a sink call: at-most-once delivery is
/// preferred over duplicate submissions.
pub trait ResultSink {
    fn record_result(&mut self, summary: &GameSummary);
}
