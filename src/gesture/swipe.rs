//! Horizontal Swipe Recognition
//!
//! Classifies a start/end coordinate pair from a single pointer or touch
//! interaction into a left/right swipe or a no-op. Two states only:
//! `Idle` (no pending start) and `Tracking` (one pending start held).
//! A new interaction start always overwrites a pending one — a single
//! pointer is tracked at a time, never a queue.

/// Outcome of one completed interaction.
///
/// `magnitude` is the absolute horizontal displacement that triggered the
/// classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeResult {
    /// No swipe: below threshold, zero delta, or a stray end event.
    None,
    /// Pointer travelled leftwards by more than the threshold.
    Left { magnitude: f32 },
    /// Pointer travelled rightwards by more than the threshold.
    Right { magnitude: f32 },
}

impl SwipeResult {
    /// Indicator text for the UI overlay, `None` when nothing should show.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SwipeResult::Left { .. } => Some("Swiped Left"),
            SwipeResult::Right { .. } => Some("Swiped Right"),
            SwipeResult::None => None,
        }
    }

    pub fn is_swipe(&self) -> bool {
        !matches!(self, SwipeResult::None)
    }
}

/// Single-pointer horizontal swipe state machine.
///
/// Holds at most one pending start coordinate. `on_end` with no pending
/// start is the guard for stray end events (a second finger lifting
/// without a matching start) and classifies as `None`.
pub struct SwipeRecognizer {
    /// Pending start coordinate; `Some` means `Tracking`.
    start_x: Option<f32>,
    /// Minimum absolute displacement for a swipe (strict inequality).
    threshold: f32,
}

impl SwipeRecognizer {
    /// Displacement a swipe must *exceed*; exactly-threshold is a no-op.
    pub const DEFAULT_THRESHOLD: f32 = 50.0;

    pub fn new() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    /// Record `x` as the session's pending start coordinate.
    ///
    /// Unconditionally overwrites any previous pending value.
    pub fn on_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Complete the session and classify it.
    ///
    /// The pending start is cleared regardless of the outcome: the session
    /// ends whether or not a swipe was recognized.
    pub fn on_end(&mut self, x: f32) -> SwipeResult {
        let start = match self.start_x.take() {
            Some(s) => s,
            None => return SwipeResult::None,
        };

        let delta = start - x;
        if delta > self.threshold {
            SwipeResult::Left { magnitude: delta }
        } else if delta < -self.threshold {
            SwipeResult::Right { magnitude: -delta }
        } else {
            SwipeResult::None
        }
    }

    /// Whether a start coordinate is currently pending.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
