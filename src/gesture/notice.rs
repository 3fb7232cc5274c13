//! Transient Notice Overlay
//!
//! A single on-screen indicator that clears itself after a fixed display
//! duration. Showing a new notice supersedes the previous one: every
//! previously issued [`ClearHandle`] is invalidated, so an earlier timer
//! can never clear a newer, still-relevant indicator. At most one clear
//! is pending at any time.
//!
//! Time is injected (`Instant` arguments) so expiry is testable without
//! sleeping; the hosting UI polls once per frame and schedules a repaint
//! at the deadline.

use std::time::{Duration, Instant};

/// How long a notice stays visible without user action.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Token for one scheduled clear. Stale handles are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearHandle {
    generation: u64,
}

struct Notice {
    text: String,
    deadline: Instant,
    generation: u64,
}

/// Owner of the single visible notice and its pending clear.
pub struct NoticeBoard {
    current: Option<Notice>,
    /// Bumped on every `show`; invalidates all outstanding handles.
    generation: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Display `text` and schedule its clear at `now + NOTICE_DURATION`.
    ///
    /// Replaces whatever was showing and restarts the countdown from
    /// `now`; the returned handle is the only one that can still clear.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) -> ClearHandle {
        self.generation += 1;
        self.current = Some(Notice {
            text: text.into(),
            deadline: now + NOTICE_DURATION,
            generation: self.generation,
        });
        ClearHandle {
            generation: self.generation,
        }
    }

    /// Fire a scheduled clear. A superseded handle is a no-op.
    pub fn clear(&mut self, handle: ClearHandle) {
        if let Some(ref notice) = self.current {
            if notice.generation == handle.generation {
                self.current = None;
            }
        }
    }

    /// Drop the notice if its deadline has passed. Called once per frame.
    pub fn poll(&mut self, now: Instant) {
        if let Some(ref notice) = self.current {
            if now >= notice.deadline {
                self.current = None;
            }
        }
    }

    /// Text to render, `None` when nothing is showing.
    pub fn visible(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.text.as_str())
    }

    /// Deadline of the pending clear, for repaint scheduling.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.deadline)
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_until_deadline() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.show("Swiped Left", t0);

        board.poll(t0 + Duration::from_millis(1999));
        assert_eq!(board.visible(), Some("Swiped Left"));

        board.poll(t0 + Duration::from_millis(2000));
        assert_eq!(board.visible(), None);
    }

    #[test]
    fn new_notice_restarts_countdown() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.show("Swiped Left", t0);

        // Second swipe 1.5s in: fresh 2000ms from the second event.
        let t1 = t0 + Duration::from_millis(1500);
        board.show("Swiped Right", t1);

        board.poll(t0 + Duration::from_millis(2500)); // 1.0s after the second show
        assert_eq!(board.visible(), Some("Swiped Right"));

        board.poll(t1 + Duration::from_millis(2000));
        assert_eq!(board.visible(), None);
    }

    #[test]
    fn stale_handle_cannot_clear_newer_notice() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        let first = board.show("Swiped Left", t0);
        let _second = board.show("Swiped Right", t0 + Duration::from_millis(100));

        // The first clear fires late; it was superseded and must not act.
        board.clear(first);
        assert_eq!(board.visible(), Some("Swiped Right"));
    }

    #[test]
    fn live_handle_clears() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        let handle = board.show("Saved", t0);
        board.clear(handle);
        assert_eq!(board.visible(), None);
    }

    #[test]
    fn clear_on_empty_board_is_noop() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        let handle = board.show("Saved", t0);
        board.poll(t0 + NOTICE_DURATION);
        board.clear(handle); // already gone
        assert_eq!(board.visible(), None);
    }

    #[test]
    fn deadline_tracks_latest_show() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.show("a", t0);
        let t1 = t0 + Duration::from_millis(700);
        board.show("b", t1);
        assert_eq!(board.deadline(), Some(t1 + NOTICE_DURATION));
    }
}
