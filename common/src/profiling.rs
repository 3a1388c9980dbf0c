//! Event log for the host's debug page.
//!
//! Frame timing needs a clock, so it stays in the host crate. This module
//! only keeps the most recent event lines plus a running count of every
//! event seen, which is enough for the debug page to show
//! "LOG 42" above the last few entries.

use heapless::{Deque, String};

// =============================================================================
// Log Sizing
// =============================================================================

/// Lines kept for display; fills the area under the log divider.
pub const LOG_BUFFER_SIZE: usize = 7;

/// Characters per line: 144 px of 6 px wide glyphs.
pub const LOG_LINE_LENGTH: usize = 24;

// =============================================================================
// Debug Log
// =============================================================================

/// The newest [`LOG_BUFFER_SIZE`] event lines, oldest first.
pub struct DebugLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    total: u32,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            total: 0,
        }
    }

    /// Record an event. Bytes past [`LOG_LINE_LENGTH`] are cut off and the
    /// oldest line makes room when the log is full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line).ok();
        self.total = self.total.saturating_add(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Events recorded so far, dropped lines included.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Number Formatting
// =============================================================================

/// Append the decimal digits of `val`, most significant first.
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    val: u32,
) {
    let mut place = 1;
    while val / place >= 10 {
        place *= 10;
    }
    loop {
        s.push((b'0' + (val / place % 10) as u8) as char).ok();
        if place == 1 {
            break;
        }
        place /= 10;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Sliders started");
        log.push("Date row: ON");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), ["Sliders started", "Date row: ON"]);
    }

    #[test]
    fn test_full_log_drops_oldest_but_counts_all() {
        let mut log = DebugLog::default();
        for i in 0..=LOG_BUFFER_SIZE as u32 {
            let mut msg: String<8> = String::new();
            push_u32(&mut msg, i);
            log.push(&msg);
        }

        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.total(), LOG_BUFFER_SIZE as u32 + 1);
        assert_eq!(log.iter().next(), Some("1"));
    }

    #[test]
    fn test_long_lines_are_cut() {
        let mut log = DebugLog::new();
        log.push("Tick 23:59:59 with far more detail than fits");
        assert_eq!(log.iter().next().map(str::len), Some(LOG_LINE_LENGTH));
    }

    #[test]
    fn test_push_u32() {
        for (val, expected) in [(0, "0"), (7, "7"), (10, "10"), (2026, "2026"), (u32::MAX, "4294967295")] {
            let mut s: String<16> = String::new();
            push_u32(&mut s, val);
            assert_eq!(s.as_str(), expected);
        }
    }
}
