use serde::{Deserialize, Serialize};

/// Upload progress as observed by the UI. `Done` is only reached once the
/// request has resolved, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadProgress {
    Idle,
    Sending(u8),
    Done,
}

impl UploadProgress {
    #[must_use]
    pub fn percent(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Sending(p) => *p,
            Self::Done => 100,
        }
    }
}

/// Turns raw loaded/total byte counts into a monotonically non-decreasing
/// percentage. Streaming reports are capped below 100 so that 100 is only
/// observed after the request resolves.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    reported: u8,
}

impl ProgressTracker {
    pub const STREAM_CAP: u8 = 99;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records bytes transmitted so far and returns the percentage to report.
    /// Reports never decrease, even if callers hand in out-of-order counts.
    pub fn record(&mut self, loaded: u64, total: u64) -> u8 {
        let raw = if total == 0 {
            Self::STREAM_CAP
        } else {
            ((loaded.min(total) * 100) / total) as u8
        };
        let capped = raw.min(Self::STREAM_CAP);
        if capped > self.reported {
            self.reported = capped;
        }
        self.reported
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn reports_are_monotonic() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.record(10, 100), 10);
        assert_eq!(tracker.record(50, 100), 50);
        assert_eq!(tracker.record(30, 100), 50);
    }

    #[test]
    fn streaming_reports_stop_short_of_full() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.record(100, 100), ProgressTracker::STREAM_CAP);
        assert_eq!(tracker.record(200, 100), ProgressTracker::STREAM_CAP);
    }

    #[test]
    fn zero_total_counts_as_nearly_done() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.record(0, 0), ProgressTracker::STREAM_CAP);
    }

    #[test]
    fn progress_values_expose_percentages() {
        assert_eq!(UploadProgress::Idle.percent(), 0);
        assert_eq!(UploadProgress::Sending(42).percent(), 42);
        assert_eq!(UploadProgress::Done.percent(), 100);
    }
}
