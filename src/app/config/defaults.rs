// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime
//! - **Listing**: Table page size bounds

use std::time::Duration;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast lifetime in milliseconds.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3_000;

/// Longest toast lifetime accepted from the config file (one minute).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Listing Defaults
// ==========================================================================

pub use crate::records::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Clamps a configured toast lifetime into the accepted range.
#[must_use]
pub fn clamp_notification_duration(ms: u64) -> Duration {
    Duration::from_millis(ms.min(MAX_NOTIFICATION_DURATION_MS))
}

/// Clamps a configured page size into `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
#[must_use]
pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::DEFAULT_DURATION;

    #[test]
    fn notification_default_matches_toast_default() {
        assert_eq!(
            Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
            DEFAULT_DURATION
        );
    }

    #[test]
    fn notification_duration_is_capped() {
        assert_eq!(
            clamp_notification_duration(600_000),
            Duration::from_millis(MAX_NOTIFICATION_DURATION_MS)
        );
        assert_eq!(clamp_notification_duration(0), Duration::ZERO);
    }

    #[test]
    fn page_size_bounds_are_valid() {
        assert!(MIN_PAGE_SIZE <= DEFAULT_PAGE_SIZE);
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(0), MIN_PAGE_SIZE);
        assert_eq!(clamp_page_size(500), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(10), 10);
    }
}
