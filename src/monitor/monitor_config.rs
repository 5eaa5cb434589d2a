// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for the temperature monitor.

use crate::error::ValueError;

/// Default number of events buffered per push subscriber.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Configuration for a [`TemperatureMonitor`](super::TemperatureMonitor).
///
/// # Examples
///
/// ```
/// use zonetemp_lib::monitor::MonitorConfig;
///
/// let config = MonitorConfig::default()
///     .with_event_capacity(64)
///     .with_publish_empty(true);
///
/// assert_eq!(config.event_capacity(), 64);
/// assert!(config.publish_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    event_capacity: usize,
    publish_empty: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
            publish_empty: false,
        }
    }
}

impl MonitorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many events each push subscriber may fall behind before
    /// losing the oldest ones.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Publishes an event even for lines that carried no temperature data.
    ///
    /// Off by default: acknowledgement-only lines change nothing, so there is
    /// nothing new to push.
    #[must_use]
    pub fn with_publish_empty(mut self, publish_empty: bool) -> Self {
        self.publish_empty = publish_empty;
        self
    }

    /// Returns the per-subscriber event capacity.
    #[must_use]
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Returns whether empty lines still produce an event.
    #[must_use]
    pub fn publish_empty(&self) -> bool {
        self.publish_empty
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ZeroCapacity`] if the event capacity is zero.
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.event_capacity == 0 {
            return Err(ValueError::ZeroCapacity);
        }
        Ok(())
    }
}
