// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature reading type.

use serde::{Deserialize, Serialize};

/// Actual and target temperature of one zone at one decode event.
///
/// `target` is `None` when the device reported no setpoint. An explicit
/// `0.0` target is kept as `Some(0.0)`.
///
/// # Examples
///
/// ```
/// use zonetemp_lib::types::Reading;
///
/// let heating = Reading::with_target(180.5, 200.0);
/// assert_eq!(heating.target(), Some(200.0));
///
/// let idle = Reading::new(24.8);
/// assert_eq!(idle.target(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    actual: f64,
    target: Option<f64>,
}

impl Reading {
    /// Creates a reading without a target.
    #[must_use]
    pub const fn new(actual: f64) -> Self {
        Self {
            actual,
            target: None,
        }
    }

    /// Creates a reading with a target.
    #[must_use]
    pub const fn with_target(actual: f64, target: f64) -> Self {
        Self {
            actual,
            target: Some(target),
        }
    }

    /// Creates a reading from an actual value and an optional target.
    #[must_use]
    pub const fn from_parts(actual: f64, target: Option<f64>) -> Self {
        Self { actual, target }
    }

    /// Returns the measured temperature.
    #[must_use]
    pub const fn actual(&self) -> f64 {
        self.actual
    }

    /// Returns the setpoint, if the device reported one.
    #[must_use]
    pub const fn target(&self) -> Option<f64> {
        self.target
    }
}
