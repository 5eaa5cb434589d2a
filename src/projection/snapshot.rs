// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Query snapshot of all known zones.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::ZoneId;

/// One zone as reported by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneSnapshot {
    /// Measured temperature.
    pub actual: f64,
    /// Reported setpoint; `None` (JSON `null`) when the device sent none.
    pub target: Option<f64>,
    /// Configured offset, `0` when none is set.
    pub offset: f64,
}

/// Point-in-time view of every known zone, keyed by display key.
///
/// Serializes as a flat JSON object in zone order:
///
/// ```json
/// {"tool0": {"actual": 200.1, "target": 200.0, "offset": 0.0}, "bed": {...}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    zones: BTreeMap<ZoneId, ZoneSnapshot>,
}

impl Snapshot {
    /// Returns the entry for a display key such as `"bed"` or `"H0"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ZoneSnapshot> {
        let zone = key.parse::<ZoneId>().ok()?;
        self.zones.get(&zone)
    }

    /// Returns the entry for a zone.
    #[must_use]
    pub fn zone(&self, zone: ZoneId) -> Option<&ZoneSnapshot> {
        self.zones.get(&zone)
    }

    /// Returns the display keys in zone order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.zones.keys().map(ToString::to_string).collect()
    }

    /// Iterates over entries in zone order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &ZoneSnapshot)> {
        self.zones.iter().map(|(zone, entry)| (*zone, entry))
    }

    /// Returns the number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if no zone is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl FromIterator<(ZoneId, ZoneSnapshot)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (ZoneId, ZoneSnapshot)>>(iter: I) -> Self {
        Self {
            zones: iter.into_iter().collect(),
        }
    }
}
