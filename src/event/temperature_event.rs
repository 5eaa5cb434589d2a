// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamped temperature event.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Reading, ZoneId};

/// Full projection of every known zone at one point in time.
///
/// Events carry `actual` and `target` per zone but no offsets. Each event is
/// complete on its own; it is not a diff against the previous one.
///
/// Serializes as a flat object with `time` in unix seconds next to the zone
/// entries:
///
/// ```json
/// {"time": 1700000000, "tool0": {"actual": 200.1, "target": 200.0}, "H0": {"actual": 75.2, "target": null}}
/// ```
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zonetemp_lib::event::TemperatureEvent;
/// use zonetemp_lib::types::{Reading, ZoneId};
///
/// let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
/// let event = TemperatureEvent::new(time).with_entry(ZoneId::Bed, Reading::with_target(60.2, 60.0));
///
/// let json = serde_json::to_value(&event).unwrap();
/// assert_eq!(json["time"], 1_700_000_000);
/// assert_eq!(json["bed"]["target"], 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureEvent {
    #[serde(with = "chrono::serde::ts_seconds")]
    time: DateTime<Utc>,
    #[serde(flatten)]
    entries: BTreeMap<ZoneId, Reading>,
}

impl TemperatureEvent {
    /// Creates an event with no zone entries.
    #[must_use]
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time,
            entries: BTreeMap::new(),
        }
    }

    /// Adds a zone entry, builder style.
    #[must_use]
    pub fn with_entry(mut self, zone: ZoneId, reading: Reading) -> Self {
        self.entries.insert(zone, reading);
        self
    }

    pub(crate) fn from_entries(time: DateTime<Utc>, entries: BTreeMap<ZoneId, Reading>) -> Self {
        Self { time, entries }
    }

    /// Returns the event timestamp.
    #[must_use]
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Returns the entry for a display key such as `"tool0"` or `"H1"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Reading> {
        let zone = key.parse::<ZoneId>().ok()?;
        self.entries.get(&zone)
    }

    /// Returns the entry for a zone.
    #[must_use]
    pub fn zone(&self, zone: ZoneId) -> Option<&Reading> {
        self.entries.get(&zone)
    }

    /// Iterates over entries in zone order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &Reading)> {
        self.entries.iter().map(|(zone, reading)| (*zone, reading))
    }

    /// Returns the number of zone entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the event carries no zone entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
