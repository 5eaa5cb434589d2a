// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Latest reading per zone.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::RwLock;

use crate::types::{Reading, ZoneId};

/// Thread-safe store of the latest reading for every known zone.
///
/// Zones appear only once a reading for them has been applied; there are no
/// placeholders for zones the device never reported.
///
/// # Concurrency
///
/// The map sits behind a single [`RwLock`]. [`apply`](Self::apply) holds the
/// write lock for the whole batch and every read accessor holds the read lock
/// for its whole duration, so readers see either all of a batch or none of
/// it. Decoding happens before the lock is taken.
///
/// # Examples
///
/// ```
/// use zonetemp_lib::state::ZoneStore;
/// use zonetemp_lib::types::{Reading, ZoneId};
///
/// let store = ZoneStore::new();
/// assert!(store.all_identifiers().is_empty());
///
/// let changed = store.apply(&[
///     (ZoneId::Bed, Reading::with_target(60.2, 60.0)),
///     (ZoneId::Secondary(1), Reading::new(50.1)),
/// ]);
/// assert_eq!(changed, 2);
///
/// // Re-applying the same batch changes nothing
/// assert_eq!(store.apply(&[(ZoneId::Bed, Reading::with_target(60.2, 60.0))]), 0);
/// ```
#[derive(Debug, Default)]
pub struct ZoneStore {
    zones: RwLock<BTreeMap<ZoneId, Reading>>,
}

impl ZoneStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a batch of readings atomically.
    ///
    /// Every zone in the batch gets its reading replaced; zones not in the
    /// batch keep their previous reading. An empty batch is a no-op.
    ///
    /// # Returns
    ///
    /// The number of zones whose reading changed, counting zones seen for
    /// the first time.
    pub fn apply(&self, batch: &[(ZoneId, Reading)]) -> usize {
        if batch.is_empty() {
            return 0;
        }

        let mut zones = self.zones.write();
        let mut changed = 0;
        for (zone, reading) in batch {
            if zones.insert(*zone, *reading) != Some(*reading) {
                changed += 1;
            }
        }
        drop(zones);

        tracing::debug!(zone_count = batch.len(), changed, "Applied temperature batch");
        changed
    }

    /// Returns the latest reading for a zone.
    #[must_use]
    pub fn get(&self, zone: ZoneId) -> Option<Reading> {
        self.zones.read().get(&zone).copied()
    }

    /// Returns every zone that has been decoded at least once.
    #[must_use]
    pub fn all_identifiers(&self) -> BTreeSet<ZoneId> {
        self.zones.read().keys().copied().collect()
    }

    /// Returns a consistent copy of all readings.
    #[must_use]
    pub fn readings(&self) -> BTreeMap<ZoneId, Reading> {
        self.zones.read().clone()
    }

    /// Returns the number of known zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.read().len()
    }

    /// Returns `true` if no zone has been decoded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.read().is_empty()
    }

    /// Runs `f` against the readings while holding the read lock.
    pub(crate) fn with_readings<R>(&self, f: impl FnOnce(&BTreeMap<ZoneId, Reading>) -> R) -> R {
        f(&*self.zones.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = ZoneStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all_identifiers().is_empty());
        assert!(store.get(ZoneId::Tool(0)).is_none());
    }

    #[test]
    fn apply_replaces_only_mentioned_zones() {
        let store = ZoneStore::new();
        store.apply(&[
            (ZoneId::Tool(0), Reading::with_target(200.0, 210.0)),
            (ZoneId::Bed, Reading::with_target(55.0, 60.0)),
        ]);

        store.apply(&[(ZoneId::Tool(0), Reading::with_target(205.0, 210.0))]);

        assert_eq!(
            store.get(ZoneId::Tool(0)),
            Some(Reading::with_target(205.0, 210.0))
        );
        assert_eq!(store.get(ZoneId::Bed), Some(Reading::with_target(55.0, 60.0)));
    }

    #[test]
    fn apply_empty_batch_is_noop() {
        let store = ZoneStore::new();
        assert_eq!(store.apply(&[]), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn apply_twice_is_idempotent() {
        let store = ZoneStore::new();
        let batch = [
            (ZoneId::Chamber, Reading::with_target(35.0, 40.0)),
            (ZoneId::Secondary(2), Reading::new(80.0)),
        ];

        assert_eq!(store.apply(&batch), 2);
        let first = store.readings();

        assert_eq!(store.apply(&batch), 0);
        assert_eq!(store.readings(), first);
    }

    #[test]
    fn target_can_disappear() {
        let store = ZoneStore::new();
        store.apply(&[(ZoneId::Bed, Reading::with_target(60.0, 60.0))]);
        assert_eq!(store.apply(&[(ZoneId::Bed, Reading::new(59.5))]), 1);
        assert_eq!(store.get(ZoneId::Bed).unwrap().target(), None);
    }

    #[test]
    fn all_identifiers_are_ordered() {
        let store = ZoneStore::new();
        store.apply(&[
            (ZoneId::Secondary(0), Reading::new(1.0)),
            (ZoneId::Bed, Reading::new(1.0)),
            (ZoneId::Tool(1), Reading::new(1.0)),
        ]);

        let ids: Vec<_> = store.all_identifiers().into_iter().collect();
        assert_eq!(ids, vec![ZoneId::Tool(1), ZoneId::Bed, ZoneId::Secondary(0)]);
    }

    #[test]
    fn with_readings_sees_whole_map() {
        let store = ZoneStore::new();
        store.apply(&[
            (ZoneId::Tool(0), Reading::new(1.0)),
            (ZoneId::Tool(1), Reading::new(2.0)),
        ]);

        let sum: f64 = store.with_readings(|zones| zones.values().map(Reading::actual).sum());
        assert!((sum - 3.0).abs() < f64::EPSILON);
    }
}
