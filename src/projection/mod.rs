// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Caller-facing views of the zone store.
//!
//! Both projections read the store under a single read lock and use the same
//! display keys (`tool{n}`, `bed`, `chamber`, `filament`, `H{n}`):
//!
//! - [`project_snapshot`] - `{actual, target, offset}` per zone, for queries
//! - [`project_event`] - timestamped `{actual, target}` per zone, for push
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use zonetemp_lib::projection::{project_event, project_snapshot};
//! use zonetemp_lib::state::{ZoneOffsets, ZoneStore};
//! use zonetemp_lib::telemetry::decode_line;
//!
//! let store = ZoneStore::new();
//! store.apply(&decode_line("ok T0:200.1 /200.0 B:60.2 /60.0"));
//!
//! let snapshot = project_snapshot(&store, &ZoneOffsets::new());
//! assert_eq!(snapshot.get("tool0").unwrap().offset, 0.0);
//!
//! let event = project_event(&store, Utc::now());
//! assert_eq!(event.len(), snapshot.len());
//! ```

mod clock;
mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use snapshot::{Snapshot, ZoneSnapshot};

use chrono::{DateTime, Utc};

use crate::event::TemperatureEvent;
use crate::state::{OffsetProvider, ZoneStore};

/// Projects the store into a snapshot with offsets.
///
/// The offsets provider is read once per call. Zones never decoded do not
/// appear.
#[must_use]
pub fn project_snapshot<P>(store: &ZoneStore, offsets: &P) -> Snapshot
where
    P: OffsetProvider + ?Sized,
{
    let offsets = offsets.offsets();
    store.with_readings(|zones| {
        zones
            .iter()
            .map(|(zone, reading)| {
                let entry = ZoneSnapshot {
                    actual: reading.actual(),
                    target: reading.target(),
                    offset: offsets.offset(*zone),
                };
                (*zone, entry)
            })
            .collect::<Snapshot>()
    })
}

/// Projects the store into a push event stamped with `time`.
///
/// Every call is a full projection of the current state.
#[must_use]
pub fn project_event(store: &ZoneStore, time: DateTime<Utc>) -> TemperatureEvent {
    TemperatureEvent::from_entries(time, store.readings())
}
