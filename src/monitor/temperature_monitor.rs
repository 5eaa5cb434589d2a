// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature monitor.

use std::fmt;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::error::Result;
use crate::event::{EventBus, TemperatureEvent};
use crate::projection::{Clock, Snapshot, SystemClock, project_event, project_snapshot};
use crate::state::{OffsetProvider, SharedOffsets, ZoneStore};
use crate::telemetry::decode_line;

use super::MonitorConfig;

/// Keeps zone state up to date from report lines and serves both the query
/// and the push side.
///
/// The monitor is `Send + Sync`; share it behind an [`Arc`] between the
/// ingestion task and request handlers. Nothing in it awaits or performs
/// I/O.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zonetemp_lib::monitor::TemperatureMonitor;
/// use zonetemp_lib::projection::FixedClock;
/// use zonetemp_lib::state::ZoneOffsets;
/// use zonetemp_lib::types::ZoneId;
///
/// let offsets = ZoneOffsets::new().with_offset(ZoneId::Bed, 2.0).unwrap();
/// let monitor = TemperatureMonitor::new()
///     .with_offsets(offsets)
///     .with_clock(FixedClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
///
/// assert_eq!(monitor.ingest("ok B:60.2 /60.0 H0:75.2 /75.0"), 2);
///
/// let snapshot = monitor.snapshot();
/// assert_eq!(snapshot.get("bed").unwrap().offset, 2.0);
/// assert_eq!(snapshot.get("H0").unwrap().offset, 0.0);
///
/// let event = monitor.event();
/// assert_eq!(event.time().timestamp(), 1_700_000_000);
/// ```
pub struct TemperatureMonitor {
    store: ZoneStore,
    offsets: Arc<dyn OffsetProvider>,
    clock: Arc<dyn Clock>,
    event_bus: EventBus,
    config: MonitorConfig,
}

impl TemperatureMonitor {
    /// Creates a monitor with default configuration, empty offsets and the
    /// system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ZoneStore::new(),
            offsets: Arc::new(SharedOffsets::new()),
            clock: Arc::new(SystemClock),
            event_bus: EventBus::new(),
            config: MonitorConfig::default(),
        }
    }

    /// Creates a monitor from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ZeroCapacity`](crate::ValueError::ZeroCapacity)
    /// if the configured event capacity is zero.
    pub fn with_config(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        let event_bus = EventBus::with_capacity(config.event_capacity())?;
        Ok(Self {
            event_bus,
            config,
            ..Self::new()
        })
    }

    /// Sets the offsets provider read by [`snapshot`](Self::snapshot).
    #[must_use]
    pub fn with_offsets(mut self, offsets: impl OffsetProvider + 'static) -> Self {
        self.offsets = Arc::new(offsets);
        self
    }

    /// Sets the clock used to stamp events.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    // =========================================================================
    // Ingestion
    // =========================================================================

    /// Decodes a report line, applies it and pushes an event.
    ///
    /// Lines without temperature data leave the state untouched and, unless
    /// [`MonitorConfig::with_publish_empty`] is set, publish nothing.
    ///
    /// # Returns
    ///
    /// The number of zone readings decoded from the line.
    pub fn ingest(&self, line: &str) -> usize {
        let batch = decode_line(line);
        if batch.is_empty() && !self.config.publish_empty() {
            return 0;
        }

        self.store.apply(&batch);

        let event = self.event();
        let receivers = self.event_bus.publish_counted(event);
        tracing::debug!(
            zone_count = batch.len(),
            receivers,
            "Published temperature event"
        );

        batch.len()
    }

    // =========================================================================
    // Query and push
    // =========================================================================

    /// Returns the current snapshot, with offsets read fresh.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        project_snapshot(&self.store, self.offsets.as_ref())
    }

    /// Returns a full event for the current state, stamped by the clock.
    #[must_use]
    pub fn event(&self) -> TemperatureEvent {
        project_event(&self.store, self.clock.now())
    }

    /// Subscribes to events published after each ingested line.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TemperatureEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the number of active push subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.event_bus.subscriber_count()
    }

    /// Returns the underlying zone store.
    #[must_use]
    pub fn store(&self) -> &ZoneStore {
        &self.store
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}

impl Default for TemperatureMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemperatureMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemperatureMonitor")
            .field("store", &self.store)
            .field("event_bus", &self.event_bus)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
