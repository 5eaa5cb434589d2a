// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Push events for zone temperature updates.
//!
//! A [`TemperatureEvent`] is a timestamped projection of every known zone.
//! The [`EventBus`] uses tokio's broadcast channel to fan events out to any
//! number of subscribers.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use zonetemp_lib::event::{EventBus, TemperatureEvent};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
//! bus.publish(TemperatureEvent::new(time));
//!
//! assert_eq!(rx.try_recv().unwrap().time(), time);
//! ```

mod event_bus;
mod temperature_event;

pub use event_bus::EventBus;
pub use temperature_event::TemperatureEvent;
