// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ingestion façade tying decoding, state and projections together.
//!
//! The [`TemperatureMonitor`] is what an application wires between its line
//! source and its query/push endpoints:
//!
//! ```text
//! serial line ─► ingest() ─► decode_line ─► ZoneStore::apply ─► EventBus
//!                                                │
//!                             query handler ◄── snapshot()
//! ```
//!
//! # Examples
//!
//! ```
//! use zonetemp_lib::monitor::TemperatureMonitor;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let monitor = TemperatureMonitor::new();
//!     let mut events = monitor.subscribe();
//!
//!     monitor.ingest("ok T:210.0 /210.0 B:60.0 /60.0");
//!
//!     let event = events.recv().await.unwrap();
//!     assert_eq!(event.len(), 2);
//!     assert_eq!(monitor.snapshot().keys(), vec!["tool0", "bed"]);
//! }
//! ```

mod monitor_config;
mod temperature_monitor;

pub use monitor_config::{DEFAULT_EVENT_CAPACITY, MonitorConfig};
pub use temperature_monitor::TemperatureMonitor;
