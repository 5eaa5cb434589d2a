// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ZoneTemp` Lib - decode heater temperature reports and track zone state.
//!
//! Heating firmware (3D printers, dryers, heated enclosures) answers a
//! temperature query with a single status line such as:
//!
//! ```text
//! ok T0:200.1 /200.0 T1:200.3 /200.0 B:60.2 /60.0 C:35.0 /40.0 F:55.1 /55.0 H0:75.2 /75.0
//! ```
//!
//! This library turns such lines into per-zone state and exposes that state
//! two ways: as a snapshot for polling queries and as timestamped events for
//! push subscribers.
//!
//! # Supported Zones
//!
//! - **Tools**: `T`, `T0`, `T1`, ... (bare `T` is tool 0)
//! - **Bed**, **Chamber**, **Filament dryer**: `B`, `C`, `F`
//! - **Secondary heaters**: `H0`, `H1`, ... with no fixed upper bound
//!
//! # Quick Start
//!
//! ## Decode and Query
//!
//! ```
//! use zonetemp_lib::monitor::TemperatureMonitor;
//!
//! let monitor = TemperatureMonitor::new();
//! monitor.ingest("ok T:25.0 B:25.0 H0:25.0 H1:25.0");
//!
//! let snapshot = monitor.snapshot();
//! assert_eq!(snapshot.keys(), vec!["tool0", "bed", "H0", "H1"]);
//! assert_eq!(snapshot.get("H1").unwrap().target, None);
//! ```
//!
//! ## Push Updates
//!
//! ```
//! use zonetemp_lib::monitor::TemperatureMonitor;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let monitor = TemperatureMonitor::new();
//!     let mut events = monitor.subscribe();
//!
//!     monitor.ingest("ok B:60.2 /60.0");
//!
//!     let event = events.recv().await.unwrap();
//!     println!("{}", serde_json::to_string(&event).unwrap());
//! }
//! ```
//!
//! ## Building Blocks
//!
//! The pieces behind the monitor are usable on their own:
//!
//! ```
//! use chrono::Utc;
//! use zonetemp_lib::projection::{project_event, project_snapshot};
//! use zonetemp_lib::state::{ZoneOffsets, ZoneStore};
//! use zonetemp_lib::telemetry::decode_line;
//! use zonetemp_lib::types::ZoneId;
//!
//! let store = ZoneStore::new();
//! store.apply(&decode_line("ok T:10"));
//! store.apply(&decode_line("ok T0:20"));
//! assert_eq!(store.all_identifiers().len(), 1);
//!
//! let offsets = ZoneOffsets::new().with_offset(ZoneId::Tool(0), 3.0).unwrap();
//! let snapshot = project_snapshot(&store, &offsets);
//! assert_eq!(snapshot.get("tool0").unwrap().actual, 20.0);
//!
//! let event = project_event(&store, Utc::now());
//! assert_eq!(event.len(), 1);
//! ```

pub mod error;
pub mod event;
pub mod monitor;
pub mod projection;
pub mod state;
pub mod telemetry;
pub mod types;

pub use error::{Error, ParseError, Result, ValueError};
pub use event::{EventBus, TemperatureEvent};
pub use monitor::{MonitorConfig, TemperatureMonitor};
pub use projection::{Clock, FixedClock, Snapshot, SystemClock, ZoneSnapshot};
pub use state::{OffsetProvider, SharedOffsets, ZoneOffsets, ZoneStore};
pub use telemetry::decode_line;
pub use types::{Reading, ZoneId};
