// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone state management types.
//!
//! The [`ZoneStore`] keeps the latest [`Reading`](crate::types::Reading) for
//! every zone ever decoded, while [`ZoneOffsets`] holds the per-zone offsets
//! reported alongside snapshots.
//!
//! # Examples
//!
//! ```
//! use zonetemp_lib::state::ZoneStore;
//! use zonetemp_lib::telemetry::decode_line;
//! use zonetemp_lib::types::{Reading, ZoneId};
//!
//! let store = ZoneStore::new();
//! store.apply(&decode_line("ok T:210.0 /210.0 B:60.0"));
//!
//! assert_eq!(store.get(ZoneId::Tool(0)), Some(Reading::with_target(210.0, 210.0)));
//! assert_eq!(store.len(), 2);
//! ```

mod offsets;
mod zone_store;

pub use offsets::{OffsetProvider, SharedOffsets, ZoneOffsets};
pub use zone_store::ZoneStore;
