// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for heating zones.
//!
//! # Types
//!
//! - [`ZoneId`] - Tool, bed, chamber, filament or secondary heater identifier
//! - [`Reading`] - Actual temperature with an optional target

mod reading;
mod zone_id;

pub use reading::Reading;
pub use zone_id::ZoneId;
