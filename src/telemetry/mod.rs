// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature report decoding.
//!
//! Heater firmware answers a temperature query with a single line listing
//! every zone it controls:
//!
//! ```text
//! ok T0:200.1 /200.0 T1:200.3 /200.0 B:60.2 /60.0 C:35.0 /40.0 H0:75.2 /75.0
//! ```
//!
//! | Tag      | Zone                              |
//! |----------|-----------------------------------|
//! | `T`      | Tool 0 (legacy single-tool form)  |
//! | `T<n>`   | Tool `n`                          |
//! | `B`      | Bed                               |
//! | `C`      | Chamber                           |
//! | `F`      | Filament dryer                    |
//! | `H<n>`   | Secondary heater `n`              |
//!
//! Each token carries the actual temperature and, optionally, the target
//! after a `/`. Decoding is tolerant: anything that is not a well-formed
//! token is skipped, so a line never fails as a whole.
//!
//! # Examples
//!
//! ```
//! use zonetemp_lib::telemetry::decode_line;
//! use zonetemp_lib::types::ZoneId;
//!
//! let readings = decode_line("ok T:25.0 B:25.0 H0:25.0 H1:25.0");
//! assert_eq!(readings.len(), 4);
//! assert!(readings.iter().all(|(_, reading)| reading.target().is_none()));
//! assert_eq!(readings[3].0, ZoneId::Secondary(1));
//! ```

mod line_parser;

pub use line_parser::decode_line;
