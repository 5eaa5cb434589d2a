// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heating zone identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// Identifies one independently tracked heating zone.
///
/// Identifiers are ordered by category first (tools, bed, chamber, filament,
/// secondary heaters) and then by index, which gives projections a stable
/// output order.
///
/// The [`Display`](fmt::Display) form is the display key used by snapshots
/// and events, and [`FromStr`] accepts it back.
///
/// # Examples
///
/// ```
/// use zonetemp_lib::types::ZoneId;
///
/// assert_eq!(ZoneId::Tool(1).to_string(), "tool1");
/// assert_eq!(ZoneId::Secondary(3).to_string(), "H3");
/// assert_eq!("chamber".parse::<ZoneId>().unwrap(), ZoneId::Chamber);
///
/// assert!(ZoneId::Tool(7) < ZoneId::Bed);
/// assert!(ZoneId::Filament < ZoneId::Secondary(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneId {
    /// Extruder-like tool heater, addressed by index.
    Tool(u32),
    /// Heated bed.
    Bed,
    /// Heated chamber.
    Chamber,
    /// Filament dryer.
    Filament,
    /// Auxiliary heater; indices are open-ended.
    Secondary(u32),
}

impl ZoneId {
    /// Returns `true` for the `Tool` family.
    #[must_use]
    pub const fn is_tool(&self) -> bool {
        matches!(self, Self::Tool(_))
    }

    /// Returns `true` for the `Secondary` family.
    #[must_use]
    pub const fn is_secondary(&self) -> bool {
        matches!(self, Self::Secondary(_))
    }

    /// Returns the index for indexed zones, `None` for singletons.
    #[must_use]
    pub const fn index(&self) -> Option<u32> {
        match self {
            Self::Tool(index) | Self::Secondary(index) => Some(*index),
            Self::Bed | Self::Chamber | Self::Filament => None,
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool(index) => write!(f, "tool{index}"),
            Self::Bed => f.write_str("bed"),
            Self::Chamber => f.write_str("chamber"),
            Self::Filament => f.write_str("filament"),
            Self::Secondary(index) => write!(f, "H{index}"),
        }
    }
}

impl FromStr for ZoneId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bed" => return Ok(Self::Bed),
            "chamber" => return Ok(Self::Chamber),
            "filament" => return Ok(Self::Filament),
            _ => {}
        }

        if let Some(digits) = s.strip_prefix("tool")
            && let Some(index) = parse_index(digits)
        {
            return Ok(Self::Tool(index));
        }
        if let Some(digits) = s.strip_prefix('H')
            && let Some(index) = parse_index(digits)
        {
            return Ok(Self::Secondary(index));
        }

        Err(ValueError::UnknownZoneKey(s.to_string()))
    }
}

/// Parses a non-empty run of ASCII digits. Signs and whitespace are rejected.
fn parse_index(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl Serialize for ZoneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZoneId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
