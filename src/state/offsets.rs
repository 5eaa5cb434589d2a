// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-zone temperature offsets.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result, ValueError};
use crate::types::ZoneId;

/// Offsets configured per zone.
///
/// Zones without an entry have an offset of `0`. Serialized as a JSON object
/// keyed by display key.
///
/// # Examples
///
/// ```
/// use zonetemp_lib::state::ZoneOffsets;
/// use zonetemp_lib::types::ZoneId;
///
/// let offsets = ZoneOffsets::from_json(r#"{"tool0": 5.0, "H1": -1.5}"#).unwrap();
///
/// assert_eq!(offsets.offset(ZoneId::Tool(0)), 5.0);
/// assert_eq!(offsets.offset(ZoneId::Secondary(1)), -1.5);
/// assert_eq!(offsets.offset(ZoneId::Bed), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneOffsets(HashMap<ZoneId, f64>);

impl ZoneOffsets {
    /// Creates an empty offset table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses offsets from a JSON object keyed by display key.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the document is malformed or names an
    /// unknown zone.
    pub fn from_json(json: &str) -> Result<Self> {
        let offsets: Self = serde_json::from_str(json).map_err(ParseError::from)?;
        Ok(offsets)
    }

    /// Adds an offset, builder style.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NonFiniteOffset`] if `value` is NaN or infinite.
    pub fn with_offset(mut self, zone: ZoneId, value: f64) -> std::result::Result<Self, ValueError> {
        self.set(zone, value)?;
        Ok(self)
    }

    /// Sets the offset for a zone.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NonFiniteOffset`] if `value` is NaN or infinite.
    pub fn set(&mut self, zone: ZoneId, value: f64) -> std::result::Result<(), ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NonFiniteOffset { zone, value });
        }
        self.0.insert(zone, value);
        Ok(())
    }

    /// Removes the offset for a zone, returning it if it was set.
    pub fn remove(&mut self, zone: ZoneId) -> Option<f64> {
        self.0.remove(&zone)
    }

    /// Returns the offset for a zone, `0` if none is configured.
    #[must_use]
    pub fn offset(&self, zone: ZoneId) -> f64 {
        self.0.get(&zone).copied().unwrap_or(0.0)
    }

    /// Returns the number of configured offsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no offset is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Source of the offsets used when building a snapshot.
///
/// Snapshot projection asks the provider once per call, so a provider whose
/// contents change over time is always read fresh.
pub trait OffsetProvider: Send + Sync {
    /// Returns the offsets currently in effect.
    fn offsets(&self) -> ZoneOffsets;
}

impl OffsetProvider for ZoneOffsets {
    fn offsets(&self) -> ZoneOffsets {
        self.clone()
    }
}

/// Offsets shared between the configuration side and snapshot readers.
///
/// Clones share the same table.
///
/// # Examples
///
/// ```
/// use zonetemp_lib::state::{OffsetProvider, SharedOffsets};
/// use zonetemp_lib::types::ZoneId;
///
/// let shared = SharedOffsets::new();
/// let reader = shared.clone();
///
/// shared.set(ZoneId::Bed, 2.5).unwrap();
/// assert_eq!(reader.offsets().offset(ZoneId::Bed), 2.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedOffsets {
    inner: Arc<RwLock<ZoneOffsets>>,
}

impl SharedOffsets {
    /// Creates an empty shared table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shared table seeded with `offsets`.
    #[must_use]
    pub fn from_offsets(offsets: ZoneOffsets) -> Self {
        Self {
            inner: Arc::new(RwLock::new(offsets)),
        }
    }

    /// Replaces the whole table.
    pub fn replace(&self, offsets: ZoneOffsets) {
        tracing::debug!(count = offsets.len(), "Replacing zone offsets");
        *self.inner.write() = offsets;
    }

    /// Sets the offset for a single zone.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NonFiniteOffset`] if `value` is NaN or infinite.
    pub fn set(&self, zone: ZoneId, value: f64) -> std::result::Result<(), ValueError> {
        self.inner.write().set(zone, value)?;
        tracing::debug!(zone = %zone, offset = value, "Updated zone offset");
        Ok(())
    }
}

impl OffsetProvider for SharedOffsets {
    fn offsets(&self) -> ZoneOffsets {
        self.inner.read().clone()
    }
}
