// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ZoneTemp` library.
//!
//! The decode, apply and projection path never fails: malformed tokens are
//! dropped and the rest of the line still counts. The errors here cover the
//! surrounding surface only: parsing display keys, loading offsets and
//! validating configuration.

use thiserror::Error;

use crate::types::ZoneId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing configuration input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A display key does not name any known zone.
    #[error("unknown zone key: {0}")]
    UnknownZoneKey(String),

    /// An offset is NaN or infinite.
    #[error("offset {value} for zone {zone} is not a finite number")]
    NonFiniteOffset {
        /// The zone the offset was meant for.
        zone: ZoneId,
        /// The rejected value.
        value: f64,
    },

    /// A channel capacity of zero was requested.
    #[error("event capacity must be greater than zero")]
    ZeroCapacity,
}

/// Errors related to parsing configuration documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::NonFiniteOffset {
            zone: ZoneId::Bed,
            value: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "offset inf for zone bed is not a finite number"
        );
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::UnknownZoneKey("tool".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::UnknownZoneKey(_))));
    }

    #[test]
    fn parse_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = ParseError::from(json_err).into();
        assert!(err.to_string().starts_with("parse error: JSON parse error"));
    }
}
