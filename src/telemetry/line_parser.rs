// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for temperature report lines.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{Reading, ZoneId};

/// Matches one `<tag><digits>:<actual>[ / <target>]` token.
///
/// `[0-9]` is spelled out because `\d` matches any Unicode digit.
static TEMPERATURE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<tag>B|C|F|T(?P<tool>[0-9]*)|H(?P<heater>[0-9]*)):\s*(?P<actual>[-+]?[0-9]*\.?[0-9]+)(?:\s*/?\s*(?P<target>[-+]?[0-9]*\.?[0-9]+))?",
    )
    .expect("temperature token pattern is valid")
});

/// Decodes every temperature token found in a report line.
///
/// Tokens may appear in any order and be surrounded by arbitrary text such
/// as a leading `ok`. Each token is validated on its own: a malformed token
/// is dropped and the rest of the line still decodes.
///
/// A bare `T` is the legacy single-tool form and maps to
/// [`ZoneId::Tool(0)`](ZoneId::Tool). A bare `H` has no index and is dropped.
///
/// When the same zone appears more than once, the last reading wins and the
/// zone keeps the position of its first occurrence.
///
/// # Examples
///
/// ```
/// use zonetemp_lib::telemetry::decode_line;
/// use zonetemp_lib::types::{Reading, ZoneId};
///
/// let readings = decode_line("ok T:200.1 /200.0 B:60.2 /60.0 H0:75.2");
///
/// assert_eq!(
///     readings,
///     vec![
///         (ZoneId::Tool(0), Reading::with_target(200.1, 200.0)),
///         (ZoneId::Bed, Reading::with_target(60.2, 60.0)),
///         (ZoneId::Secondary(0), Reading::new(75.2)),
///     ]
/// );
///
/// assert!(decode_line("ok").is_empty());
/// ```
#[must_use]
pub fn decode_line(line: &str) -> Vec<(ZoneId, Reading)> {
    let mut readings: Vec<(ZoneId, Reading)> = Vec::new();

    for captures in TEMPERATURE_TOKEN.captures_iter(line) {
        let Some((zone, reading)) = decode_token(&captures) else {
            tracing::trace!(token = %&captures[0], "Dropping malformed temperature token");
            continue;
        };

        if let Some(slot) = readings.iter_mut().find(|(known, _)| *known == zone) {
            slot.1 = reading;
        } else {
            readings.push((zone, reading));
        }
    }

    if readings.is_empty() {
        tracing::trace!(line = %line, "No temperature tokens in line");
    }

    readings
}

/// Validates one regex match. Returns `None` for tokens that must be dropped.
fn decode_token(captures: &Captures<'_>) -> Option<(ZoneId, Reading)> {
    let zone = zone_for(captures)?;

    let actual = captures.name("actual")?.as_str().parse::<f64>().ok()?;
    let target = match captures.name("target") {
        Some(target) => Some(target.as_str().parse::<f64>().ok()?),
        None => None,
    };

    Some((zone, Reading::from_parts(actual, target)))
}

fn zone_for(captures: &Captures<'_>) -> Option<ZoneId> {
    if let Some(digits) = captures.name("tool") {
        return if digits.as_str().is_empty() {
            Some(ZoneId::Tool(0))
        } else {
            digits.as_str().parse().ok().map(ZoneId::Tool)
        };
    }

    if let Some(digits) = captures.name("heater") {
        return if digits.as_str().is_empty() {
            None
        } else {
            digits.as_str().parse().ok().map(ZoneId::Secondary)
        };
    }

    match captures.name("tag")?.as_str() {
        "B" => Some(ZoneId::Bed),
        "C" => Some(ZoneId::Chamber),
        "F" => Some(ZoneId::Filament),
        _ => None,
    }
}
