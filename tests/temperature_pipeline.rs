// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the decode, store and projection pipeline.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{TimeZone, Utc};
use zonetemp_lib::projection::{FixedClock, project_event, project_snapshot};
use zonetemp_lib::state::{SharedOffsets, ZoneOffsets, ZoneStore};
use zonetemp_lib::telemetry::decode_line;
use zonetemp_lib::types::{Reading, ZoneId};
use zonetemp_lib::{MonitorConfig, TemperatureMonitor};

const FULL_REPORT: &str = "ok T0:200.1 /200.0 T1:200.3 /200.0 B:60.2 /60.0 C:35.0 /40.0 \
                           F:55.1 /55.0 H0:75.2 /75.0 H1:50.1 /50.0";

fn as_map(readings: Vec<(ZoneId, Reading)>) -> BTreeMap<ZoneId, Reading> {
    readings.into_iter().collect()
}

// ============================================================================
// Decoding
// ============================================================================

mod decoding {
    use super::*;

    #[test]
    fn permuting_tokens_yields_same_batch() {
        let lines = [
            "ok T0:200.1 /200.0 B:60.2 /60.0 C:35.0 H1:50.1 /50.0",
            "ok H1:50.1 /50.0 C:35.0 T0:200.1 /200.0 B:60.2 /60.0",
            "ok B:60.2 /60.0 H1:50.1 /50.0 T0:200.1 /200.0 C:35.0",
        ];

        let expected = as_map(decode_line(lines[0]));
        assert_eq!(expected.len(), 4);
        for line in &lines[1..] {
            assert_eq!(as_map(decode_line(line)), expected, "line: {line}");
        }
    }

    #[test]
    fn duplicate_tag_last_match_wins() {
        assert_eq!(
            decode_line("T0:1 /1 T0:2 /2"),
            vec![(ZoneId::Tool(0), Reading::with_target(2.0, 2.0))]
        );
    }

    #[test]
    fn missing_targets_are_not_fabricated() {
        let decoded = as_map(decode_line("ok T:25.0 B:25.0 H0:25.0 H1:25.0"));

        let expected: BTreeMap<_, _> = [
            (ZoneId::Tool(0), Reading::new(25.0)),
            (ZoneId::Bed, Reading::new(25.0)),
            (ZoneId::Secondary(0), Reading::new(25.0)),
            (ZoneId::Secondary(1), Reading::new(25.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(decoded, expected);
    }

    #[test]
    fn secondary_heaters_are_unbounded_and_distinct_from_tools() {
        let decoded = as_map(decode_line(
            "ok T0:1 T1:1 T2:1 T3:1 H0:2 H1:2 H2:2 H3:2",
        ));

        let secondary: BTreeSet<_> = decoded.keys().filter(|z| z.is_secondary()).collect();
        assert_eq!(secondary.len(), 4);
        for index in 0..4 {
            assert_eq!(decoded[&ZoneId::Tool(index)], Reading::new(1.0));
            assert_eq!(decoded[&ZoneId::Secondary(index)], Reading::new(2.0));
        }

        let high = decode_line("ok H17:90.0 /95.0");
        assert_eq!(high, vec![(ZoneId::Secondary(17), Reading::with_target(90.0, 95.0))]);
    }
}

// ============================================================================
// Store
// ============================================================================

mod store {
    use super::*;

    #[test]
    fn applying_same_batch_twice_is_idempotent() {
        let batch = decode_line(FULL_REPORT);

        let once = ZoneStore::new();
        once.apply(&batch);

        let twice = ZoneStore::new();
        twice.apply(&batch);
        twice.apply(&batch);

        assert_eq!(once.readings(), twice.readings());
    }

    #[test]
    fn legacy_bare_t_is_tool_zero() {
        let store = ZoneStore::new();
        store.apply(&decode_line("T:10"));
        store.apply(&decode_line("T0:20"));

        assert_eq!(store.all_identifiers(), BTreeSet::from([ZoneId::Tool(0)]));
        assert_eq!(store.get(ZoneId::Tool(0)), Some(Reading::new(20.0)));
    }

    #[test]
    fn fresh_store_has_no_zones() {
        let store = ZoneStore::new();

        assert!(store.all_identifiers().is_empty());
        assert!(project_snapshot(&store, &ZoneOffsets::new()).is_empty());
        assert!(project_event(&store, Utc::now()).is_empty());
    }

    #[test]
    fn empty_decode_is_noop() {
        let store = ZoneStore::new();
        store.apply(&decode_line(FULL_REPORT));
        let before = store.readings();

        store.apply(&decode_line("ok"));
        store.apply(&decode_line("echo: cold extrusion prevented"));

        assert_eq!(store.readings(), before);
    }

    #[test]
    fn partial_line_keeps_other_zones() {
        let store = ZoneStore::new();
        store.apply(&decode_line(FULL_REPORT));
        store.apply(&decode_line("ok B:61.0 /60.0"));

        assert_eq!(store.len(), 7);
        assert_eq!(store.get(ZoneId::Bed), Some(Reading::with_target(61.0, 60.0)));
        assert_eq!(
            store.get(ZoneId::Tool(1)),
            Some(Reading::with_target(200.3, 200.0))
        );
    }
}

// ============================================================================
// Projections
// ============================================================================

mod projections {
    use super::*;

    #[test]
    fn full_report_snapshot_and_event() {
        let batch = decode_line(FULL_REPORT);
        assert_eq!(batch.len(), 7);

        let store = ZoneStore::new();
        store.apply(&batch);

        let snapshot = project_snapshot(&store, &ZoneOffsets::new());
        assert_eq!(
            snapshot.keys(),
            vec!["tool0", "tool1", "bed", "chamber", "filament", "H0", "H1"]
        );

        let expected = [
            ("tool0", 200.1, 200.0),
            ("tool1", 200.3, 200.0),
            ("bed", 60.2, 60.0),
            ("chamber", 35.0, 40.0),
            ("filament", 55.1, 55.0),
            ("H0", 75.2, 75.0),
            ("H1", 50.1, 50.0),
        ];
        for (key, actual, target) in expected {
            let entry = snapshot.get(key).unwrap();
            assert!((entry.actual - actual).abs() < f64::EPSILON, "{key}");
            assert_eq!(entry.target, Some(target), "{key}");
            assert!(entry.offset.abs() < f64::EPSILON, "{key}");
        }

        let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let event = project_event(&store, time);
        let json = serde_json::to_value(&event).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 8);
        assert_eq!(object["time"], 1_700_000_000);
        for (key, actual, target) in expected {
            assert_eq!(object[key]["actual"], actual, "{key}");
            assert_eq!(object[key]["target"], target, "{key}");
            assert!(object[key].get("offset").is_none(), "{key}");
        }
    }

    #[test]
    fn snapshot_json_shape() {
        let store = ZoneStore::new();
        store.apply(&decode_line("ok T:25.0 H0:25.0"));
        let offsets = ZoneOffsets::from_json(r#"{"tool0": 5}"#).unwrap();

        let json = serde_json::to_value(project_snapshot(&store, &offsets)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tool0": {"actual": 25.0, "target": null, "offset": 5.0},
                "H0": {"actual": 25.0, "target": null, "offset": 0.0},
            })
        );
    }

    #[test]
    fn explicit_zero_target_survives() {
        let store = ZoneStore::new();
        store.apply(&decode_line("ok B:22.0 /0.0"));

        let snapshot = project_snapshot(&store, &SharedOffsets::new());
        assert_eq!(snapshot.get("bed").unwrap().target, Some(0.0));
    }
}

// ============================================================================
// Monitor
// ============================================================================

mod monitor {
    use super::*;

    #[tokio::test]
    async fn push_events_follow_ingestion() {
        let clock = FixedClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        let monitor = TemperatureMonitor::with_config(MonitorConfig::new().with_event_capacity(16))
            .unwrap()
            .with_clock(clock);
        let mut events = monitor.subscribe();

        monitor.ingest("ok");
        monitor.ingest(FULL_REPORT);
        monitor.ingest("ok T0:201.0 /200.0");

        let first = events.recv().await.unwrap();
        assert_eq!(first.len(), 7);
        assert_eq!(first.get("tool0"), Some(&Reading::with_target(200.1, 200.0)));

        let second = events.recv().await.unwrap();
        assert_eq!(second.len(), 7);
        assert_eq!(second.get("tool0"), Some(&Reading::with_target(201.0, 200.0)));

        assert!(events.try_recv().is_err());
    }

    #[test]
    fn snapshot_and_event_agree() {
        let monitor = TemperatureMonitor::new();
        monitor.ingest(FULL_REPORT);

        let snapshot = monitor.snapshot();
        let event = monitor.event();

        let snapshot_keys: Vec<String> = snapshot.keys();
        let event_keys: Vec<String> = event.iter().map(|(zone, _)| zone.to_string()).collect();
        assert_eq!(snapshot_keys, event_keys);
    }
}
