use pretty_assertions::assert_eq;
use serde_json::json;
use timer_rollup::aggregator::AggregateTimer;
use timer_rollup::parser::{decode_aggregate, AggregateTimerRecord, ExecutionTimer};
use timer_rollup::utils::ParseError;

#[test]
fn test_decode_missing_count_fails() {
    let result = serde_json::from_value::<AggregateTimer>(json!({ "totalMicros": 5 }));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("count"));
}

#[test]
fn test_decode_missing_total_fails() {
    let result = decode_aggregate(r#"{ "count": 5 }"#);
    assert!(matches!(result, Err(ParseError::MissingField("totalMicros"))));
}

#[test]
fn test_decode_null_nested_entry_fails() {
    let result = serde_json::from_value::<AggregateTimer>(json!({
        "totalMicros": 5,
        "count": 1,
        "nestedTimers": [
            { "name": "sql", "totalMicros": 1, "count": 1 },
            null
        ]
    }));
    assert!(result.is_err());
}

#[test]
fn test_decode_missing_extended_defaults_to_false() {
    let timer: AggregateTimer = serde_json::from_value(json!({
        "totalMicros": 5,
        "count": 1,
        "nestedTimers": [{ "name": "sql", "totalMicros": 1, "count": 1 }]
    }))
    .unwrap();

    assert!(!timer.nested_timers()[0].is_extended());
    assert!(timer.nested_timers()[0].nested_timers().is_empty());
}

#[test]
fn test_decoded_nested_null_name_is_rejected_deep_in_tree() {
    let record: AggregateTimerRecord = serde_json::from_value(json!({
        "totalMicros": 5,
        "count": 1,
        "nestedTimers": [{
            "name": "request", "totalMicros": 5, "count": 1,
            "nestedTimers": [{ "name": null, "totalMicros": 1, "count": 1 }]
        }]
    }))
    .unwrap();

    let result = AggregateTimer::try_from(record);
    assert!(matches!(result, Err(ParseError::AnonymousTimer { .. })));
}

#[test]
fn test_decode_duplicate_nested_timers_fails() {
    let result = serde_json::from_value::<AggregateTimer>(json!({
        "totalMicros": 2,
        "count": 2,
        "nestedTimers": [{
            "name": "request", "totalMicros": 2, "count": 2,
            "nestedTimers": [
                { "name": "sql", "totalMicros": 1, "count": 1 },
                { "name": "sql", "totalMicros": 1, "count": 1 }
            ]
        }]
    }));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Duplicate nested timer 'sql'"));
}

#[test]
fn test_encode_then_decode_preserves_tree() {
    let mut root = AggregateTimer::create_synthetic_root();
    root.incorporate(
        &ExecutionTimer::new("request", 10_000, 1)
            .with_nested(ExecutionTimer::new("io", 2_000, 3).extended()),
    )
    .unwrap();

    let encoded = serde_json::to_string(&root).unwrap();
    let decoded = decode_aggregate(&encoded).unwrap();

    assert_eq!(decoded, root);
}

#[test]
fn test_decoded_aggregates_merge_like_built_ones() {
    let mut target = decode_aggregate(
        r#"{ "totalMicros": 10, "count": 1,
             "nestedTimers": [{ "name": "request", "totalMicros": 10, "count": 1,
                                "nestedTimers": [{ "name": "sql", "totalMicros": 4, "count": 1 }] }] }"#,
    )
    .unwrap();
    let other = decode_aggregate(
        r#"{ "name": null, "extended": false, "totalMicros": 12, "count": 1,
             "nestedTimers": [{ "name": "request", "totalMicros": 12, "count": 1,
                                "nestedTimers": [{ "name": "sql", "extended": true, "totalMicros": 6, "count": 1 }] }] }"#,
    )
    .unwrap();

    target.merge_from(other).unwrap();

    assert_eq!(
        serde_json::to_value(&target).unwrap(),
        json!({
            "name": null,
            "extended": false,
            "totalMicros": 22,
            "count": 2,
            "nestedTimers": [{
                "name": "request",
                "extended": false,
                "totalMicros": 22,
                "count": 2,
                "nestedTimers": [
                    { "name": "sql", "extended": false, "totalMicros": 4, "count": 1, "nestedTimers": [] },
                    { "name": "sql", "extended": true, "totalMicros": 6, "count": 1, "nestedTimers": [] }
                ]
            }]
        })
    );
}
