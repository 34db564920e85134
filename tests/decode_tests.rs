use feedly::boards::Board;
use feedly::entries::Entry;
use feedly::error::relevant_error;
use feedly::{ApiError, Error, Time};
use serde_json::json;

#[test]
fn test_unknown_fields_survive_a_round_trip() {
    let wire = json!({
        "id": "user/abcd/tag/global.saved",
        "label": "Saved for later",
        "created": 1609459200000i64,
        "someFutureField": {"nested": [1, 2, 3]}
    });

    let board: Board = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(
        board.unmapped_fields.get("someFutureField"),
        Some(&json!({"nested": [1, 2, 3]}))
    );

    // Declared and undeclared fields re-serialize to the original payload
    assert_eq!(serde_json::to_value(&board).unwrap(), wire);
}

#[test]
fn test_declared_fields_are_not_duplicated_in_the_bag() {
    let wire = json!({"id": "abc", "created": 1609459200000i64, "extra": "x"});

    let board: Board = serde_json::from_value(wire).unwrap();
    assert_eq!(board.id.as_deref(), Some("abc"));
    assert_eq!(board.created.unwrap().unix(), 1609459200);
    assert!(!board.unmapped_fields.contains_key("id"));
    assert!(!board.unmapped_fields.contains_key("created"));
    assert_eq!(board.unmapped_fields.get("extra"), Some(&json!("x")));
}

#[test]
fn test_sequences_decode_in_input_order() {
    let wire = json!([
        {"id": "entry/3"},
        {"id": "entry/1"},
        {"id": "entry/2"}
    ]);

    let entries: Vec<Entry> = serde_json::from_value(wire).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.id.as_deref().unwrap()).collect();
    assert_eq!(ids, ["entry/3", "entry/1", "entry/2"]);
}

#[test]
fn test_shape_mismatch_is_a_decode_error() {
    let result: Result<Board, _> = serde_json::from_value(json!({"label": 42}));
    assert!(result.is_err());
}

#[test]
fn test_timestamps_truncate_to_whole_seconds() {
    let time = Time::from_unix_milli(1609459200987);
    assert_eq!(time.unix(), 1609459200);
    assert_eq!(time.unix_milli(), 1609459200000);
}

#[test]
fn test_timestamp_round_trip_on_whole_seconds() {
    let encoded = serde_json::to_value(Time::from_unix(1609459200)).unwrap();
    assert_eq!(encoded, json!(1609459200000i64));

    let decoded: Time = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, Time::from_unix(1609459200));
}

#[test]
fn test_out_of_range_timestamp_is_a_decode_error_not_a_panic() {
    let result: Result<Time, _> = serde_json::from_str("9000000000000000000");
    assert!(result.is_err());

    // The same value inside a model fails the whole decode
    let wire = json!({"id": "abc", "created": 9000000000000000000i64});
    let result: Result<Board, _> = serde_json::from_value(wire);
    assert!(result.is_err());
}

#[test]
fn test_relevant_error_prefers_transport_errors() {
    let api_error = ApiError {
        error_id: "401".to_string(),
        error_message: "token expired".to_string(),
    };

    let err = relevant_error(
        Some(Error::RequestBuild("connection reset".to_string())),
        api_error.clone(),
        None,
    )
    .unwrap();
    assert!(matches!(err, Error::RequestBuild(_)));

    let err = relevant_error(None, api_error, None).unwrap();
    assert_eq!(err.to_string(), "401: token expired");

    assert!(relevant_error(None, ApiError::default(), None).is_none());
}
