//! Purpose: Behavioral coverage for the generic record encoder/decoder.
//! Exports: Integration tests only.
//! Role: Lock omission, tolerance, and round-trip guarantees through the public codec API.
//! Invariants: Assertions compare parsed `serde_json::Value`s where key order is not the point.

use std::collections::BTreeMap;

use serde_json::{Value, json};
use switchboard::codec::{self, Record};
use switchboard::model::{
    DescribeUserResult, GetMetricDataRequest, HistoricalMetric, ListQueuesResult, QueueSummary,
    Threshold, User, UserIdentityInfo, UserPhoneConfig,
};
use switchboard::record;
use time::macros::datetime;

record! {
    struct QueueDraft {
        "Name" => name: String,
        "Description" => description: String,
        "Tags" => tags: BTreeMap<String, String>,
    }
}

record! {
    struct Roster {
        "Members" => members: Vec<Option<String>>,
        "Weights" => weights: BTreeMap<String, Option<i64>>,
    }
}

fn encode_value<T: codec::Encode>(value: &T) -> Value {
    let bytes = codec::to_vec(value).expect("encode");
    serde_json::from_slice(&bytes).expect("valid json")
}

fn sample_user() -> User {
    let mut tags = BTreeMap::new();
    tags.insert("team".to_string(), "support".to_string());
    User {
        id: Some("u-1".to_string()),
        arn: Some("arn:aws:connect:us-east-1:1:instance/i1/agent/u-1".to_string()),
        username: Some("jdoe".to_string()),
        identity_info: Some(UserIdentityInfo {
            first_name: Some("Jo".to_string()),
            last_name: Some("Doe".to_string()),
            email: None,
        }),
        phone_config: Some(UserPhoneConfig {
            phone_type: Some("SOFT_PHONE".to_string()),
            auto_accept: Some(false),
            after_contact_work_time_limit: Some(30),
            desk_phone_number: None,
        }),
        security_profile_ids: Some(vec!["sp-1".to_string(), "sp-2".to_string()]),
        tags: Some(tags),
        ..User::default()
    }
}

#[test]
fn name_and_tags_scenario_encodes_exactly() {
    let mut tags = BTreeMap::new();
    tags.insert("env".to_string(), "prod".to_string());
    let draft = QueueDraft {
        name: Some("Q1".to_string()),
        description: None,
        tags: Some(tags.clone()),
    };

    let json = codec::to_string(&draft).expect("encode");
    assert_eq!(json, r#"{"Name":"Q1","Tags":{"env":"prod"}}"#);

    let decoded: QueueDraft = codec::from_slice(json.as_bytes())
        .expect("decode")
        .expect("record");
    assert_eq!(decoded.name.as_deref(), Some("Q1"));
    assert_eq!(decoded.description, None);
    assert_eq!(decoded.tags, Some(tags));
}

#[test]
fn nested_user_round_trips() {
    let user = sample_user();
    let wrapped = DescribeUserResult {
        user: Some(user.clone()),
    };
    let bytes = codec::to_vec(&wrapped).expect("encode");
    let decoded: DescribeUserResult = codec::from_slice(&bytes).expect("decode").expect("record");
    assert_eq!(decoded.user, Some(user));
}

#[test]
fn unset_fields_emit_no_keys() {
    let value = encode_value(&sample_user());
    let object = value.as_object().expect("object");
    for field in User::fields() {
        let present = (field.get)(&sample_user()).is_some();
        assert_eq!(object.contains_key(field.name), present, "{}", field.name);
    }
    assert!(!value.to_string().contains("null"));
    assert_eq!(value["IdentityInfo"], json!({"FirstName": "Jo", "LastName": "Doe"}));
}

#[test]
fn empty_record_encodes_as_empty_object() {
    assert_eq!(codec::to_string(&User::default()).expect("encode"), "{}");
}

#[test]
fn unknown_keys_are_ignored() {
    let plain = json!({
        "QueueSummaryList": [{"Id": "q1", "Name": "Support", "QueueType": "STANDARD"}],
        "NextToken": "t1"
    });
    let noisy = json!({
        "QueueSummaryList": [{
            "Id": "q1",
            "Name": "Support",
            "QueueType": "STANDARD",
            "LastModifiedTime": 1700000000,
            "Extra": {"deep": [1, 2, {"x": null}]}
        }],
        "NextToken": "t1",
        "ApproximateTotalCount": 1
    });
    let expected: ListQueuesResult = codec::from_value(plain).expect("decode").expect("record");
    let tolerant: ListQueuesResult = codec::from_value(noisy).expect("decode").expect("record");
    assert_eq!(tolerant, expected);
}

#[test]
fn key_matching_is_case_sensitive() {
    let decoded: QueueSummary = codec::from_value(json!({"id": "lower", "Id": "upper"}))
        .expect("decode")
        .expect("record");
    assert_eq!(decoded.id.as_deref(), Some("upper"));
}

#[test]
fn null_list_elements_and_map_values_are_skipped() {
    let mut weights = BTreeMap::new();
    weights.insert("a".to_string(), Some(1));
    weights.insert("b".to_string(), None);
    let roster = Roster {
        members: Some(vec![Some("x".to_string()), None, Some("y".to_string())]),
        weights: Some(weights),
    };
    let value = encode_value(&roster);
    let members = value["Members"].as_array().expect("array");
    assert_eq!(members.len(), 2);
    assert_eq!(value["Weights"], json!({"a": 1}));
}

#[test]
fn scalar_documents_decode_to_absent() {
    for document in [
        b"\"foo\"".as_slice(),
        b"42".as_slice(),
        b"true".as_slice(),
        b"null".as_slice(),
    ] {
        let decoded: Option<QueueSummary> = codec::from_slice(document).expect("decode");
        assert!(decoded.is_none());
    }
}

#[test]
fn metric_request_keeps_declared_order_and_timestamps() {
    let request = GetMetricDataRequest {
        instance_id: Some("i1".to_string()),
        start_time: Some(datetime!(2024-03-01 00:00:00 UTC)),
        end_time: Some(datetime!(2024-03-01 00:05:00.5 UTC)),
        historical_metrics: Some(vec![HistoricalMetric {
            name: Some("CONTACTS_HANDLED".to_string()),
            threshold: Some(Threshold {
                comparison: Some("LT".to_string()),
                threshold_value: Some(20.0),
            }),
            statistic: Some("SUM".to_string()),
            unit: Some("COUNT".to_string()),
        }]),
        max_results: Some(10),
        ..GetMetricDataRequest::default()
    };
    let json = codec::to_string(&request).expect("encode");
    assert_eq!(
        json,
        concat!(
            r#"{"StartTime":1709251200,"EndTime":1709251500.5,"#,
            r#""HistoricalMetrics":[{"Name":"CONTACTS_HANDLED","#,
            r#""Threshold":{"Comparison":"LT","ThresholdValue":20.0},"#,
            r#""Statistic":"SUM","Unit":"COUNT"}],"MaxResults":10}"#
        )
    );
}
