//! Checks the embedded demo fixture against the schema generated from the store types.

use schemars::schema_for;
use gw_core::RecordStore;
use gw_core::store::DEMO_FIXTURE;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn demo_fixture_matches_store_schema() {
    let schema = serde_json::to_value(schema_for!(RecordStore)).unwrap();
    let instance: serde_json::Value = serde_json::from_str(DEMO_FIXTURE).unwrap();

    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "demo fixture violates schema: {errors:?}");
}

#[test]
fn schema_rejects_unknown_task_status() {
    let schema = serde_json::to_value(schema_for!(RecordStore)).unwrap();
    let instance = serde_json::json!({
        "tasks": [{
            "id": "task-x",
            "title": "Something",
            "status": "blocked",
            "assignee": "Nobody",
            "project_id": "bloemhof",
            "priority": "low"
        }]
    });

    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}

#[test]
fn serialized_demo_store_reloads_identically() {
    let store = RecordStore::demo().unwrap();
    let json = serde_json::to_string(&store).unwrap();
    let reloaded = RecordStore::from_json(&json).unwrap();
    pretty_assertions::assert_eq!(reloaded, store);
}
