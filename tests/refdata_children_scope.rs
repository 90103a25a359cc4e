
use serde_json::json;
use test_support::{load_faculty_chain, request_ok, spawn_sidecar};

fn ids(result: &serde_json::Value) -> Vec<String> {
    result
        .get("entities")
        .and_then(|v| v.as_array())
        .expect("entities array")
        .iter()
        .map(|e| e.get("id").and_then(|v| v.as_str()).expect("id").to_string())
        .collect()
}

#[test]
fn empty_parent_returns_all_in_load_order() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "refdata.children",
        json!({ "level": "department" }),
    );
    assert_eq!(ids(&result), ["D1", "D2"]);
    assert_eq!(result.get("defaultId"), Some(&json!("D1")));
}

#[test]
fn set_parent_filters_exactly() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "refdata.children",
        json!({ "level": "department", "parentId": "F2" }),
    );
    assert_eq!(ids(&result), ["D2"]);
    assert_eq!(result.get("defaultId"), Some(&json!("D2")));
}

#[test]
fn dangling_parent_yields_empty_default() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "refdata.children",
        json!({ "level": "department", "parentId": "F404" }),
    );
    assert!(ids(&result).is_empty());
    assert_eq!(result.get("defaultId"), Some(&json!("")));
}

#[test]
fn unloaded_level_reads_as_empty() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "refdata.children",
        json!({ "level": "survey" }),
    );
    assert!(ids(&result).is_empty());
    assert_eq!(result.get("defaultId"), Some(&json!("")));
}

#[test]
fn option_labels_combine_code_and_name() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "refdata.children",
        json!({ "level": "course", "parentId": "D1" }),
    );
    let label = result
        .pointer("/entities/0/optionLabel")
        .and_then(|v| v.as_str());
    assert_eq!(label, Some("CENG301 - Algorithms"));
}

#[test]
fn reloading_a_level_replaces_it() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "refdata.set",
        json!({
            "level": "department",
            "entities": [
                { "id": "D9", "displayLabel": "Biomedical", "parentId": "F2" }
            ]
        }),
    );
    let result = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "refdata.children",
        json!({ "level": "department" }),
    );
    assert_eq!(ids(&result), ["D9"]);
}
