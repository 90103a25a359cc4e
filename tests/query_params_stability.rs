
use serde_json::json;
use test_support::{load_faculty_chain, request_ok, spawn_sidecar};

#[test]
fn params_follow_the_current_selection() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "screens.init",
        json!({
            "screenId": "course-averages",
            "levels": ["faculty", "department", "course"],
            "semester": "FALL24"
        }),
    );
    let built = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "query.build",
        json!({ "screenId": "course-averages" }),
    );
    assert_eq!(
        built.get("params"),
        Some(&json!({
            "semester": "FALL24",
            "facultyId": "F1",
            "departmentId": "D1",
            "courseId": "C1"
        }))
    );

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "filters.change",
        json!({ "screenId": "course-averages", "level": "faculty", "value": "F2" }),
    );
    let built = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "query.build",
        json!({ "screenId": "course-averages" }),
    );
    assert_eq!(
        built.get("params"),
        Some(&json!({
            "semester": "FALL24",
            "facultyId": "F2",
            "departmentId": "D2",
            "courseId": "C2"
        }))
    );
}

#[test]
fn all_selections_are_omitted_from_params() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "screens.init",
        json!({
            "screenId": "course-averages",
            "levels": ["faculty", "department", "course"]
        }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "filters.change",
        json!({ "screenId": "course-averages", "level": "faculty", "value": "" }),
    );
    let built = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "query.build",
        json!({ "screenId": "course-averages" }),
    );
    assert_eq!(built.get("params"), Some(&json!({})));
}

#[test]
fn repeated_builds_are_byte_identical() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    load_faculty_chain(&mut stdin, &mut reader);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "screens.init",
        json!({
            "screenId": "course-averages",
            "levels": ["faculty", "department", "course"],
            "semester": "SPRING25"
        }),
    );
    let a = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "query.build",
        json!({ "screenId": "course-averages" }),
    );
    let b = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "query.build",
        json!({ "screenId": "course-averages" }),
    );
    assert_eq!(
        serde_json::to_string(&a).expect("json"),
        serde_json::to_string(&b).expect("json")
    );
}
