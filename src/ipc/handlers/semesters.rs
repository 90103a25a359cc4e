use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::term::{self, SortOrder};
use serde_json::json;

/// `semesters.list` builds the dropdown universe. Observed terms can be
/// passed directly (`observedTerms`) or extracted from raw course records
/// (`courseRecords`), matching the two ways the dashboard sources them.
fn handle_list(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let reference_year = match req.params.get("referenceYear") {
        None => term::current_year(),
        Some(v) => match v.as_i64() {
            // The window arithmetic needs headroom; anything outside a
            // 4-digit year is a caller mistake, not a calendar.
            Some(y) if (1000..=9999).contains(&y) => y as i32,
            Some(y) => {
                return err(
                    &req.id,
                    "bad_params",
                    "referenceYear must be a 4-digit year",
                    Some(json!({ "referenceYear": y })),
                )
            }
            None => return err(&req.id, "bad_params", "referenceYear must be a number", None),
        },
    };

    let order = match req.params.get("order").and_then(|v| v.as_str()) {
        None => SortOrder::Ascending,
        Some(s) => match SortOrder::parse(s) {
            Some(o) => o,
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    "order must be one of: asc, desc",
                    Some(json!({ "order": s })),
                )
            }
        },
    };

    let mut observed: Vec<String> = Vec::new();
    if let Some(v) = req.params.get("observedTerms") {
        match serde_json::from_value::<Vec<String>>(v.clone()) {
            Ok(mut terms) => observed.append(&mut terms),
            Err(e) => return err(&req.id, "bad_params", format!("observedTerms: {e}"), None),
        }
    }
    if let Some(records) = req.params.get("courseRecords") {
        match term::observed_terms(records) {
            Ok(mut terms) => observed.append(&mut terms),
            Err(e) => return err(&req.id, "bad_params", format!("courseRecords: {e:#}"), None),
        }
    }

    let terms = term::generate(reference_year, &observed, order);
    ok(
        &req.id,
        json!({ "referenceYear": reference_year, "terms": terms }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "semesters.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
