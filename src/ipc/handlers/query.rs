use super::required_str;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::query::QuerySpec;
use serde_json::json;

fn handle_build(state: &mut AppState, req: &Request) -> serde_json::Value {
    let screen_id = match required_str(req, "screenId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(screen) = state.screens.get(&screen_id) else {
        return err(&req.id, "no_screen", "screen not initialized", None);
    };

    let spec = QuerySpec::from_screen(&screen.spec, &screen.selection, &screen.semester);
    ok(&req.id, json!({ "params": spec.params() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "query.build" => Some(handle_build(state, req)),
        _ => None,
    }
}
