use super::required_str;
use crate::cascade::{apply_change, init_selection, HierarchySpec};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request, ScreenState};
use serde_json::json;

/// Pseudo-level handled outside the entity chain: changing the semester
/// never resets faculty/department/course choices.
const SEMESTER_LEVEL: &str = "semester";

fn screen_result(screen: &ScreenState) -> serde_json::Value {
    json!({
        "levels": screen.spec.levels(),
        "semester": screen.semester,
        "selection": screen.selection.as_json(&screen.spec),
    })
}

fn handle_init(state: &mut AppState, req: &Request) -> serde_json::Value {
    let screen_id = match required_str(req, "screenId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let levels: Vec<String> = match req.params.get("levels") {
        Some(v) => match serde_json::from_value(v.clone()) {
            Ok(l) => l,
            Err(e) => return err(&req.id, "bad_params", format!("levels: {e}"), None),
        },
        None => return err(&req.id, "bad_params", "missing levels", None),
    };
    if levels.iter().any(|l| l == SEMESTER_LEVEL) {
        return err(
            &req.id,
            "bad_params",
            "semester is not a hierarchy level",
            None,
        );
    }

    let spec = match HierarchySpec::new(levels) {
        Ok(s) => s,
        Err(e) => return err(&req.id, &e.code, e.message, None),
    };
    let semester = req
        .params
        .get(SEMESTER_LEVEL)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let selection = init_selection(&spec, &state.store);
    let screen = ScreenState {
        spec,
        selection,
        semester,
    };
    let result = screen_result(&screen);
    state.screens.insert(screen_id, screen);
    ok(&req.id, result)
}

fn handle_change(state: &mut AppState, req: &Request) -> serde_json::Value {
    let screen_id = match required_str(req, "screenId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let level = match required_str(req, "level") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let value = req
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let AppState { screens, store, .. } = state;
    let Some(screen) = screens.get_mut(&screen_id) else {
        return err(&req.id, "no_screen", "screen not initialized", None);
    };

    if level == SEMESTER_LEVEL {
        screen.semester = value;
        return ok(&req.id, screen_result(screen));
    }

    match apply_change(&screen.spec, store, &screen.selection, &level, &value) {
        Ok(next) => {
            screen.selection = next;
            ok(&req.id, screen_result(screen))
        }
        Err(e) => err(&req.id, &e.code, e.message, None),
    }
}

fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let screen_id = match required_str(req, "screenId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.screens.get(&screen_id) {
        Some(screen) => ok(&req.id, screen_result(screen)),
        None => err(&req.id, "no_screen", "screen not initialized", None),
    }
}

fn handle_close(state: &mut AppState, req: &Request) -> serde_json::Value {
    let screen_id = match required_str(req, "screenId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let closed = state.screens.remove(&screen_id).is_some();
    ok(&req.id, json!({ "closed": closed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "screens.init" => Some(handle_init(state, req)),
        "screens.close" => Some(handle_close(state, req)),
        "filters.change" => Some(handle_change(state, req)),
        "filters.get" => Some(handle_get(state, req)),
        _ => None,
    }
}
