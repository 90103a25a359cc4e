use super::required_str;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::session::{profile_from_value, Session};
use serde_json::json;

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let access_token = match required_str(req, "accessToken") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if access_token.trim().is_empty() {
        return err(&req.id, "bad_params", "accessToken must not be empty", None);
    }

    // A missing or null profile is the degraded-login path (the UI's
    // profile fetch failed); a malformed one is a caller bug.
    let profile = match req.params.get("profile") {
        None | Some(serde_json::Value::Null) => None,
        Some(v) => match profile_from_value(v) {
            Ok(p) => Some(p),
            Err(e) => return err(&req.id, "bad_params", format!("{e:#}"), None),
        },
    };

    let session = Session::establish(&access_token, profile);
    let summary = session.summary();
    state.session = Some(session);
    ok(&req.id, summary)
}

fn handle_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    let had_session = state.session.take().is_some();
    // Screen state is per-user view state; it does not outlive the session.
    state.screens.clear();
    ok(&req.id, json!({ "hadSession": had_session }))
}

fn handle_current(state: &mut AppState, req: &Request) -> serde_json::Value {
    match state.session.as_ref() {
        Some(session) => ok(&req.id, session.summary()),
        None => err(&req.id, "no_session", "not logged in", None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "session.login" => Some(handle_login(state, req)),
        "session.logout" => Some(handle_logout(state, req)),
        "session.current" => Some(handle_current(state, req)),
        _ => None,
    }
}
