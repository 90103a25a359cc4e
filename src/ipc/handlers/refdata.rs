use super::required_str;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::refdata::{resolve_children, ReferenceEntity};
use serde_json::json;

fn handle_set(state: &mut AppState, req: &Request) -> serde_json::Value {
    let level = match required_str(req, "level") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if level.is_empty() {
        return err(&req.id, "bad_params", "level must not be empty", None);
    }
    let raw = match req.params.get("entities") {
        Some(v) => v.clone(),
        None => return err(&req.id, "bad_params", "missing entities", None),
    };
    let entities: Vec<ReferenceEntity> = match serde_json::from_value(raw) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("entities: {e}"),
                Some(json!({ "level": level })),
            )
        }
    };

    let count = entities.len();
    state.store.set_level(&level, entities);
    ok(&req.id, json!({ "level": level, "count": count }))
}

fn handle_levels(state: &mut AppState, req: &Request) -> serde_json::Value {
    let levels: Vec<serde_json::Value> = state
        .store
        .level_counts()
        .into_iter()
        .map(|(name, count)| json!({ "level": name, "count": count }))
        .collect();
    ok(&req.id, json!({ "levels": levels }))
}

fn handle_children(state: &mut AppState, req: &Request) -> serde_json::Value {
    let level = match required_str(req, "level") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let parent_id = req
        .params
        .get("parentId")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    let res = resolve_children(state.store.level(&level), parent_id);
    let entities: Vec<serde_json::Value> = res
        .filtered
        .iter()
        .map(|e| {
            json!({
                "id": e.id,
                "displayLabel": e.display_label,
                "code": e.code,
                "parentId": e.parent_id,
                "optionLabel": e.option_label(),
            })
        })
        .collect();
    ok(
        &req.id,
        json!({ "entities": entities, "defaultId": res.default_id }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "refdata.set" => Some(handle_set(state, req)),
        "refdata.levels" => Some(handle_levels(state, req)),
        "refdata.children" => Some(handle_children(state, req)),
        _ => None,
    }
}
