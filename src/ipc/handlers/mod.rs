pub mod core;
pub mod query;
pub mod refdata;
pub mod screens;
pub mod semesters;
pub mod session;

use crate::ipc::error::err;
use crate::ipc::types::Request;

pub(crate) fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}
