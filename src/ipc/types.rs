use std::collections::HashMap;

use serde::Deserialize;

use crate::cascade::{FilterSelection, HierarchySpec};
use crate::refdata::ReferenceStore;
use crate::session::Session;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// One open dashboard screen: its declared hierarchy chain, the current
/// cascaded selection, and the semester choice (which sits outside the
/// parent/child chain).
pub struct ScreenState {
    pub spec: HierarchySpec,
    pub selection: FilterSelection,
    pub semester: String,
}

#[derive(Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub store: ReferenceStore,
    pub screens: HashMap<String, ScreenState>,
}
