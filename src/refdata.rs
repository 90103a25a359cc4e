use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One node of a shallow lookup hierarchy: faculty, department, course, or
/// a criterion header/main/sub. Which level it belongs to is implicit in
/// which list it was loaded into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntity {
    pub id: String,
    pub display_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl ReferenceEntity {
    /// Dropdown caption, `"CENG101 - Intro to Programming"` style when a
    /// code is present.
    pub fn option_label(&self) -> String {
        match self.code.as_deref() {
            Some(code) if !code.is_empty() => format!("{} - {}", code, self.display_label),
            _ => self.display_label.clone(),
        }
    }
}

/// Flat reference lists keyed by level name ("faculty", "department",
/// "course", "header", "mainCriterion", "subCriterion", ...). Levels are
/// loaded by the UI as the backend answers; a level that has not arrived
/// yet reads as an empty list.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    levels: HashMap<String, Vec<ReferenceEntity>>,
}

impl ReferenceStore {
    pub fn set_level(&mut self, level: &str, entities: Vec<ReferenceEntity>) {
        self.levels.insert(level.to_string(), entities);
    }

    pub fn level(&self, level: &str) -> &[ReferenceEntity] {
        self.levels.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn level_counts(&self) -> Vec<(String, usize)> {
        let mut out: Vec<(String, usize)> = self
            .levels
            .iter()
            .map(|(name, list)| (name.clone(), list.len()))
            .collect();
        out.sort();
        out
    }
}

/// Resolver output: the child options valid under a parent, plus the
/// deterministic default the coordinator applies after a parent change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub filtered: Vec<ReferenceEntity>,
    pub default_id: String,
}

/// Computes the children valid for `parent_id`, preserving the input
/// list's relative order. An empty parent models the "All X" option and
/// keeps every entity; a parent matching nothing (dangling reference or a
/// not-yet-loaded list) yields an empty set and an empty default rather
/// than an error. Level-agnostic: the same call serves faculty->department,
/// department->course and the criterion chain.
pub fn resolve_children(entities: &[ReferenceEntity], parent_id: &str) -> Resolution {
    let filtered: Vec<ReferenceEntity> = if parent_id.is_empty() {
        entities.to_vec()
    } else {
        entities
            .iter()
            .filter(|e| e.parent_id.as_deref() == Some(parent_id))
            .cloned()
            .collect()
    };
    let default_id = filtered.first().map(|e| e.id.clone()).unwrap_or_default();
    Resolution {
        filtered,
        default_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, parent: Option<&str>) -> ReferenceEntity {
        ReferenceEntity {
            id: id.to_string(),
            display_label: format!("Entity {id}"),
            code: None,
            parent_id: parent.map(str::to_string),
        }
    }

    #[test]
    fn empty_parent_returns_all_in_order() {
        let depts = vec![
            entity("D2", Some("F1")),
            entity("D1", Some("F1")),
            entity("D3", Some("F2")),
        ];
        let res = resolve_children(&depts, "");
        let ids: Vec<&str> = res.filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["D2", "D1", "D3"]);
        assert_eq!(res.default_id, "D2");
    }

    #[test]
    fn set_parent_filters_preserving_relative_order() {
        let depts = vec![
            entity("D3", Some("F2")),
            entity("D1", Some("F1")),
            entity("D2", Some("F1")),
        ];
        let res = resolve_children(&depts, "F1");
        let ids: Vec<&str> = res.filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["D1", "D2"]);
        assert_eq!(res.default_id, "D1");
    }

    #[test]
    fn dangling_parent_yields_empty_not_error() {
        let depts = vec![entity("D1", Some("F1"))];
        let res = resolve_children(&depts, "F9");
        assert!(res.filtered.is_empty());
        assert_eq!(res.default_id, "");
    }

    #[test]
    fn unloaded_level_reads_empty() {
        let store = ReferenceStore::default();
        assert!(store.level("department").is_empty());
    }

    #[test]
    fn option_label_prefixes_code() {
        let mut course = entity("C1", Some("D1"));
        course.code = Some("CENG101".to_string());
        course.display_label = "Intro to Programming".to_string();
        assert_eq!(course.option_label(), "CENG101 - Intro to Programming");
    }
}
