use serde_json::{Map, Value};

use crate::cascade::{FilterSelection, HierarchySpec};

/// Typed request parameters for the reporting API. Replaces the loose
/// "assign fields if truthy" maps the dashboard pages used to build by
/// hand: every field is named, unset fields are omitted, and the key order
/// of the serialized map is stable across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    pub semester: Option<String>,
    pub faculty_id: Option<String>,
    pub department_id: Option<String>,
    pub course_id: Option<String>,
    pub survey_id: Option<String>,
    pub question_id: Option<String>,
    pub header_id: Option<String>,
    pub main_criterion_id: Option<String>,
    pub sub_criterion_id: Option<String>,
    /// Levels outside the named set, kept in name order.
    pub extra: Vec<(String, String)>,
}

impl QuerySpec {
    /// Builds the spec from a screen's current state. Level names map to
    /// their backend parameter (`faculty` -> `facultyId`, ...); an "All"
    /// selection contributes nothing.
    pub fn from_screen(
        spec: &HierarchySpec,
        selection: &FilterSelection,
        semester: &str,
    ) -> QuerySpec {
        let mut q = QuerySpec::default();
        if !semester.is_empty() {
            q.semester = Some(semester.to_string());
        }
        for level in spec.levels() {
            let value = match selection.get(spec, level) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => continue,
            };
            match level.as_str() {
                "faculty" => q.faculty_id = Some(value),
                "department" => q.department_id = Some(value),
                "course" => q.course_id = Some(value),
                "survey" => q.survey_id = Some(value),
                "question" => q.question_id = Some(value),
                "header" => q.header_id = Some(value),
                "mainCriterion" => q.main_criterion_id = Some(value),
                "subCriterion" => q.sub_criterion_id = Some(value),
                other => q.extra.push((format!("{other}Id"), value)),
            }
        }
        q.extra.sort();
        q
    }

    /// Serializes to a parameter map. `serde_json::Map` keeps keys sorted,
    /// so equal specs always produce byte-identical output.
    pub fn params(&self) -> Value {
        let mut map = Map::new();
        let named: [(&str, &Option<String>); 9] = [
            ("semester", &self.semester),
            ("facultyId", &self.faculty_id),
            ("departmentId", &self.department_id),
            ("courseId", &self.course_id),
            ("surveyId", &self.survey_id),
            ("questionId", &self.question_id),
            ("headerId", &self.header_id),
            ("mainCriterionId", &self.main_criterion_id),
            ("subCriterionId", &self.sub_criterion_id),
        ];
        for (key, value) in named {
            if let Some(v) = value {
                map.insert(key.to_string(), Value::String(v.clone()));
            }
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}
