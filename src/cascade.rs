use serde::Serialize;
use serde_json::{Map, Value};

use crate::refdata::{resolve_children, ReferenceStore};

/// Contract violation in the hosting code (not in runtime data): bad
/// hierarchy declarations and unknown level names fail loudly instead of
/// being absorbed the way dangling references are.
#[derive(Debug, Clone, Serialize)]
pub struct FilterError {
    pub code: String,
    pub message: String,
}

impl FilterError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// The parent->child level chain of one screen, top level first, declared
/// once at screen init. E.g. `["faculty", "department", "course"]` or
/// `["header", "mainCriterion", "subCriterion"]`.
#[derive(Debug, Clone)]
pub struct HierarchySpec {
    levels: Vec<String>,
}

impl HierarchySpec {
    pub fn new(levels: Vec<String>) -> Result<Self, FilterError> {
        if levels.is_empty() {
            return Err(FilterError::new(
                "bad_hierarchy",
                "hierarchy must declare at least one level",
            ));
        }
        for (i, level) in levels.iter().enumerate() {
            if level.is_empty() {
                return Err(FilterError::new("bad_hierarchy", "empty level name"));
            }
            if levels[..i].contains(level) {
                return Err(FilterError::new(
                    "bad_hierarchy",
                    format!("duplicate level: {level}"),
                ));
            }
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn position(&self, level: &str) -> Option<usize> {
        self.levels.iter().position(|l| l == level)
    }
}

/// Current choice at every level of one screen's chain; an empty string is
/// the unset/"All" state. Owned exclusively by the hosting screen and only
/// mutated through the coordinator's transition rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    values: Vec<String>,
}

impl FilterSelection {
    pub fn unset(spec: &HierarchySpec) -> Self {
        Self {
            values: vec![String::new(); spec.levels().len()],
        }
    }

    pub fn get(&self, spec: &HierarchySpec, level: &str) -> Option<&str> {
        spec.position(level).map(|i| self.values[i].as_str())
    }

    /// Level-to-value snapshot for the UI, in chain order.
    pub fn as_json(&self, spec: &HierarchySpec) -> Value {
        let mut map = Map::new();
        for (level, value) in spec.levels().iter().zip(&self.values) {
            map.insert(level.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}

/// Applies a selection change at `changed_level` and re-establishes the
/// consistency invariant: every descendant level is cleared, then defaults
/// are cascaded eagerly down the chain with the resolver, stopping at the
/// first level whose filtered set comes out empty (a not-yet-loaded list
/// behaves the same as an empty one). An explicit "All" (empty value) is
/// treated as terminal here even though the resolver's empty-parent branch
/// would offer every child with a first-entity default: auto-selecting a
/// child under "All parent" would hand the reporting API a child filter
/// inconsistent with the parent filter, so descendants stay at "All"
/// instead (see DESIGN.md).
///
/// The whole transition is a pure synchronous computation; applying the
/// same change twice yields the same selection as applying it once.
pub fn apply_change(
    spec: &HierarchySpec,
    store: &ReferenceStore,
    selection: &FilterSelection,
    changed_level: &str,
    new_value: &str,
) -> Result<FilterSelection, FilterError> {
    let pos = spec.position(changed_level).ok_or_else(|| {
        FilterError::new(
            "bad_hierarchy",
            format!("level not in hierarchy: {changed_level}"),
        )
    })?;

    let mut next = selection.clone();
    next.values[pos] = new_value.to_string();
    for v in next.values[pos + 1..].iter_mut() {
        v.clear();
    }
    cascade_defaults(spec, store, &mut next, pos);
    Ok(next)
}

/// Initial selection once reference data loads: the top level defaults to
/// its first available option and the rest of the chain follows.
pub fn init_selection(spec: &HierarchySpec, store: &ReferenceStore) -> FilterSelection {
    let mut selection = FilterSelection::unset(spec);
    let top = resolve_children(store.level(&spec.levels()[0]), "");
    selection.values[0] = top.default_id;
    cascade_defaults(spec, store, &mut selection, 0);
    selection
}

fn cascade_defaults(
    spec: &HierarchySpec,
    store: &ReferenceStore,
    selection: &mut FilterSelection,
    from: usize,
) {
    let mut parent_value = selection.values[from].clone();
    for i in (from + 1)..spec.levels().len() {
        if parent_value.is_empty() {
            break;
        }
        let res = resolve_children(store.level(&spec.levels()[i]), &parent_value);
        if res.filtered.is_empty() {
            break;
        }
        selection.values[i] = res.default_id.clone();
        parent_value = res.default_id;
    }
}
