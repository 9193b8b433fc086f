use crate::core::FieldId;
use crate::core::value::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// Finished wizard output: every field mapped to its typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    values: IndexMap<FieldId, Value>,
}

impl Configuration {
    pub(crate) fn new(values: IndexMap<FieldId, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Value::as_text)
    }

    pub fn flag(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(Value::as_bool)
    }

    pub fn choices(&self, id: &str) -> Vec<&str> {
        self.get(id).map(Value::choice_list).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
