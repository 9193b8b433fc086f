use crate::core::FieldId;
use crate::core::value::Value;
use crate::state::schema::Schema;
use indexmap::IndexMap;

/// Accumulated answers for every field of a schema, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSet {
    values: IndexMap<FieldId, Value>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of every step starts at its kind's default.
    pub fn from_schema(schema: &Schema) -> Self {
        let values = schema
            .fields()
            .map(|field| (field.name.clone(), field.default_value()))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, id: impl Into<FieldId>, value: Value) {
        self.values.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Missing fields count as falsy.
    pub fn is_truthy(&self, id: &str) -> bool {
        self.get(id).is_some_and(Value::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &Value)> {
        self.values.iter()
    }

    pub(crate) fn to_map(&self) -> IndexMap<FieldId, Value> {
        self.values.clone()
    }
}
