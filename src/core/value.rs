use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Typed answer held for one field.
///
/// `Choices` keeps insertion order and never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    Text(String),
    Choices(IndexSet<String>),
}

impl Value {
    pub fn empty_text() -> Self {
        Self::Text(String::new())
    }

    pub fn empty_choices() -> Self {
        Self::Choices(IndexSet::new())
    }

    /// A flag is always a defined value, so it is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(v) => v.is_empty(),
            Self::Choices(v) => v.is_empty(),
            Self::Flag(_) => false,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(v) => *v,
            Self::Text(v) => !v.is_empty(),
            Self::Choices(v) => !v.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&IndexSet<String>> {
        match self {
            Self::Choices(v) => Some(v),
            _ => None,
        }
    }

    /// Selected choices in the order they were added.
    pub fn choice_list(&self) -> Vec<&str> {
        self.as_choices()
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use indexmap::IndexSet;

    #[test]
    fn flags_are_never_empty() {
        assert!(!Value::Flag(false).is_empty());
        assert!(!Value::Flag(false).is_truthy());
        assert!(Value::Flag(true).is_truthy());
    }

    #[test]
    fn text_and_choices_truthiness_follows_emptiness() {
        assert!(Value::empty_text().is_empty());
        assert!(!Value::empty_text().is_truthy());
        assert!(Value::from("5").is_truthy());

        assert!(Value::empty_choices().is_empty());
        let set: IndexSet<String> = ["trend".to_string()].into_iter().collect();
        assert!(Value::Choices(set).is_truthy());
    }

    #[test]
    fn values_serialize_untagged() {
        let set: IndexSet<String> = ["snipe".to_string(), "dips".to_string()]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&vec![
            Value::from("moderate"),
            Value::Flag(true),
            Value::Choices(set),
        ])
        .expect("values should serialize");
        assert_eq!(json, r#"["moderate",true,["snipe","dips"]]"#);
    }
}
