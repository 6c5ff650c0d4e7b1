//! Component test evaluation.
//!
//! The caller decides which component names receive fallback behavior. The
//! accepted shapes mirror the plugin option surface: absent (every name
//! matches), a single name, a set of names, or a custom callable. Shape
//! dispatch is resolved once at configuration time; per-binding evaluation
//! is a single `matches` call.

use std::collections::HashSet;
use std::fmt;

use crate::transform::{EscapeError, ERR_TEST_SHAPE};

pub type MatchFn = Box<dyn Fn(&str) -> bool>;

#[derive(Default)]
pub enum ComponentMatcher {
    /// No test configured: every component name matches.
    #[default]
    All,
    Name(String),
    Names(HashSet<String>),
    Custom(MatchFn),
}

impl ComponentMatcher {
    pub fn custom<F>(test: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        ComponentMatcher::Custom(Box::new(test))
    }

    /// Whether `name` should receive the fallback default. The custom
    /// callable is trusted and invoked at most once per candidate binding;
    /// if it panics, the panic propagates to the caller unmodified.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            ComponentMatcher::All => true,
            ComponentMatcher::Name(single) => single == name,
            ComponentMatcher::Names(set) => set.contains(name),
            ComponentMatcher::Custom(test) => test(name),
        }
    }

    /// Deserialize the bridge-facing test shapes: `null` matches every
    /// name, a string matches one name, an array of strings matches a set.
    /// Callables cannot cross the bridge.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, EscapeError> {
        match value {
            serde_json::Value::Null => Ok(ComponentMatcher::All),
            serde_json::Value::String(name) => Ok(ComponentMatcher::Name(name.clone())),
            serde_json::Value::Array(items) => {
                let mut names = HashSet::with_capacity(items.len());
                for item in items {
                    let serde_json::Value::String(name) = item else {
                        return Err(EscapeError::new(
                            ERR_TEST_SHAPE,
                            format!("test array entries must be strings, got {}", item),
                        ));
                    };
                    names.insert(name.clone());
                }
                Ok(ComponentMatcher::Names(names))
            }
            other => Err(EscapeError::new(
                ERR_TEST_SHAPE,
                format!(
                    "test must be null, a string, or an array of strings, got {}",
                    other
                ),
            )),
        }
    }
}

impl fmt::Debug for ComponentMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentMatcher::All => f.write_str("All"),
            ComponentMatcher::Name(name) => f.debug_tuple("Name").field(name).finish(),
            ComponentMatcher::Names(names) => f.debug_tuple("Names").field(names).finish(),
            ComponentMatcher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for ComponentMatcher {
    fn from(name: &str) -> Self {
        ComponentMatcher::Name(name.to_string())
    }
}

impl From<String> for ComponentMatcher {
    fn from(name: String) -> Self {
        ComponentMatcher::Name(name)
    }
}

impl From<Vec<String>> for ComponentMatcher {
    fn from(names: Vec<String>) -> Self {
        ComponentMatcher::Names(names.into_iter().collect())
    }
}

impl From<&[&str]> for ComponentMatcher {
    fn from(names: &[&str]) -> Self {
        ComponentMatcher::Names(names.iter().map(|name| name.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_matches_everything() {
        let matcher = ComponentMatcher::default();
        assert!(matcher.matches("Component1"));
        assert!(matcher.matches("anything"));
    }

    #[test]
    fn single_name_is_string_equality() {
        let matcher = ComponentMatcher::from("Component1");
        assert!(matcher.matches("Component1"));
        assert!(!matcher.matches("Component2"));
    }

    #[test]
    fn name_set_is_membership() {
        let matcher = ComponentMatcher::from(&["Component1", "Component3"][..]);
        assert!(matcher.matches("Component1"));
        assert!(!matcher.matches("Component2"));
        assert!(matcher.matches("Component3"));
    }

    #[test]
    fn custom_callable_decides() {
        let matcher = ComponentMatcher::custom(|name| name.ends_with('2'));
        assert!(!matcher.matches("Component1"));
        assert!(matcher.matches("Component2"));
    }

    #[test]
    fn from_json_accepts_the_three_data_shapes() {
        assert!(matches!(
            ComponentMatcher::from_json(&json!(null)).unwrap(),
            ComponentMatcher::All
        ));
        assert!(matches!(
            ComponentMatcher::from_json(&json!("Component1")).unwrap(),
            ComponentMatcher::Name(name) if name == "Component1"
        ));
        let matcher = ComponentMatcher::from_json(&json!(["Component1", "Component2"])).unwrap();
        assert!(matcher.matches("Component2"));
        assert!(!matcher.matches("Component3"));
    }

    #[test]
    fn from_json_rejects_other_shapes() {
        let err = ComponentMatcher::from_json(&json!(42)).unwrap_err();
        assert_eq!(err.code, ERR_TEST_SHAPE);
        let err = ComponentMatcher::from_json(&json!(["Component1", 2])).unwrap_err();
        assert_eq!(err.code, ERR_TEST_SHAPE);
    }
}
