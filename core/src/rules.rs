//! Declarative field rules evaluated after overrides are merged.
//!
//! A rule watches one field of the merged mapping and, when its trigger
//! matches, injects a fixed set of fields. Rules run once per construction in
//! declared order; injected fields never replace a field the caller supplied.

use serde_json::{Map, Value};

use crate::overrides::is_truthy;

/// Condition on the watched field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Field is a string equal to the literal
    Is(&'static str),
    /// Field is anything other than a string equal to the literal
    /// (a missing field counts as "not equal")
    IsNot(&'static str),
    /// Field is present and truthy
    Truthy,
}

impl Trigger {
    pub fn matches(&self, value: Option<&Value>) -> bool {
        match self {
            Trigger::Is(expected) => value.and_then(Value::as_str) == Some(*expected),
            Trigger::IsNot(expected) => value.and_then(Value::as_str) != Some(*expected),
            Trigger::Truthy => value.is_some_and(is_truthy),
        }
    }
}

/// `(field, trigger) -> fields to inject`
///
/// `inject` is a factory so every construction gets fresh values.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub trigger: Trigger,
    pub inject: fn() -> Map<String, Value>,
}

impl FieldRule {
    pub const fn new(field: &'static str, trigger: Trigger, inject: fn() -> Map<String, Value>) -> Self {
        Self { field, trigger, inject }
    }

    /// Fields to inject for this mapping, if the rule fires
    pub fn evaluate(&self, data: &Map<String, Value>) -> Option<Map<String, Value>> {
        self.trigger
            .matches(data.get(self.field))
            .then(|| (self.inject)())
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

/// Build a JSON object from `"key" => value` pairs, for rule and default
/// tables. Each value is a single token tree handed to `serde_json::json!`,
/// so JSON literals work as-is; wrap other expressions in parentheses.
///
/// ```rust
/// use stub_core::fields;
///
/// let id = 4321;
/// let map = fields! {
///     "withdrawnAt" => "2016-05-07T00:00:00.000000Z",
///     "links" => { "self": "http://localhost/audit-events/123" },
///     "id" => id,
///     "path" => (format!("/suppliers/{id}")),
/// };
/// assert_eq!(map["withdrawnAt"], "2016-05-07T00:00:00.000000Z");
/// assert_eq!(map["links"]["self"], "http://localhost/audit-events/123");
/// assert_eq!(map["path"], "/suppliers/4321");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::serde_json::Map::new()
    };
    ($($key:literal => $value:tt),+ $(,)?) => {{
        let mut map = $crate::serde_json::Map::new();
        $(map.insert(::std::string::String::from($key), $crate::serde_json::json!($value));)+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn withdrawn_fields() -> Map<String, Value> {
        crate::fields! { "withdrawnAt" => "2016-05-07T00:00:00.000000Z" }
    }

    #[test]
    fn test_is_trigger() {
        let trigger = Trigger::Is("withdrawn");
        assert!(trigger.matches(Some(&json!("withdrawn"))));
        assert!(!trigger.matches(Some(&json!("live"))));
        assert!(!trigger.matches(None));
    }

    #[test]
    fn test_is_not_trigger_treats_missing_and_non_strings_as_different() {
        let trigger = Trigger::IsNot("draft");
        assert!(!trigger.matches(Some(&json!("draft"))));
        assert!(trigger.matches(Some(&json!("live"))));
        assert!(trigger.matches(Some(&json!(1))));
        assert!(trigger.matches(None));
    }

    #[test]
    fn test_truthy_trigger() {
        assert!(Trigger::Truthy.matches(Some(&json!(true))));
        assert!(!Trigger::Truthy.matches(Some(&json!(false))));
        assert!(!Trigger::Truthy.matches(None));
    }

    #[test]
    fn test_rule_evaluation_builds_fresh_fields() {
        let rule = FieldRule::new("status", Trigger::Is("withdrawn"), withdrawn_fields);
        let mut data = Map::new();
        data.insert("status".into(), json!("withdrawn"));

        let mut first = rule.evaluate(&data).unwrap();
        first.insert("withdrawnAt".into(), json!("mutated"));
        let second = rule.evaluate(&data).unwrap();
        assert_eq!(second["withdrawnAt"], json!("2016-05-07T00:00:00.000000Z"));

        data.insert("status".into(), json!("live"));
        assert!(rule.evaluate(&data).is_none());
    }
}
