//! Caller-supplied override sets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, StubError};
use crate::timestamp::Timestamp;

/// Named overrides applied over a stub's defaults.
///
/// Keys may be canonical field names (`frameworkSlug`), legacy aliases
/// (`framework_slug`) or control parameters (`with_agreement`); which is which
/// is decided by the stub model, not here. Values are stored as given, except
/// for structured datetimes which are rendered to API timestamps on insertion
/// so that no raw datetime ever reaches a stub.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use serde_json::json;
/// use stub_core::Overrides;
///
/// let overrides = Overrides::new()
///     .with("status", "live")
///     .with("users", json!([]))
///     .with_timestamp("applications_close_at", NaiveDate::from_ymd_opt(2011, 3, 3).unwrap());
///
/// assert_eq!(overrides.get("status"), Some(&json!("live")));
/// assert_eq!(
///     overrides.get("applications_close_at"),
///     Some(&json!("2011-03-03T00:00:00.000000Z"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    values: Map<String, Value>,
}

impl Overrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override, replacing any previous value for the key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a structured date/time override, stored as an API timestamp string
    pub fn with_timestamp(mut self, key: impl Into<String>, timestamp: impl Timestamp) -> Self {
        self.insert(key, timestamp.to_api_timestamp());
        self
    }

    /// Insert an override in place, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Build overrides from a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(StubError::not_an_object(&other)),
        }
    }

    /// Parse overrides from JSON text holding an object
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True if the key is present with a non-null value
    pub fn is_set(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| !v.is_null())
    }

    /// True if the key is present with a truthy value (see [`is_truthy`])
    pub fn is_truthy(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Overrides {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Truthiness of a JSON value: null, false, zero, and empty strings, arrays
/// and objects are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Build an [`Overrides`] set from `key => value` pairs.
///
/// ```rust
/// use stub_core::overrides;
///
/// let overrides = overrides! { "status" => "live", "user_id" => 234 };
/// assert_eq!(overrides.len(), 2);
/// ```
#[macro_export]
macro_rules! overrides {
    () => {
        $crate::Overrides::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Overrides::new()$(.with($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_later_value_replaces_earlier() {
        let overrides = Overrides::new().with("status", "draft").with("status", "live");
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("status"), Some(&json!("live")));
    }

    #[test]
    fn test_timestamp_is_rendered_on_insert() {
        let dt = NaiveDate::from_ymd_opt(2011, 2, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let overrides = Overrides::new().with_timestamp("clarifications_publish_at", dt);
        assert_eq!(
            overrides.get("clarifications_publish_at"),
            Some(&json!("2011-02-02T00:00:00.000000Z"))
        );
    }

    #[test]
    fn test_is_set_ignores_null() {
        let overrides = Overrides::new()
            .with("framework_agreement_version", Value::Null)
            .with("lot_slug", "");
        assert!(overrides.contains_key("framework_agreement_version"));
        assert!(!overrides.is_set("framework_agreement_version"));
        assert!(overrides.is_set("lot_slug"));
        assert!(!overrides.is_truthy("lot_slug"));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("no")));
        assert!(is_truthy(&json!([0])));
    }

    #[test]
    fn test_from_json() {
        let overrides = Overrides::from_json(r#"{"id": 777, "brief": {"id": 456}}"#).unwrap();
        assert_eq!(overrides.get("id"), Some(&json!(777)));
        assert_eq!(overrides.get("brief"), Some(&json!({"id": 456})));

        assert!(Overrides::from_json("[1]").is_err());
        assert!(Overrides::from_json("{").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_macro_and_from_iter_agree() {
        let from_macro = overrides! { "supplier_id" => 555, "status" => "awarded" };
        let from_iter: Overrides = vec![("supplier_id", json!(555)), ("status", json!("awarded"))]
            .into_iter()
            .collect();
        assert_eq!(from_macro, from_iter);
        assert!(overrides! {}.is_empty());
    }

    #[test]
    fn test_deserialize_transparent() {
        let overrides: Overrides = serde_json::from_value(json!({"lot_id": 5})).unwrap();
        assert_eq!(overrides.get("lot_id"), Some(&json!(5)));
        assert_eq!(serde_json::to_value(&overrides).unwrap(), json!({"lot_id": 5}));
    }
}
