//! Values that compare equal to more than one thing
//!
//! Useful for asserting on a whole structure while leaving some parts loose,
//! such as a generated id or a timestamp inside an otherwise fixed response.

use std::fmt;

use regex::Regex;
use serde_json::{Map, Value};

/// Equal to anything `condition` accepts
pub struct RestrictedAny<T: ?Sized> {
    condition: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> RestrictedAny<T> {
    pub fn new(condition: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            condition: Box::new(condition),
        }
    }

    pub fn matches(&self, other: &T) -> bool {
        (self.condition)(other)
    }
}

impl<T: ?Sized> PartialEq<T> for RestrictedAny<T> {
    fn eq(&self, other: &T) -> bool {
        self.matches(other)
    }
}

impl PartialEq<RestrictedAny<Value>> for Value {
    fn eq(&self, other: &RestrictedAny<Value>) -> bool {
        other.matches(self)
    }
}

impl<T: ?Sized> fmt::Debug for RestrictedAny<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RestrictedAny(<condition>)")
    }
}

/// Equal to any JSON object containing every entry of the reference object.
///
/// Keys missing from the reference are ignored. A reference that is not an
/// object equals nothing.
#[derive(Clone, PartialEq)]
pub struct AnySupersetOf {
    subset: Value,
}

impl AnySupersetOf {
    pub fn new(subset: impl Into<Value>) -> Self {
        Self { subset: subset.into() }
    }

    pub fn matches_map(&self, other: &Map<String, Value>) -> bool {
        let Value::Object(subset) = &self.subset else {
            return false;
        };
        subset.iter().all(|(key, value)| other.get(key) == Some(value))
    }

    pub fn matches(&self, other: &Value) -> bool {
        other.as_object().is_some_and(|map| self.matches_map(map))
    }
}

impl PartialEq<Value> for AnySupersetOf {
    fn eq(&self, other: &Value) -> bool {
        self.matches(other)
    }
}

impl PartialEq<Map<String, Value>> for AnySupersetOf {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        self.matches_map(other)
    }
}

impl PartialEq<AnySupersetOf> for Value {
    fn eq(&self, other: &AnySupersetOf) -> bool {
        other.matches(self)
    }
}

impl fmt::Debug for AnySupersetOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnySupersetOf").field(&self.subset).finish()
    }
}

/// Equal to any string the pattern matches at its start
#[derive(Clone)]
pub struct AnyStringMatching {
    regex: Regex,
}

impl AnyStringMatching {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn matches(&self, other: &str) -> bool {
        // leftmost-first search: a match at 0 exists iff the first match is at 0
        self.regex.find(other).is_some_and(|found| found.start() == 0)
    }
}

impl From<Regex> for AnyStringMatching {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl PartialEq<str> for AnyStringMatching {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for AnyStringMatching {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<String> for AnyStringMatching {
    fn eq(&self, other: &String) -> bool {
        self.matches(other)
    }
}

impl PartialEq<Value> for AnyStringMatching {
    fn eq(&self, other: &Value) -> bool {
        other.as_str().is_some_and(|s| self.matches(s))
    }
}

impl PartialEq<AnyStringMatching> for String {
    fn eq(&self, other: &AnyStringMatching) -> bool {
        other.matches(self)
    }
}

impl PartialEq<AnyStringMatching> for &str {
    fn eq(&self, other: &AnyStringMatching) -> bool {
        other.matches(self)
    }
}

impl PartialEq<AnyStringMatching> for Value {
    fn eq(&self, other: &AnyStringMatching) -> bool {
        other == self
    }
}

impl fmt::Debug for AnyStringMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyStringMatching").field(&self.regex.as_str()).finish()
    }
}
