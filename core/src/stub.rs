//! The stub generator.
//!
//! [`StubModel`] describes one resource type: its defaults, alias table,
//! control parameters, declarative rules and custom derivation. [`Stub`]
//! applies a set of [`Overrides`] to a model and exposes the resulting
//! mapping either flat or wrapped in the model's envelope key.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::overrides::Overrides;
use crate::rules::FieldRule;

/// Legacy parameter name accepted in place of a canonical field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub canonical: &'static str,
    pub alias: &'static str,
}

/// Shorthand for alias tables: `alias("lotSlug", "lot_slug")`
pub const fn alias(canonical: &'static str, alias: &'static str) -> Alias {
    Alias { canonical, alias }
}

/// Static description of one API resource type.
///
/// Implementors only supply data; the merge order is fixed by [`Stub::new`]:
///
/// 1. fresh [`defaults`](StubModel::defaults)
/// 2. [`ALIASES`](StubModel::ALIASES) in declared order (non-null values only)
/// 3. remaining overrides, minus aliases and [`PARAMETERS`](StubModel::PARAMETERS)
/// 4. [`RULES`](StubModel::RULES) in declared order
/// 5. [`derive`](StubModel::derive)
pub trait StubModel {
    /// Top-level key for the single-result response, if the resource has one
    const RESOURCE_NAME: Option<&'static str>;

    /// Alias table, consulted in declared order
    const ALIASES: &'static [Alias] = &[];

    /// Override keys that steer derivation and never appear in the result
    const PARAMETERS: &'static [&'static str] = &[];

    /// Declarative rules run after the merge
    const RULES: &'static [FieldRule] = &[];

    /// Default field values. Called once per construction.
    fn defaults() -> Map<String, Value>;

    /// Type-specific derivation run last
    fn derive(_data: &mut Map<String, Value>, _ctx: &StubContext<'_>) {}
}

/// What the caller asked for, as seen by derivation code.
///
/// Tracks which canonical fields were set explicitly (directly or through an
/// alias) so that derived values never replace them.
#[derive(Debug)]
pub struct StubContext<'a> {
    overrides: &'a Overrides,
    explicit: BTreeSet<String>,
}

impl<'a> StubContext<'a> {
    /// Raw override value for any key: canonical, alias or parameter
    pub fn param(&self, key: &str) -> Option<&'a Value> {
        self.overrides.get(key)
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.overrides.contains_key(key)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.overrides.is_set(key)
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.overrides.is_truthy(key)
    }

    /// Whether the caller set this canonical field
    pub fn is_explicit(&self, canonical: &str) -> bool {
        self.explicit.contains(canonical)
    }

    pub fn any_explicit(&self, canonical: &[&str]) -> bool {
        canonical.iter().any(|key| self.is_explicit(key))
    }

    /// Set a derived field unless the caller set it explicitly
    pub fn derive_field(&self, data: &mut Map<String, Value>, key: &str, value: impl Into<Value>) {
        if self.is_explicit(key) {
            trace!(field = key, "Keeping explicit override over derived value");
            return;
        }
        data.insert(key.to_string(), value.into());
    }

    /// Set several derived fields, skipping explicit ones
    pub fn inject(&self, data: &mut Map<String, Value>, fields: Map<String, Value>) {
        for (key, value) in fields {
            self.derive_field(data, &key, value);
        }
    }
}

/// A generated example response for resource type `M`.
///
/// # Examples
///
/// ```rust
/// use serde_json::{json, Map, Value};
/// use stub_core::{alias, fields, overrides, Alias, Stub, StubModel};
///
/// struct Widget;
///
/// impl StubModel for Widget {
///     const RESOURCE_NAME: Option<&'static str> = Some("widgets");
///     const ALIASES: &'static [Alias] = &[alias("widgetName", "widget_name")];
///
///     fn defaults() -> Map<String, Value> {
///         fields! { "id" => 1, "widgetName" => "Sprocket" }
///     }
/// }
///
/// let stub = Stub::<Widget>::new(overrides! { "widget_name" => "Cog" });
/// assert_eq!(stub.response(), json!({"id": 1, "widgetName": "Cog"}));
/// assert_eq!(stub.single_result_response(), json!({"widgets": stub.response()}));
/// ```
pub struct Stub<M: StubModel> {
    data: Map<String, Value>,
    model: PhantomData<fn() -> M>,
}

impl<M: StubModel> Stub<M> {
    /// Build the stub from defaults and overrides. Never fails: unknown keys
    /// are kept and values are not type-checked.
    pub fn new(overrides: Overrides) -> Self {
        let mut data = M::defaults();
        let mut explicit = BTreeSet::new();

        for Alias { canonical, alias } in M::ALIASES {
            if let Some(value) = overrides.get(alias).filter(|v| !v.is_null()) {
                trace!(alias, canonical, "Translating alias");
                data.insert((*canonical).to_string(), value.clone());
                explicit.insert((*canonical).to_string());
            }
        }

        for (key, value) in overrides.iter() {
            if Self::is_alias(key) || Self::is_parameter(key) {
                continue;
            }
            data.insert(key.clone(), value.clone());
            explicit.insert(key.clone());
        }

        let ctx = StubContext {
            overrides: &overrides,
            explicit,
        };

        for rule in M::RULES {
            if let Some(fields) = rule.evaluate(&data) {
                trace!(field = rule.field, trigger = ?rule.trigger, "Rule matched");
                ctx.inject(&mut data, fields);
            }
        }

        M::derive(&mut data, &ctx);

        debug!(
            resource = M::RESOURCE_NAME.unwrap_or("-"),
            overrides = overrides.len(),
            fields = data.len(),
            "Built API model stub"
        );

        Self {
            data,
            model: PhantomData,
        }
    }

    fn is_alias(key: &str) -> bool {
        M::ALIASES.iter().any(|a| a.alias == key)
    }

    fn is_parameter(key: &str) -> bool {
        M::PARAMETERS.iter().any(|p| *p == key)
    }

    /// The resource mapping
    pub fn response(&self) -> Value {
        Value::Object(self.data.clone())
    }

    /// The resource mapping under its envelope key, or the bare mapping when
    /// the resource has none
    pub fn single_result_response(&self) -> Value {
        match M::RESOURCE_NAME {
            Some(resource_name) => {
                let mut envelope = Map::new();
                envelope.insert(resource_name.to_string(), self.response());
                Value::Object(envelope)
            }
            None => self.response(),
        }
    }

    pub fn into_response(self) -> Value {
        Value::Object(self.data)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn resource_name() -> Option<&'static str> {
        M::RESOURCE_NAME
    }
}

impl<M: StubModel> Default for Stub<M> {
    fn default() -> Self {
        Self::new(Overrides::new())
    }
}

impl<M: StubModel> From<Overrides> for Stub<M> {
    fn from(overrides: Overrides) -> Self {
        Self::new(overrides)
    }
}

impl<M: StubModel> Clone for Stub<M> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            model: PhantomData,
        }
    }
}

impl<M: StubModel> PartialEq for Stub<M> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<M: StubModel> fmt::Debug for Stub<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stub")
            .field("resource_name", &M::RESOURCE_NAME)
            .field("data", &self.data)
            .finish()
    }
}

impl<M: StubModel> Serialize for Stub<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}
