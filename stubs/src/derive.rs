//! Derivations shared by several resource types.

use serde_json::{Map, Value};
use stub_core::{FrameworkSlug, StubContext};
use tracing::trace;

/// Fill framework name and family fields from an explicitly overridden slug.
///
/// Nothing happens unless the caller set `slug_key` (directly or by alias),
/// so defaults stay exactly as declared. Fields the caller set themselves are
/// left alone.
pub(crate) fn framework_from_slug(
    data: &mut Map<String, Value>,
    ctx: &StubContext<'_>,
    slug_key: &str,
    name_key: Option<&str>,
    family_keys: &[&str],
) {
    if !ctx.is_explicit(slug_key) {
        return;
    }
    let Some(slug) = data.get(slug_key).and_then(Value::as_str).map(str::to_owned) else {
        return;
    };
    let parsed = FrameworkSlug::parse(&slug);
    trace!(slug = %slug, family = parsed.family(), "Deriving framework details from slug");

    if let Some(name_key) = name_key {
        ctx.derive_field(data, name_key, parsed.name());
    }
    for key in family_keys {
        ctx.derive_field(data, key, parsed.family());
    }
}

/// Copy flat fields into a nested object, `(nested key, flat key)` pairs.
///
/// Skipped entirely when the caller overrode the nested object itself, or
/// when it is not an object.
pub(crate) fn mirror_into(
    data: &mut Map<String, Value>,
    ctx: &StubContext<'_>,
    nested_key: &str,
    pairs: &[(&str, &str)],
) {
    if ctx.is_explicit(nested_key) {
        return;
    }
    let values: Vec<(String, Value)> = pairs
        .iter()
        .filter_map(|(nested, flat)| data.get(*flat).map(|v| ((*nested).to_string(), v.clone())))
        .collect();
    if let Some(Value::Object(nested)) = data.get_mut(nested_key) {
        nested.extend(values);
    }
}

/// A field value as it appears in a URL: strings unquoted, anything else as
/// JSON
pub(crate) fn url_segment(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
