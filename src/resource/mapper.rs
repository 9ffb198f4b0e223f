//! Field mapping from inbound form fields to outbound payloads.
//!
//! # Responsibilities
//! - Produce exactly the fields the kind's schema defines, in schema order
//! - Substitute the empty string for absent fields
//!
//! # Design Decisions
//! - No trimming, no type coercion, no content validation; values pass
//!   through verbatim
//! - Inbound fields outside the schema are dropped silently
//! - serde_json's `preserve_order` feature keeps the map insertion-ordered,
//!   which is what fixes the serialized field order

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::resource::kind::ResourceKind;

/// Build the serialized outbound payload for `kind` from parsed form fields.
///
/// Fails only if the payload cannot be encoded, which cannot happen for
/// string-only schemas; the `Result` exists so callers propagate rather than
/// panic.
pub fn map_fields(
    kind: ResourceKind,
    fields: &HashMap<String, String>,
) -> Result<String, serde_json::Error> {
    let mut payload = Map::with_capacity(kind.fields().len());
    for &name in kind.fields() {
        let value = fields.get(name).cloned().unwrap_or_default();
        payload.insert(name.to_string(), Value::String(value));
    }
    serde_json::to_string(&Value::Object(payload))
}
