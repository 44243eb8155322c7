//! The document tree the serializer builds before anything is rendered.
//!
//! Documents are plain [`serde_json::Value`] trees. With serde_json's
//! `preserve_order` feature, object keys keep the order they were inserted
//! in, so rendered text follows the order in which a node's fields were
//! written.
//!
//! # Examples
//!
//! ```
//! use sqltree_json::document::{Document, Object};
//!
//! let mut table = Object::new();
//! table.insert("type".into(), "kTableName".into());
//! table.insert("name".into(), "students".into());
//!
//! let doc = Document::from(vec![Document::Object(table)]);
//! assert_eq!(doc[0]["name"], "students");
//! ```

use serde_json::{Map, Value};
use tracing::warn;

/// A JSON document under construction.
pub type Document = Value;

/// Object node of a [`Document`], keys in insertion order.
pub type Object = Map<String, Value>;

/// Float leaf. NaN and infinities have no JSON form and become `null`.
pub fn float(value: f64) -> Document {
    if !value.is_finite() {
        warn!(value = %value, "non-finite float has no JSON form, rendering null");
    }
    Value::from(value)
}
