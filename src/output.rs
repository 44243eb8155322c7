//! JSON text rendering for [`Document`] trees.
//!
//! Rendering is deterministic: object keys come out in the order they were
//! inserted, and the same document always renders to the same bytes.
//!
//! - **Compact output** via [`to_json()`] - no whitespace outside strings
//! - **Pretty output** via [`to_json_pretty()`] - 2-space indentation, one member per line
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sqltree_json::output::{to_json, to_json_pretty};
//!
//! let doc = json!({"type": "kExprLiteralFloat", "fval": -2.0});
//!
//! assert_eq!(to_json(&doc), r#"{"type":"kExprLiteralFloat","fval":-2.0}"#);
//! assert_eq!(
//!     to_json_pretty(&doc),
//!     "{\n  \"type\": \"kExprLiteralFloat\",\n  \"fval\": -2.0\n}"
//! );
//! ```

use crate::document::Document;

/// Renders a document as compact JSON on a single line.
pub fn to_json(doc: &Document) -> String {
    // Same bytes as serde_json::to_string, infallible for a Value
    doc.to_string()
}

/// Renders a document as pretty-printed JSON.
///
/// - 2-space indentation per level
/// - One element/member per line for non-empty lists and objects
/// - Empty lists and objects stay on one line (`[]`, `{}`)
pub fn to_json_pretty(doc: &Document) -> String {
    format!("{:#}", doc)
}
