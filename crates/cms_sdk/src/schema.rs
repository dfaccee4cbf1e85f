//! Deserialized form of the schema API's response.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// One named, typed column within a schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDef {
    /// Declared SQL-like type: `int`, `double`, `decimal`, `tinyint`,
    /// `blob`, `relation`, or a free-form string type.
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Server-provided description of one content model.
///
/// `column_defs` preserves the order the server returned the columns in;
/// generated declarations iterate in that order so reruns stay
/// diff-friendly.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Column name → definition, in server order.
    #[serde(default)]
    pub column_defs: IndexMap<String, ColumnDef>,
    /// Target model per `relation`-typed column.
    #[serde(default)]
    pub relations: HashMap<String, String>,
    /// Colon-delimited edit hints per column; a hint containing `relation`
    /// marks an integer column as a single-selection relation.
    #[serde(default)]
    pub edit_properties: HashMap<String, String>,
    /// Name of the primary-key column.
    #[serde(default)]
    pub primary: String,
    /// Whether the model supports a path hierarchy.
    #[serde(default, deserialize_with = "boolish")]
    pub hierarchy: bool,
}

/// The CMS reports `hierarchy` as a bool, an integer, or a numeric string
/// depending on version; accept all of them.
fn boolish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Boolish {
        Bool(bool),
        Int(i64),
        Str(String),
        Null(()),
    }

    Ok(match Boolish::deserialize(deserializer)? {
        Boolish::Bool(flag) => flag,
        Boolish::Int(n) => n != 0,
        Boolish::Str(s) => !matches!(s.as_str(), "" | "0" | "false"),
        Boolish::Null(()) => false,
    })
}
