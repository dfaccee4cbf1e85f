//! Column-type to TypeScript-type mapping.

use std::collections::HashMap;

use crate::error::GenerateError;
use crate::naming::upper_camel_case;

/// True when an `int` column is actually a single-selection relation,
/// flagged through its colon-delimited edit-property string.
pub fn is_single_selection_relation(
    column: &str,
    edit_properties: &HashMap<String, String>,
) -> bool {
    edit_properties
        .get(column)
        .is_some_and(|props| props.contains("relation"))
}

/// Target model named by a single-selection relation's edit properties
/// (the second `:`-delimited segment).
pub(crate) fn single_selection_target<'a>(
    column: &str,
    edit_properties: &'a HashMap<String, String>,
) -> Result<&'a str, GenerateError> {
    edit_properties
        .get(column)
        .and_then(|props| props.split(':').nth(1))
        .filter(|target| !target.is_empty())
        .ok_or_else(|| GenerateError::MissingSelectionTarget {
            column: column.to_string(),
        })
}

/// Map one column to its TypeScript type string.
///
/// Relation columns resolve to the target model's upper-camel name (as an
/// array type for `relation` columns); `add_summary_suffix` switches those
/// references to the trimmed `...Summary` declarations. A relation column
/// whose target is missing from the schema is an error, never a default.
pub fn map_type(
    column_type: &str,
    column: &str,
    relations: &HashMap<String, String>,
    edit_properties: &HashMap<String, String>,
    add_summary_suffix: bool,
) -> Result<String, GenerateError> {
    let mapped = match column_type {
        "int" => {
            if is_single_selection_relation(column, edit_properties) {
                let target = upper_camel_case(single_selection_target(column, edit_properties)?);
                if add_summary_suffix {
                    format!("{target}Summary")
                } else {
                    target
                }
            } else {
                "number".to_string()
            }
        }
        "double" | "decimal" => "number".to_string(),
        "tinyint" => "boolean".to_string(),
        "blob" => "Binary".to_string(),
        "relation" => {
            let target = relations
                .get(column)
                .ok_or_else(|| GenerateError::MissingRelationTarget {
                    column: column.to_string(),
                })?;
            let target = upper_camel_case(target);
            if add_summary_suffix {
                format!("{target}Summary[]")
            } else {
                format!("{target}[]")
            }
        }
        _ => "string".to_string(),
    };
    Ok(mapped)
}
