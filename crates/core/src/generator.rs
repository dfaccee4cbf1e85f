//! Declaration generation: column selection per mode, field emission, and
//! relation discovery.

use indexmap::IndexMap;
use modelts_cms_sdk::{ColumnDef, Schema};
use tracing::debug;

use crate::error::GenerateError;
use crate::groups::{KNOWN_GROUPS, group_for_column};
use crate::mapper::{is_single_selection_relation, map_type, single_selection_target};
use crate::naming::upper_camel_case;

/// How the column set of one declaration is chosen.
///
/// The modes are mutually exclusive; only `Explicit` discovers relation
/// models, and `Summary` declarations are never expanded further.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Every column in the schema, with known-group deduplication.
    Full,
    /// Only the listed columns; relation columns reference `...Summary`
    /// types and queue their target models for a summary declaration.
    Explicit(Vec<String>),
    /// Identity, primary-key, and binary columns only, for a relation
    /// target's trimmed type.
    Summary,
}

/// One generated declaration plus the relation models it referenced.
#[derive(Debug, Clone)]
pub struct Definition {
    /// Declaration text, ready to append to the output file.
    pub source: String,
    /// Relation targets discovered while generating, in column order.
    /// Duplicate references are kept as-is.
    pub relation_models: Vec<String>,
}

/// Generate the declaration for `model` from its fetched schema.
///
/// Columns are visited in the schema's own order so output stays
/// byte-identical across runs.
pub fn generate_definition(
    model: &str,
    schema: &Schema,
    mode: &Mode,
) -> Result<Definition, GenerateError> {
    let mut fields = String::new();
    let mut group_types: Vec<&'static str> = Vec::new();
    let mut relation_models: Vec<String> = Vec::new();

    match mode {
        Mode::Explicit(cols) => {
            let mut columns: IndexMap<&str, &ColumnDef> = schema
                .column_defs
                .iter()
                .filter(|(name, _)| cols.iter().any(|col| col == *name))
                .map(|(name, def)| (name.as_str(), def))
                .collect();

            // A group collapses only when every member made it through the
            // column filter; partial groups stay as plain fields.
            for group in &KNOWN_GROUPS {
                if group.columns.iter().all(|member| columns.contains_key(*member)) {
                    group_types.push(group.type_name);
                    for member in group.columns {
                        columns.shift_remove(*member);
                    }
                }
            }

            for (column, def) in columns {
                if def.column_type == "int"
                    && is_single_selection_relation(column, &schema.edit_properties)
                {
                    let target = single_selection_target(column, &schema.edit_properties)?;
                    relation_models.push(target.to_string());
                    fields.push_str(&field_line(schema, column, def, true)?);
                } else if def.column_type == "relation" {
                    let target = schema.relations.get(column).ok_or_else(|| {
                        GenerateError::MissingRelationTarget {
                            column: column.to_string(),
                        }
                    })?;
                    relation_models.push(target.clone());
                    fields.push_str(&field_line(schema, column, def, true)?);
                } else {
                    fields.push_str(&field_line(schema, column, def, false)?);
                }
            }
        }
        Mode::Summary => {
            for (column, def) in &schema.column_defs {
                let column = column.as_str();
                let keep = column == "id"
                    || column == "workspace_id"
                    || column == schema.primary
                    || def.column_type == "blob";
                if keep {
                    fields.push_str(&field_line(schema, column, def, false)?);
                }
            }
        }
        Mode::Full => {
            for (column, def) in &schema.column_defs {
                let column = column.as_str();
                if let Some(group) = group_for_column(column) {
                    if !group_types.contains(&group.type_name) {
                        group_types.push(group.type_name);
                    }
                } else {
                    fields.push_str(&field_line(schema, column, def, false)?);
                }
            }
        }
    }

    fields.push_str("  Permalink?: string;\n");
    if schema.hierarchy {
        fields.push_str("  Path: string;\n");
    }

    let type_name = upper_camel_case(model);
    let mut source = String::new();
    if matches!(mode, Mode::Summary) {
        // Blank line keeps consecutive declarations apart in the file.
        source.push_str(&format!("\ntype {type_name}Summary = {{\n"));
    } else {
        source.push_str(&format!("type {type_name} = {{\n"));
    }
    source.push_str(&fields);
    source.push('}');
    if !group_types.is_empty() {
        source.push_str(" & ");
        source.push_str(&group_types.join(" & "));
    }
    source.push_str(";\n");

    debug!(
        model,
        mode = ?mode,
        relations = relation_models.len(),
        "Generated declaration."
    );

    Ok(Definition {
        source,
        relation_models,
    })
}

fn field_line(
    schema: &Schema,
    column: &str,
    def: &ColumnDef,
    add_summary_suffix: bool,
) -> Result<String, GenerateError> {
    let ty = map_type(
        &def.column_type,
        column,
        &schema.relations,
        &schema.edit_properties,
        add_summary_suffix,
    )?;
    Ok(format!("  {column}: {ty};\n"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    fn cols(names: &[&str]) -> Mode {
        Mode::Explicit(names.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_full_mode_follows_schema_order() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "title": {"type": "text"},
                    "weight": {"type": "double"}
                },
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition("article", &schema, &Mode::Full).unwrap();
        assert_eq!(
            definition.source,
            "type Article = {\n  id: number;\n  title: string;\n  weight: number;\n  Permalink?: string;\n};\n"
        );
        assert!(definition.relation_models.is_empty());
    }

    #[test]
    fn test_full_mode_collapses_status_column_into_group() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "title": {"type": "text"},
                    "status": {"type": "tinyint"}
                },
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition("article", &schema, &Mode::Full).unwrap();
        assert_eq!(
            definition.source,
            "type Article = {\n  id: number;\n  title: string;\n  Permalink?: string;\n} & StatusType;\n"
        );
    }

    #[test]
    fn test_full_mode_emits_each_group_once() {
        // Any member of a group folds into it in full mode, even without
        // the full member set present.
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "created_on": {"type": "datetime"},
                    "modified_on": {"type": "datetime"},
                    "status": {"type": "tinyint"}
                },
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition("page", &schema, &Mode::Full).unwrap();
        assert_eq!(
            definition.source,
            "type Page = {\n  id: number;\n  Permalink?: string;\n} & AuditType & StatusType;\n"
        );
    }

    #[test]
    fn test_full_mode_relation_column_is_plain_reference() {
        // Full mode types the relation but queues no summary.
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "author": {"type": "relation"}
                },
                "relations": {"author": "writer"},
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition("article", &schema, &Mode::Full).unwrap();
        assert!(definition.source.contains("  author: Writer[];\n"));
        assert!(definition.relation_models.is_empty());
    }

    #[test]
    fn test_full_mode_hierarchy_appends_path() {
        let schema = schema(
            r#"{
                "column_defs": {"id": {"type": "int"}},
                "primary": "id",
                "hierarchy": 1
            }"#,
        );
        let definition = generate_definition("folder", &schema, &Mode::Full).unwrap();
        assert_eq!(
            definition.source,
            "type Folder = {\n  id: number;\n  Permalink?: string;\n  Path: string;\n};\n"
        );
    }

    #[test]
    fn test_explicit_mode_restricts_and_discovers_relations() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "title": {"type": "text"},
                    "author": {"type": "relation"},
                    "category_id": {"type": "int"},
                    "body": {"type": "text"}
                },
                "relations": {"author": "writer"},
                "edit_properties": {"category_id": "relation:category"},
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition =
            generate_definition("article", &schema, &cols(&["title", "author", "category_id"]))
                .unwrap();
        assert_eq!(
            definition.source,
            "type Article = {\n  title: string;\n  author: WriterSummary[];\n  category_id: CategorySummary;\n  Permalink?: string;\n};\n"
        );
        assert_eq!(definition.relation_models, vec!["writer", "category"]);
    }

    #[test]
    fn test_explicit_mode_collapses_complete_groups() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "title": {"type": "text"},
                    "created_on": {"type": "datetime"},
                    "modified_on": {"type": "datetime"},
                    "created_by": {"type": "int"},
                    "modified_by": {"type": "int"}
                },
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition(
            "article",
            &schema,
            &cols(&["title", "created_on", "modified_on", "created_by", "modified_by"]),
        )
        .unwrap();
        assert_eq!(
            definition.source,
            "type Article = {\n  title: string;\n  Permalink?: string;\n} & AuditType;\n"
        );
    }

    #[test]
    fn test_explicit_mode_keeps_partial_groups_as_fields() {
        // Only one audit column listed: no collapse in explicit mode.
        let schema = schema(
            r#"{
                "column_defs": {
                    "title": {"type": "text"},
                    "created_on": {"type": "datetime"}
                },
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition =
            generate_definition("article", &schema, &cols(&["title", "created_on"])).unwrap();
        assert_eq!(
            definition.source,
            "type Article = {\n  title: string;\n  created_on: string;\n  Permalink?: string;\n};\n"
        );
    }

    #[test]
    fn test_explicit_mode_ignores_unknown_columns() {
        let schema = schema(
            r#"{
                "column_defs": {"title": {"type": "text"}},
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition =
            generate_definition("article", &schema, &cols(&["title", "no_such_column"])).unwrap();
        assert_eq!(
            definition.source,
            "type Article = {\n  title: string;\n  Permalink?: string;\n};\n"
        );
    }

    #[test]
    fn test_explicit_mode_keeps_duplicate_relation_targets() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "author": {"type": "relation"},
                    "editor": {"type": "relation"}
                },
                "relations": {"author": "writer", "editor": "writer"},
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let definition =
            generate_definition("article", &schema, &cols(&["author", "editor"])).unwrap();
        assert_eq!(definition.relation_models, vec!["writer", "writer"]);
    }

    #[test]
    fn test_summary_mode_keeps_identity_primary_and_blob_columns() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "workspace_id": {"type": "int"},
                    "slug": {"type": "text"},
                    "portrait": {"type": "blob"},
                    "biography": {"type": "text"},
                    "status": {"type": "tinyint"}
                },
                "primary": "slug",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition("writer", &schema, &Mode::Summary).unwrap();
        assert_eq!(
            definition.source,
            "\ntype WriterSummary = {\n  id: number;\n  workspace_id: number;\n  slug: string;\n  portrait: Binary;\n  Permalink?: string;\n};\n"
        );
        assert!(definition.relation_models.is_empty());
    }

    #[test]
    fn test_summary_mode_never_collapses_groups() {
        // `status` is a group member, but summary mode only keeps it when
        // it is the primary column, and then as a plain field.
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "status": {"type": "tinyint"}
                },
                "primary": "status",
                "hierarchy": false
            }"#,
        );
        let definition = generate_definition("entry", &schema, &Mode::Summary).unwrap();
        assert_eq!(
            definition.source,
            "\ntype EntrySummary = {\n  id: number;\n  status: boolean;\n  Permalink?: string;\n};\n"
        );
    }

    #[test]
    fn test_summary_mode_appends_path_for_hierarchical_models() {
        let schema = schema(
            r#"{
                "column_defs": {"id": {"type": "int"}},
                "primary": "id",
                "hierarchy": true
            }"#,
        );
        let definition = generate_definition("folder", &schema, &Mode::Summary).unwrap();
        assert_eq!(
            definition.source,
            "\ntype FolderSummary = {\n  id: number;\n  Permalink?: string;\n  Path: string;\n};\n"
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let schema = schema(
            r#"{
                "column_defs": {
                    "id": {"type": "int"},
                    "title": {"type": "text"},
                    "status": {"type": "tinyint"}
                },
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let first = generate_definition("article", &schema, &Mode::Full).unwrap();
        let second = generate_definition("article", &schema, &Mode::Full).unwrap();
        assert_eq!(first.source, second.source);
    }

    #[test]
    fn test_missing_relation_target_fails() {
        let schema = schema(
            r#"{
                "column_defs": {"author": {"type": "relation"}},
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let err = generate_definition("article", &schema, &cols(&["author"])).unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingRelationTarget {
                column: "author".to_string()
            }
        );
    }

    #[test]
    fn test_missing_selection_target_fails() {
        let schema = schema(
            r#"{
                "column_defs": {"category_id": {"type": "int"}},
                "edit_properties": {"category_id": "relation"},
                "primary": "id",
                "hierarchy": false
            }"#,
        );
        let err = generate_definition("article", &schema, &cols(&["category_id"])).unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingSelectionTarget {
                column: "category_id".to_string()
            }
        );
    }
}
