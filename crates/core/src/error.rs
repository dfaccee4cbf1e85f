use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning a schema into declaration text.
///
/// A relation column with no recorded target is an inconsistency in the
/// fetched schema; generation stops instead of inventing a model name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A `relation` column has no entry in the schema's relation map.
    #[error("column '{column}' is a relation but the schema names no target model for it")]
    MissingRelationTarget { column: String },
    /// A single-selection relation's edit properties name no target model.
    #[error(
        "column '{column}' is a single-selection relation but its edit properties name no target model"
    )]
    MissingSelectionTarget { column: String },
}

/// Failures writing declaration text to the output file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to remove existing output file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to output file {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
