//! Column sets that collapse into shared, pre-named types.
//!
//! The CMS ships TypeScript definitions for its management columns
//! (`AuditType` and friends); declarations reference those instead of
//! re-emitting the member columns.

/// A fixed set of column names that collapses into one shared type.
#[derive(Debug, Clone, Copy)]
pub struct KnownGroup {
    /// TypeScript type the member columns collapse into.
    pub type_name: &'static str,
    /// Member columns.
    pub columns: &'static [&'static str],
}

impl KnownGroup {
    /// True when `column` is one of this group's members.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

/// The four groups the CMS predefines shared types for.
pub static KNOWN_GROUPS: [KnownGroup; 4] = [
    KnownGroup {
        type_name: "AuditType",
        columns: &["created_on", "modified_on", "created_by", "modified_by"],
    },
    KnownGroup {
        type_name: "RevisionType",
        columns: &["rev_type", "rev_object_id", "rev_changed", "rev_note", "rev_diff"],
    },
    KnownGroup {
        type_name: "StatusType",
        columns: &["status"],
    },
    KnownGroup {
        type_name: "DateType",
        columns: &["published_on", "unpublished_on", "has_deadline"],
    },
];

/// Group that `column` belongs to, if any.
pub(crate) fn group_for_column(column: &str) -> Option<&'static KnownGroup> {
    KNOWN_GROUPS.iter().find(|group| group.contains(column))
}
