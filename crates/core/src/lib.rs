//! Generation core for CMS model type declarations.
//!
//! Pure transformation from a fetched [`Schema`](modelts_cms_sdk::Schema)
//! to TypeScript declaration text: the column type mapper, the known-group
//! column sets, the three generation modes, and the append-only output
//! writer. Nothing in this crate talks to the network.

mod error;
mod generator;
mod groups;
mod mapper;
mod naming;
mod writer;

pub use error::{GenerateError, WriteError};
pub use generator::{Definition, Mode, generate_definition};
pub use groups::{KNOWN_GROUPS, KnownGroup};
pub use mapper::{is_single_selection_relation, map_type};
pub use naming::upper_camel_case;
pub use writer::OutputWriter;
