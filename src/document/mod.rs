//! Data handed to the writer by the host: matched documents and the requested field list.

mod field_list;
mod types;


pub use field_list::RequestedFieldList;
pub use types::{FieldValue, MatchedDocument, QueryResponse};
