use miette::Diagnostic;
use thiserror::Error;

#[derive(Diagnostic, Debug, Error)]
pub enum IndexError {
    #[error("failed to parse feature data json: {0}")]
    #[diagnostic(code(index_error::invalid_json))]
    InvalidJson(#[from] serde_json::Error),
    #[error("element path must look like type/name/id. path: {0:?}")]
    #[diagnostic(code(index_error::invalid_path))]
    InvalidElementPath(String),
}

/// Problems with individual entries of the feature data. The entry is skipped, but the rest of the data still loads.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
pub enum IndexWarning {
    #[error("id {id} is already used by {existing}. skipped {skipped}")]
    #[diagnostic(code(index_warning::duplicate_id))]
    DuplicateId {
        id: String,
        existing: String,
        skipped: String,
    },
    #[error("route {name} with id {id} has no coordinates")]
    #[diagnostic(code(index_warning::empty_route))]
    EmptyRoute { name: String, id: String },
    #[error("invalid id {id:?} for element {name}")]
    #[diagnostic(code(index_warning::invalid_id))]
    InvalidId { name: String, id: String },
}
