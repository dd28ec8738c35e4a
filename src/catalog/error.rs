//! Catalog-specific error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,

    #[error("duplicate context key: {0}")]
    DuplicateKey(String),

    #[error("context {0} has no examples")]
    NoExamples(String),

    #[error("context {key}: deep dive is not the first example")]
    DeepDiveMismatch { key: String },

    #[error("context {key}: expected 5 interpretation stages, found {found}")]
    StageCount { key: String, found: usize },

    #[error("context {key}: stage {position} is labelled {label}")]
    StageOrder {
        key: String,
        position: usize,
        label: String,
    },

    #[error("context not found: {0}")]
    NotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
