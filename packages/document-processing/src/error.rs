//! Typed errors for the document processing library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::pipeline::orchestrator::Stage;
use crate::types::session::StateKey;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage output could not be written into the session
    #[error("failed to serialize session state `{key}`: {source}")]
    StateSerialization {
        key: StateKey,
        #[source]
        source: serde_json::Error,
    },

    /// A stage was entered out of order
    #[error("cannot enter stage {found} after {current}")]
    StageOrder { current: Stage, found: Stage },

    /// JSON encoding of a result failed
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A monetary amount that could not be read as a number.
///
/// Never escapes the risk assessor; it is logged and the financial rule
/// is skipped for that run.
#[derive(Debug, Error)]
#[error("invalid monetary amount `{value}`: {source}")]
pub struct AmountParseError {
    pub value: String,
    #[source]
    pub source: ParseFloatError,
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
