//! Error types and exit codes for graphws
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed input)
//! - 3: Data error (unknown or duplicate vertex/edge, bad workspace index,
//!   path or tree cost out of range)

mod macros;

use thiserror::Error;

use crate::graph::types::Vertex;

/// Exit codes for the graphws binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph precondition violated (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph taxonomy (exit code 3)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: Vertex },

    #[error("vertex already exists: {vertex}")]
    DuplicateVertex { vertex: Vertex },

    #[error("unknown edge: ({from}, {to})")]
    UnknownEdge { from: Vertex, to: Vertex },

    #[error("edge already exists: ({from}, {to})")]
    DuplicateEdge { from: Vertex, to: Vertex },

    #[error("cost overflow when adding edge ({from}, {to})")]
    CostOverflow { from: Vertex, to: Vertex },

    #[error("unknown workspace {index} (have {count})")]
    UnknownWorkspace { index: usize, count: usize },

    #[error("workspace {index} cannot be deleted: {reason}")]
    ProtectedWorkspace { index: usize, reason: String },

    #[error("graph structures out of sync after {operation} ({from}, {to})")]
    Inconsistent {
        operation: String,
        from: Vertex,
        to: Vertex,
    },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("interrupted")]
    Interrupted,
}

impl GraphError {
    pub fn unknown_vertex(vertex: Vertex) -> Self {
        GraphError::UnknownVertex { vertex }
    }

    pub fn duplicate_vertex(vertex: Vertex) -> Self {
        GraphError::DuplicateVertex { vertex }
    }

    pub fn unknown_edge(from: Vertex, to: Vertex) -> Self {
        GraphError::UnknownEdge { from, to }
    }

    pub fn duplicate_edge(from: Vertex, to: Vertex) -> Self {
        GraphError::DuplicateEdge { from, to }
    }

    pub fn cost_overflow(from: Vertex, to: Vertex) -> Self {
        GraphError::CostOverflow { from, to }
    }

    /// Create a parse error for a 1-based input line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_) | GraphError::UsageError(_) | GraphError::Parse { .. } => {
                ExitCode::Usage
            }

            GraphError::UnknownVertex { .. }
            | GraphError::DuplicateVertex { .. }
            | GraphError::UnknownEdge { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::CostOverflow { .. }
            | GraphError::UnknownWorkspace { .. }
            | GraphError::ProtectedWorkspace { .. } => ExitCode::Data,

            GraphError::Inconsistent { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_)
            | GraphError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::UnknownEdge { .. } => "unknown_edge",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::CostOverflow { .. } => "cost_overflow",
            GraphError::UnknownWorkspace { .. } => "unknown_workspace",
            GraphError::ProtectedWorkspace { .. } => "protected_workspace",
            GraphError::Inconsistent { .. } => "inconsistent",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Parse { .. } => "parse_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
            GraphError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_exit_codes() {
        assert_eq!(GraphError::unknown_vertex(1).exit_code(), ExitCode::Data);
        assert_eq!(GraphError::duplicate_vertex(1).exit_code(), ExitCode::Data);
        assert_eq!(GraphError::unknown_edge(1, 2).exit_code(), ExitCode::Data);
        assert_eq!(GraphError::duplicate_edge(1, 2).exit_code(), ExitCode::Data);
        assert_eq!(GraphError::cost_overflow(1, 2).exit_code(), ExitCode::Data);
        assert_eq!(GraphError::parse(3, "bad").exit_code(), ExitCode::Usage);
        assert_eq!(GraphError::Interrupted.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraphError::unknown_edge(4, 7).to_string(),
            "unknown edge: (4, 7)"
        );
        assert_eq!(
            GraphError::parse(2, "expected three fields").to_string(),
            "line 2: expected three fields"
        );
    }

    #[test]
    fn test_to_json() {
        let json = GraphError::duplicate_vertex(5).to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "duplicate_vertex");
        assert_eq!(json["error"]["message"], "vertex already exists: 5");
    }
}
