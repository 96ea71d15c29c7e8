use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TreeError {
    // Output sink errors
    IoError(io::Error),
    OutputError(String),

    // Structural errors
    DepthMismatch {
        node: String,
        expected: usize,
        found: usize,
    },
}

impl TreeError {
    /// Create a depth mismatch error for the named node kind
    pub fn depth_mismatch(node: impl Into<String>, expected: usize, found: usize) -> Self {
        TreeError::DepthMismatch {
            node: node.into(),
            expected,
            found,
        }
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::IoError(err) => write!(f, "I/O error: {}", err),
            TreeError::OutputError(msg) => write!(f, "Output error: {}", msg),
            TreeError::DepthMismatch { node, expected, found } => {
                write!(
                    f,
                    "Depth mismatch at {}: expected depth {} but found {}",
                    node, expected, found
                )
            }
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TreeError {
    fn from(err: io::Error) -> Self {
        TreeError::IoError(err)
    }
}

impl From<std::string::FromUtf8Error> for TreeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TreeError::OutputError(err.to_string())
    }
}

// Type alias for Result with TreeError
pub type TreeResult<T> = Result<T, TreeError>;
