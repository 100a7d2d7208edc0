use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tinct operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TinctError {
    #[error("Parse error: {message}")]
    #[diagnostic(code(tinct::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(tinct::param))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tinct::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(tinct::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TinctError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        TinctError::Parse {
            message: message.into(),
            help: None,
        }
    }

    pub(crate) fn parse_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        TinctError::Parse {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>, help: impl Into<String>) -> Self {
        TinctError::InvalidParameter {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TinctError>;
