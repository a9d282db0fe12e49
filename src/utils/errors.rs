use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("{0}")]
    InvalidArgs(String),

    #[error("{0}")]
    FileNotFound(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Glossary(String),

    #[error("{0}")]
    Translation(String),

    #[error("{0}")]
    FileWrite(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Operation {name} failed with code {code}: {message}")]
    Operation {
        name: String,
        code: i32,
        message: String,
    },

    #[error("Operation {name} did not finish within {seconds}s")]
    Timeout { name: String, seconds: u64 },
}

pub type Result<T> = std::result::Result<T, TranslatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ArgMissing,
    InvalidArgs,
    FileNotFound,
    AuthFailed,
    GlossaryError,
    TranslationError,
    FileWriteError,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ArgMissing => "ARG_MISSING",
            ErrorCode::InvalidArgs => "INVALID_ARGS",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::AuthFailed => "AUTH_FAILED",
            ErrorCode::GlossaryError => "GLOSSARY_ERROR",
            ErrorCode::TranslationError => "TRANSLATION_ERROR",
            ErrorCode::FileWriteError => "FILE_WRITE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// Process exit status for this code. Anything unclassified exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::AuthFailed => 2,
            ErrorCode::GlossaryError => 3,
            ErrorCode::TranslationError => 4,
            ErrorCode::FileWriteError => 5,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TranslatorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TranslatorError::InvalidArgs(_) => ErrorCode::InvalidArgs,
            TranslatorError::FileNotFound(_) => ErrorCode::FileNotFound,
            TranslatorError::Auth(_) => ErrorCode::AuthFailed,
            TranslatorError::Glossary(_) => ErrorCode::GlossaryError,
            TranslatorError::Translation(_) => ErrorCode::TranslationError,
            TranslatorError::FileWrite(_) => ErrorCode::FileWriteError,
            TranslatorError::Config(_) => ErrorCode::ConfigError,
            _ => ErrorCode::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    pub fn auth(context: &str, err: impl std::fmt::Display) -> Self {
        TranslatorError::Auth(format!("{}: {}", context, err))
    }

    pub fn glossary(context: &str, err: impl std::fmt::Display) -> Self {
        TranslatorError::Glossary(format!("{}: {}", context, err))
    }

    pub fn translation(context: &str, err: impl std::fmt::Display) -> Self {
        TranslatorError::Translation(format!("{}: {}", context, err))
    }
}
