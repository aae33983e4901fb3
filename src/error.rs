use thiserror::Error;

#[derive(Error, Debug)]
pub enum EaError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Parse error in `{field}`: {message}")]
    Parse { field: String, message: String },

    #[error("Cannot archive `{field}`: {message}")]
    Unarchivable { field: String, message: String },

    #[error("Resource error: {0}")]
    Resource(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing meta-data: {0}")]
    MissingMetaData(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EaError {
    pub fn parse(field: impl Into<String>, message: impl ToString) -> Self {
        EaError::Parse {
            field: field.into(),
            message: message.to_string(),
        }
    }

    pub fn unarchivable(field: impl Into<String>, message: impl ToString) -> Self {
        EaError::Unarchivable {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Classify a failure to read a JSON document.
    ///
    /// I/O failures are resource errors; anything else means the document
    /// itself is malformed.
    pub fn from_document(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => EaError::Resource(err.into()),
            Category::Syntax | Category::Eof | Category::Data => {
                EaError::Format(format!("Malformed document: {}", err))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EaError>;
