use thiserror::Error;

/// Application-level error type.
/// `code()` and `user_message()` give presentation layers a stable notification to show.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type for '{file_name}': {mime_type}")]
    UnsupportedFileType {
        file_name: String,
        mime_type: String,
    },

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            AppError::MissingInput(_) => "MISSING_INPUT",
            AppError::Io(_) => "IO_ERROR",
            AppError::Csv(_) => "EXPORT_ERROR",
            AppError::Json(_) => "SERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the user. Unexpected failures are logged and collapsed
    /// into a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedFileType { file_name, .. } => format!(
                "{file_name} is not a supported file type. Please upload PDF, DOC, or DOCX files."
            ),
            AppError::MissingInput(msg) => msg.clone(),
            AppError::Io(e) => {
                tracing::error!("IO error: {e}");
                "A file system error occurred".to_string()
            }
            AppError::Csv(e) => {
                tracing::error!("CSV error: {e}");
                "Exporting the results failed".to_string()
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {e}");
                "Serializing the results failed".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An error occurred during analysis. Please try again.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
