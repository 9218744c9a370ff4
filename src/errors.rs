use std::fmt;

/// Errors raised while inspecting the restaurants table.
#[derive(Debug)]
pub enum InspectError {
    /// Missing or malformed configuration.
    Config(String),
    /// Connection or query failure.
    Database(sqlx::Error),
    /// The report could not be written to the console.
    Output(std::io::Error),
    /// Error with the step that produced it.
    WithContext {
        /// The underlying source of the error.
        source: Box<InspectError>,
        /// Step being executed when the error occurred.
        context: String,
    },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::Config(msg) => write!(f, "Configuration error: {}", msg),
            InspectError::Database(e) => write!(f, "Database error: {}", e),
            InspectError::Output(e) => write!(f, "Output error: {}", e),
            InspectError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::Database(e) => Some(e),
            InspectError::Output(e) => Some(e),
            InspectError::WithContext { source, .. } => Some(source.as_ref()),
            InspectError::Config(_) => None,
        }
    }
}

impl From<sqlx::Error> for InspectError {
    fn from(err: sqlx::Error) -> Self {
        InspectError::Database(err)
    }
}

impl From<std::io::Error> for InspectError {
    fn from(err: std::io::Error) -> Self {
        InspectError::Output(err)
    }
}

/// Extension trait for naming the step an error came from.
/// Similar to `anyhow::Context` but for our `InspectError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, InspectError>;
}

impl<T> ResultExt<T> for Result<T, InspectError> {
    fn context(self, context: impl Into<String>) -> Result<T, InspectError> {
        self.map_err(|e| InspectError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn context(self, context: impl Into<String>) -> Result<T, InspectError> {
        self.map_err(|e| InspectError::WithContext {
            source: Box::new(InspectError::Database(e)),
            context: context.into(),
        })
    }
}
