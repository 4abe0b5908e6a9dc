//! Centralized error handling, grouped by layer.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Infrastructure(InfrastructureError),
    Presentation(PresentationError),
}

/// Problems with the content of a dataset. Raised by domain constructors and
/// carried to the application as `InfrastructureError::Data`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    InvalidPeriod { raw: String, reason: String },
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Network(NetworkError),
    Parse(ParseError),
    Data(DataError),
}

/// Network-related errors
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    HttpRequestFailed(String),
    HttpStatus { status: u16, status_text: String },
}

/// Decoding errors for the dataset document
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    InvalidJson(String),
}

/// Presentation layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationError {
    Ui(UiError),
}

/// DOM / browser API errors
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    WindowUnavailable,
    ElementNotFound(String),
    DomOperationFailed(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
            AppError::Presentation(e) => write!(f, "Presentation Error: {}", e),
        }
    }
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DataError::InvalidPeriod { raw, reason } => write!(f, "Invalid period '{}': {}", raw, reason),
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Network(e) => write!(f, "{}", e),
            InfrastructureError::Parse(e) => write!(f, "{}", e),
            InfrastructureError::Data(e) => write!(f, "{}", e),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::HttpRequestFailed(msg) => write!(f, "HTTP request failed: {}", msg),
            NetworkError::HttpStatus { status, status_text } => {
                write!(f, "HTTP error: {} {}", status, status_text)
            }
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ParseError::InvalidJson(msg) => write!(f, "Failed to parse JSON: {}", msg),
        }
    }
}

impl Display for PresentationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PresentationError::Ui(e) => write!(f, "{}", e),
        }
    }
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UiError::WindowUnavailable => write!(f, "Window not available"),
            UiError::ElementNotFound(id) => write!(f, "Element '{}' not found", id),
            UiError::DomOperationFailed(msg) => write!(f, "DOM operation failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for UiError {}

impl From<DataError> for InfrastructureError {
    fn from(error: DataError) -> Self {
        InfrastructureError::Data(error)
    }
}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<ParseError> for InfrastructureError {
    fn from(error: ParseError) -> Self {
        InfrastructureError::Parse(error)
    }
}

impl From<UiError> for PresentationError {
    fn from(error: UiError) -> Self {
        PresentationError::Ui(error)
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<PresentationError> for AppError {
    fn from(error: PresentationError) -> Self {
        AppError::Presentation(error)
    }
}

impl From<UiError> for AppError {
    fn from(error: UiError) -> Self {
        AppError::Presentation(PresentationError::Ui(error))
    }
}

pub type LoadResult<T> = Result<T, InfrastructureError>;
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_lift_into_app_error() {
        let err: InfrastructureError = NetworkError::HttpStatus { status: 404, status_text: "Not Found".into() }.into();
        let app: AppError = err.into();
        assert_eq!(app.to_string(), "Infrastructure Error: HTTP error: 404 Not Found");
    }

    #[test]
    fn invalid_period_message_names_the_raw_value() {
        let err = DataError::InvalidPeriod { raw: "1947-13-01".into(), reason: "input is out of range".into() };
        assert_eq!(err.to_string(), "Invalid period '1947-13-01': input is out of range");
    }
}
