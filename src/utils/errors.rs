//! Error handling for SupportBot
//! 
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for SupportBot application
#[derive(Error, Debug)]
pub enum SupportBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
    
    #[error("Catalog error: {0}")]
    Catalog(String),
    
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
    
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for SupportBot operations
pub type Result<T> = std::result::Result<T, SupportBotError>;

impl SupportBotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SupportBotError::Telegram(_) => true,
            SupportBotError::Config(_) => false,
            SupportBotError::ConfigSource(_) => false,
            SupportBotError::Catalog(_) => false,
            SupportBotError::Io(_) => true,
            SupportBotError::UrlParse(_) => false,
            SupportBotError::Pattern(_) => false,
            SupportBotError::InvalidInput(_) => true,
        }
    }
    
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SupportBotError::Config(_) => ErrorSeverity::Critical,
            SupportBotError::ConfigSource(_) => ErrorSeverity::Critical,
            SupportBotError::Catalog(_) => ErrorSeverity::Critical,
            SupportBotError::Telegram(_) => ErrorSeverity::Warning,
            SupportBotError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
