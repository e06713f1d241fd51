//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{SupportBotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_logging_config(&settings.logging)?;
    validate_content_config(&settings.content)?;
    
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(SupportBotError::Config(
            "Bot token is required".to_string()
        ));
    }
    
    if let Some(ref webhook_url) = config.webhook_url {
        let parsed = url::Url::parse(webhook_url)?;
        if parsed.scheme() != "https" {
            return Err(SupportBotError::Config(
                format!("Webhook URL must use https, got: {}", parsed.scheme())
            ));
        }
    }
    
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SupportBotError::Config(
            "Log level is required".to_string()
        ));
    }
    
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SupportBotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }
    
    if let Some(ref file_path) = config.file_path {
        if file_path.trim().is_empty() {
            return Err(SupportBotError::Config(
                "Log file path cannot be empty when set".to_string()
            ));
        }
    }
    
    Ok(())
}

/// Validate content configuration
fn validate_content_config(config: &super::ContentConfig) -> Result<()> {
    if let Some(ref path) = config.catalog_path {
        if path.trim().is_empty() {
            return Err(SupportBotError::Config(
                "Catalog path cannot be empty when set".to_string()
            ));
        }
    }
    
    Ok(())
}
