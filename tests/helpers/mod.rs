//! Test helpers module
//!
//! This module provides utilities and helpers for testing the SupportBot application.
//! It includes a mock Telegram API server and builders for incoming messages.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_data;

pub use telegram_mock::*;
pub use test_data::*;
