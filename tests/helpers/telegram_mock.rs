//! Mock Telegram API Server for testing
//! 
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Telegram method names are case-insensitive; teloxide sends them capitalized
const SEND_MESSAGE_PATH: &str = r"(?i)^/bot[^/]+/sendmessage$";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose requests go to this server
    pub fn bot(&self) -> Bot {
        let api_url = url::Url::parse(&self.server.uri()).expect("mock server uri is a valid url");
        Bot::new(test_bot_token()).set_api_url(api_url)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let response_body = if config.success {
            json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "SupportBot",
                        "username": "support_bot"
                    },
                    "chat": {
                        "id": test_user_id(),
                        "type": "private",
                        "first_name": "Test"
                    },
                    "date": 1640995200,
                    "text": "Test reply"
                }
            })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })
        };

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE_PATH))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every sendMessage request received so far
    pub async fn sent_messages(&self) -> Vec<Value> {
        let pattern = regex::Regex::new(SEND_MESSAGE_PATH).expect("valid pattern");
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| pattern.is_match(req.url.path()))
            .map(|req| serde_json::from_slice(&req.body).expect("sendMessage body is JSON"))
            .collect()
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

/// Keyboard labels from a sendMessage body, row by row
pub fn keyboard_labels(body: &Value) -> Vec<Vec<String>> {
    body["reply_markup"]["keyboard"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    row.as_array()
                        .map(|buttons| {
                            buttons
                                .iter()
                                .filter_map(|button| button["text"].as_str().map(str::to_string))
                                .collect()
                        })
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}
