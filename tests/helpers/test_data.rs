//! Test data helpers for creating test objects
//! 
//! Incoming Telegram messages are built from Bot API JSON so the tests
//! exercise the same deserialization path as real updates.

use serde_json::json;
use teloxide::types::Message;

/// Private-chat text message from a user
pub fn create_text_message(user_id: i64, first_name: &str, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1640995200,
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": first_name
        },
        "from": {
            "id": user_id,
            "is_bot": false,
            "first_name": first_name
        },
        "text": text
    }))
    .expect("valid text message json")
}

/// Private-chat message carrying a location instead of text
pub fn create_location_message(user_id: i64, first_name: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 2,
        "date": 1640995200,
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": first_name
        },
        "from": {
            "id": user_id,
            "is_bot": false,
            "first_name": first_name
        },
        "location": {
            "latitude": 28.6315,
            "longitude": 77.2167
        }
    }))
    .expect("valid location message json")
}
