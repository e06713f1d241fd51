//! Conversation router
//!
//! Maps (current state, received text) to (reply, next state). Menu labels
//! are dispatched through explicit lookup tables and every branch produces a
//! reply, so routing never fails.

use std::sync::Arc;
use regex::Regex;
use serde::Serialize;
use tracing::debug;
use crate::models::catalog::{Catalog, BUSINESS_HOURS_TOPIC};
use crate::utils::errors::Result;
use crate::utils::helpers::greeting_name;
use crate::utils::logging::log_transition;
use super::context::ConversationState;
use super::storage::SessionStore;

/// Label that leads back to the main menu from every sub-flow
pub const MAIN_MENU_LABEL: &str = "Main Menu";

/// Accepted order numbers: "ORD" in any case followed by ASCII digits
pub const ORDER_NUMBER_PATTERN: &str = r"(?i)^ORD[0-9]+$";

const MAIN_MENU_PROMPT: &str = "Main Menu:";
const NOT_UNDERSTOOD: &str = "Sorry, I did not understand. Please select an option:";
const ORDER_NUMBER_PROMPT: &str = "Please enter your order number:\n\n(Format: ORD12345)";
const INVALID_ORDER_NUMBER: &str =
    "Invalid order number format.\n\nPlease enter order number in format: ORD12345";
const FAQ_PROMPT: &str = "Frequently Asked Questions\n\nPlease select a topic:";
const NON_TEXT_MESSAGE: &str = "Sorry, I can only read text messages.";
const FAREWELL: &str = "Thank you! Feel free to message us if you need any assistance.";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    TrackOrder,
    ViewProducts,
    Faqs,
    ContactSupport,
    BusinessHours,
    StoreLocation,
    MainMenu,
}

/// Label → action table, matched case-sensitively
const MENU_TABLE: &[(&str, MenuAction)] = &[
    ("Track Order", MenuAction::TrackOrder),
    ("View Products", MenuAction::ViewProducts),
    ("FAQs", MenuAction::Faqs),
    ("Contact Support", MenuAction::ContactSupport),
    ("Business Hours", MenuAction::BusinessHours),
    ("Store Location", MenuAction::StoreLocation),
    (MAIN_MENU_LABEL, MenuAction::MainMenu),
];

/// Main keyboard layout, two buttons per row
const MAIN_KEYBOARD: &[&[&str]] = &[
    &["Track Order", "View Products"],
    &["FAQs", "Contact Support"],
    &["Business Hours", "Store Location"],
];

impl MenuAction {
    /// Action for an exact menu label
    pub fn from_label(label: &str) -> Option<Self> {
        MENU_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, action)| *action)
    }
}

/// Outgoing message: text, quick-reply rows and the state to move to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// Quick-reply labels, one inner vector per keyboard row
    pub options: Vec<Vec<String>>,
    pub next_state: ConversationState,
}

impl Reply {
    fn new(text: impl Into<String>, options: Vec<Vec<String>>, next_state: ConversationState) -> Self {
        Self {
            text: text.into(),
            options,
            next_state,
        }
    }

    /// Every offered label, flattened in keyboard order
    pub fn option_labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().flatten().map(String::as_str)
    }
}

/// Finite-state router over the content catalog, backed by an injected session store
#[derive(Debug, Clone)]
pub struct ConversationRouter {
    catalog: Arc<Catalog>,
    sessions: Arc<dyn SessionStore>,
    order_number: Regex,
}

impl ConversationRouter {
    /// Create a router serving `catalog` and keeping state in `sessions`
    pub fn new(catalog: Arc<Catalog>, sessions: Arc<dyn SessionStore>) -> Result<Self> {
        Ok(Self {
            catalog,
            sessions,
            order_number: Regex::new(ORDER_NUMBER_PATTERN)?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Route one message for a user: load state, compute the reply, store the next state
    pub fn handle_message(&self, user_id: i64, text: &str) -> Reply {
        let current = self.sessions.state_for(user_id);
        let reply = self.route(current, text);
        self.sessions.set(user_id, reply.next_state);
        log_transition(user_id, current, reply.next_state);
        reply
    }

    /// Greeting for `/start`; puts the user back in the main menu
    pub fn start(&self, user_id: i64, first_name: Option<&str>) -> Reply {
        let current = self.sessions.state_for(user_id);
        self.sessions.set(user_id, ConversationState::MainMenu);
        log_transition(user_id, current, ConversationState::MainMenu);

        let text = format!(
            "Hello {},\n\n\
            I am your customer support assistant. How can I help you today?\n\n\
            Please select an option:",
            greeting_name(first_name)
        );
        Reply::new(text, main_keyboard(), ConversationState::MainMenu)
    }

    /// Farewell for `/cancel`; puts the user back in the main menu
    pub fn cancel(&self, user_id: i64) -> Reply {
        let current = self.sessions.state_for(user_id);
        self.sessions.set(user_id, ConversationState::MainMenu);
        log_transition(user_id, current, ConversationState::MainMenu);
        Reply::new(FAREWELL, main_keyboard(), ConversationState::MainMenu)
    }

    /// Re-prompt for a message without text; the state is left as is
    pub fn non_text(&self, user_id: i64) -> Reply {
        let current = self.sessions.state_for(user_id);
        let (hint, options) = match current {
            ConversationState::MainMenu => ("Please select an option:", main_keyboard()),
            ConversationState::OrderTracking => ("Please enter your order number:", back_keyboard()),
            ConversationState::ProductInfo => ("Please send the product number:", back_keyboard()),
        };
        Reply::new(format!("{}\n\n{}", NON_TEXT_MESSAGE, hint), options, current)
    }

    /// Pure transition function
    pub fn route(&self, state: ConversationState, text: &str) -> Reply {
        debug!(state = %state, text = text, "Routing message");
        match state {
            ConversationState::MainMenu => self.route_main_menu(text),
            ConversationState::OrderTracking => self.route_order_tracking(text),
            ConversationState::ProductInfo => self.route_product_info(text),
        }
    }

    fn route_main_menu(&self, text: &str) -> Reply {
        if let Some(action) = MenuAction::from_label(text) {
            return self.menu_action(action);
        }

        if let Some(faq) = self.catalog.faq_by_label(text) {
            return Reply::new(faq.text.clone(), self.faq_keyboard(), ConversationState::MainMenu);
        }

        Reply::new(NOT_UNDERSTOOD, main_keyboard(), ConversationState::MainMenu)
    }

    fn menu_action(&self, action: MenuAction) -> Reply {
        match action {
            MenuAction::TrackOrder => {
                Reply::new(ORDER_NUMBER_PROMPT, back_keyboard(), ConversationState::OrderTracking)
            }
            MenuAction::ViewProducts => Reply::new(
                self.catalog.product_listing(),
                back_keyboard(),
                ConversationState::ProductInfo,
            ),
            MenuAction::Faqs => Reply::new(FAQ_PROMPT, self.faq_keyboard(), ConversationState::MainMenu),
            MenuAction::ContactSupport => Reply::new(
                self.catalog.business.support_contact.clone(),
                main_keyboard(),
                ConversationState::MainMenu,
            ),
            MenuAction::BusinessHours => {
                let text = self
                    .catalog
                    .faq(BUSINESS_HOURS_TOPIC)
                    .map(|faq| faq.text.clone())
                    .unwrap_or_else(|| NOT_UNDERSTOOD.to_string());
                Reply::new(text, main_keyboard(), ConversationState::MainMenu)
            }
            MenuAction::StoreLocation => Reply::new(
                self.catalog.business.store_location.clone(),
                main_keyboard(),
                ConversationState::MainMenu,
            ),
            MenuAction::MainMenu => main_menu_reply(),
        }
    }

    fn route_order_tracking(&self, text: &str) -> Reply {
        if text == MAIN_MENU_LABEL {
            return main_menu_reply();
        }

        let candidate = text.trim();
        if self.order_number.is_match(candidate) {
            return Reply::new(
                order_status(&candidate.to_uppercase()),
                main_keyboard(),
                ConversationState::MainMenu,
            );
        }

        Reply::new(INVALID_ORDER_NUMBER, back_keyboard(), ConversationState::OrderTracking)
    }

    fn route_product_info(&self, text: &str) -> Reply {
        if text == MAIN_MENU_LABEL {
            return main_menu_reply();
        }

        match self.catalog.product(text) {
            Some(product) => Reply::new(
                self.catalog.product_detail(product),
                main_keyboard(),
                ConversationState::MainMenu,
            ),
            None => Reply::new(
                format!("Invalid product number. Please select {}:", self.catalog.product_range()),
                back_keyboard(),
                ConversationState::ProductInfo,
            ),
        }
    }

    /// FAQ topics two per row, then the way back
    fn faq_keyboard(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = self
            .catalog
            .faqs
            .chunks(2)
            .map(|pair| pair.iter().map(|faq| faq.label.clone()).collect())
            .collect();
        rows.push(vec![MAIN_MENU_LABEL.to_string()]);
        rows
    }
}

fn main_keyboard() -> Vec<Vec<String>> {
    MAIN_KEYBOARD
        .iter()
        .map(|row| row.iter().map(|label| label.to_string()).collect())
        .collect()
}

fn back_keyboard() -> Vec<Vec<String>> {
    vec![vec![MAIN_MENU_LABEL.to_string()]]
}

fn main_menu_reply() -> Reply {
    Reply::new(MAIN_MENU_PROMPT, main_keyboard(), ConversationState::MainMenu)
}

/// Simulated tracking result; there is no order backend
fn order_status(order_id: &str) -> String {
    format!(
        "Order Status\n\n\
        Order ID: {}\n\
        Status: Out for Delivery\n\n\
        Timeline:\n\
        • Order Placed: 12 Jan 2026\n\
        • Shipped: 13 Jan 2026\n\
        • Out for Delivery: 14 Jan 2026\n\
        • Expected Delivery: Today by 6 PM\n\n\
        Tracking Link: [Track Order]\n\n\
        Delivery Partner: BlueDart\n\
        Contact: 1800-123-4567",
        order_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::InMemorySessionStore;

    fn router() -> ConversationRouter {
        ConversationRouter::new(
            Arc::new(Catalog::builtin()),
            Arc::new(InMemorySessionStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_menu_table_is_case_sensitive() {
        assert_eq!(MenuAction::from_label("Track Order"), Some(MenuAction::TrackOrder));
        assert_eq!(MenuAction::from_label("track order"), None);
        assert_eq!(MenuAction::from_label("Main Menu"), Some(MenuAction::MainMenu));
    }

    #[test]
    fn test_every_main_keyboard_label_is_routable() {
        for label in MAIN_KEYBOARD.iter().flat_map(|row| row.iter()) {
            assert!(MenuAction::from_label(label).is_some(), "unroutable label {}", label);
        }
    }

    #[test]
    fn test_lowercase_faq_label_uses_faq_keyboard() {
        let router = router();
        let reply = router.route(ConversationState::MainMenu, "shipping info");
        assert!(reply.text.starts_with("Shipping Information:"));
        assert!(reply.option_labels().any(|label| label == "Payment Methods"));
        assert_eq!(reply.next_state, ConversationState::MainMenu);
    }

    #[test]
    fn test_business_hours_menu_entry_uses_main_keyboard() {
        let router = router();
        let reply = router.route(ConversationState::MainMenu, "Business Hours");
        assert!(reply.text.starts_with("Business Hours:"));
        assert_eq!(reply.options, main_keyboard());

        let lower = router.route(ConversationState::MainMenu, "business hours");
        assert_eq!(lower.text, reply.text);
        assert!(lower.option_labels().any(|label| label == "Return Policy"));
    }

    #[test]
    fn test_faq_keyboard_layout() {
        let router = router();
        let reply = router.route(ConversationState::MainMenu, "FAQs");
        assert_eq!(
            reply.options,
            vec![
                vec!["Return Policy".to_string(), "Shipping Info".to_string()],
                vec!["Payment Methods".to_string(), "Business Hours".to_string()],
                vec!["Main Menu".to_string()],
            ]
        );
    }

    #[test]
    fn test_order_number_accepts_lowercase_and_whitespace() {
        let router = router();
        let reply = router.route(ConversationState::OrderTracking, "  ord987 ");
        assert!(reply.text.contains("Order ID: ORD987"));
        assert_eq!(reply.next_state, ConversationState::MainMenu);
    }

    #[test]
    fn test_order_number_requires_digits() {
        let router = router();
        for text in ["ORD", "ORDER12", "ORD12a", "XYZ12345"] {
            let reply = router.route(ConversationState::OrderTracking, text);
            assert_eq!(reply.next_state, ConversationState::OrderTracking, "input {}", text);
            assert_eq!(reply.text, INVALID_ORDER_NUMBER);
        }
    }

    #[test]
    fn test_order_number_rejects_non_ascii_digits() {
        let router = router();
        for text in ["ORD١٢٣", "ORD１２３", "ORD12٣"] {
            let reply = router.route(ConversationState::OrderTracking, text);
            assert_eq!(reply.next_state, ConversationState::OrderTracking, "input {}", text);
            assert_eq!(reply.text, INVALID_ORDER_NUMBER);
        }
    }

    #[test]
    fn test_product_id_accepts_surrounding_whitespace() {
        let router = router();
        let reply = router.route(ConversationState::ProductInfo, " 2 ");
        assert_eq!(reply.next_state, ConversationState::MainMenu);
        assert!(reply.text.contains("Smart Watch"));
    }

    #[test]
    fn test_handle_message_persists_next_state() {
        let router = router();
        router.handle_message(7, "View Products");
        assert_eq!(router.sessions().state_for(7), ConversationState::ProductInfo);
        router.handle_message(7, "Main Menu");
        assert_eq!(router.sessions().state_for(7), ConversationState::MainMenu);
    }

    #[test]
    fn test_start_and_cancel_reset_state() {
        let router = router();
        router.handle_message(9, "Track Order");

        let greeting = router.start(9, Some("Asha"));
        assert!(greeting.text.starts_with("Hello Asha,"));
        assert_eq!(router.sessions().state_for(9), ConversationState::MainMenu);

        router.handle_message(9, "Track Order");
        let farewell = router.cancel(9);
        assert_eq!(farewell.text, FAREWELL);
        assert_eq!(router.sessions().state_for(9), ConversationState::MainMenu);
    }

    #[test]
    fn test_non_text_keeps_state() {
        let router = router();
        router.handle_message(11, "Track Order");
        let reply = router.non_text(11);
        assert!(reply.text.starts_with(NON_TEXT_MESSAGE));
        assert_eq!(reply.next_state, ConversationState::OrderTracking);
        assert_eq!(router.sessions().state_for(11), ConversationState::OrderTracking);
    }
}
