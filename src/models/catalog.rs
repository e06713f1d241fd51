//! Content catalog
//!
//! The FAQ texts, product records and business information the bot serves
//! verbatim. The catalog is read-only once loaded; the built-in content can be
//! replaced by a TOML or JSON file at startup.

use std::collections::HashSet;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::state::router::MenuAction;
use crate::utils::errors::{SupportBotError, Result};

/// Topic key of the business-hours FAQ, also served from the main menu
pub const BUSINESS_HOURS_TOPIC: &str = "business_hours";

/// A single FAQ topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Stable topic key
    pub key: String,
    /// Keyboard label; matched case-insensitively
    pub label: String,
    /// Response text
    pub text: String,
}

/// A product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier the user types to select the product
    pub id: String,
    pub name: String,
    pub price: String,
    /// Free-form stock status, e.g. "In Stock"
    pub stock: String,
}

/// Business contact and location texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub support_contact: String,
    pub store_location: String,
    /// Appended to every product detail
    pub ordering_info: String,
}

/// Static content served by the bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub faqs: Vec<FaqEntry>,
    pub products: Vec<Product>,
    pub business: BusinessInfo,
}

impl Catalog {
    /// Built-in content
    pub fn builtin() -> Self {
        Self {
            faqs: vec![
                FaqEntry {
                    key: "return_policy".to_string(),
                    label: "Return Policy".to_string(),
                    text: "Return Policy:\n\n\
                        • 7 days return window\n\
                        • Product must be unused\n\
                        • Original packaging required\n\
                        • Refund processed in 5-7 business days\n\n\
                        Please contact us if you have any issues."
                        .to_string(),
                },
                FaqEntry {
                    key: "shipping".to_string(),
                    label: "Shipping Info".to_string(),
                    text: "Shipping Information:\n\n\
                        • Free shipping on orders above Rs. 500\n\
                        • Delivery: 3-5 business days\n\
                        • Metro cities: 2-3 days\n\
                        • Tracking details provided after order confirmation\n\n\
                        You can track your order anytime."
                        .to_string(),
                },
                FaqEntry {
                    key: "payment".to_string(),
                    label: "Payment Methods".to_string(),
                    text: "Payment Methods:\n\n\
                        • Credit/Debit Cards\n\
                        • UPI (GPay, PhonePe, Paytm)\n\
                        • Net Banking\n\
                        • Cash on Delivery (Rs. 50 extra)\n\n\
                        Secure payment gateway enabled."
                        .to_string(),
                },
                FaqEntry {
                    key: BUSINESS_HOURS_TOPIC.to_string(),
                    label: "Business Hours".to_string(),
                    text: "Business Hours:\n\n\
                        Monday-Friday: 9 AM - 6 PM\n\
                        Saturday: 10 AM - 4 PM\n\
                        Sunday: Closed\n\n\
                        We are available to serve you during these hours."
                        .to_string(),
                },
            ],
            products: vec![
                product("1", "Wireless Headphones", "Rs. 2,499", "In Stock"),
                product("2", "Smart Watch", "Rs. 3,999", "In Stock"),
                product("3", "Power Bank 20000mAh", "Rs. 1,299", "Limited Stock"),
                product("4", "Bluetooth Speaker", "Rs. 1,799", "In Stock"),
            ],
            business: BusinessInfo {
                support_contact: "Customer Support\n\n\
                    Contact our support team:\n\n\
                    Email: support@example.com\n\
                    Phone: +91-9876543210\n\
                    WhatsApp: +91-9876543210\n\n\
                    Support Hours: Monday-Saturday, 9 AM - 6 PM\n\n\
                    We will respond within 24 hours."
                    .to_string(),
                store_location: "Store Location\n\n\
                    Head Office:\n\
                    123, MG Road, Connaught Place\n\
                    New Delhi - 110001\n\n\
                    Landmark: Near Metro Station\n\n\
                    Store Timings:\n\
                    Monday-Saturday: 10 AM - 8 PM\n\
                    Sunday: 11 AM - 6 PM\n\n\
                    Google Maps: [Location Link]"
                    .to_string(),
                ordering_info: "To place an order:\n\
                    Phone/WhatsApp: +91-9876543210\n\
                    Website: www.example.com"
                    .to_string(),
            },
        }
    }

    /// Load a catalog from a TOML or JSON file (format picked by extension)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog file");

        let source = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?;
        let catalog: Catalog = source.try_deserialize()?;
        catalog.validate()?;

        info!(
            path = %path.display(),
            faqs = catalog.faqs.len(),
            products = catalog.products.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Catalog from the optional configured path, built-in content otherwise
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No catalog path configured, using built-in content");
                Ok(Self::builtin())
            }
        }
    }

    /// Check the invariants the router relies on
    pub fn validate(&self) -> Result<()> {
        if self.faqs.is_empty() {
            return Err(SupportBotError::Catalog("At least one FAQ entry is required".to_string()));
        }
        if self.products.is_empty() {
            return Err(SupportBotError::Catalog("At least one product is required".to_string()));
        }

        let mut keys = HashSet::new();
        let mut labels = HashSet::new();
        for faq in &self.faqs {
            if faq.key.trim().is_empty() || faq.label.trim().is_empty() || faq.text.trim().is_empty() {
                return Err(SupportBotError::Catalog(
                    format!("FAQ entry '{}' has an empty key, label or text", faq.key)
                ));
            }
            if !keys.insert(faq.key.as_str()) {
                return Err(SupportBotError::Catalog(format!("Duplicate FAQ key: {}", faq.key)));
            }
            if !labels.insert(label_key(&faq.label)) {
                return Err(SupportBotError::Catalog(format!("Duplicate FAQ label: {}", faq.label)));
            }
            // The menu table wins over FAQ labels, so a colliding button would never reach its topic
            let shadowed = match MenuAction::from_label(&faq.label) {
                Some(MenuAction::BusinessHours) => faq.key != BUSINESS_HOURS_TOPIC,
                Some(_) => true,
                None => false,
            };
            if shadowed {
                return Err(SupportBotError::Catalog(
                    format!("FAQ label '{}' collides with a menu label", faq.label)
                ));
            }
        }
        if !keys.contains(BUSINESS_HOURS_TOPIC) {
            return Err(SupportBotError::Catalog(
                format!("FAQ topic '{}' is required", BUSINESS_HOURS_TOPIC)
            ));
        }

        let mut ids = HashSet::new();
        for product in &self.products {
            if product.id.trim().is_empty() || product.name.trim().is_empty() {
                return Err(SupportBotError::Catalog("Product id and name are required".to_string()));
            }
            if !ids.insert(product.id.as_str()) {
                return Err(SupportBotError::Catalog(format!("Duplicate product id: {}", product.id)));
            }
        }

        if self.business.support_contact.trim().is_empty()
            || self.business.store_location.trim().is_empty()
        {
            return Err(SupportBotError::Catalog(
                "Support contact and store location are required".to_string()
            ));
        }

        Ok(())
    }

    /// FAQ entry by topic key
    pub fn faq(&self, key: &str) -> Option<&FaqEntry> {
        self.faqs.iter().find(|faq| faq.key == key)
    }

    /// FAQ entry by keyboard label, ignoring case
    pub fn faq_by_label(&self, label: &str) -> Option<&FaqEntry> {
        let wanted = label_key(label);
        self.faqs.iter().find(|faq| label_key(&faq.label) == wanted)
    }

    /// Product by id, ignoring surrounding whitespace
    pub fn product(&self, id: &str) -> Option<&Product> {
        let id = id.trim();
        self.products.iter().find(|product| product.id == id)
    }

    /// Selection hint such as "1-4", from the first and last product ids
    pub fn product_range(&self) -> String {
        match (self.products.first(), self.products.last()) {
            (Some(first), Some(last)) if first.id != last.id => format!("{}-{}", first.id, last.id),
            (Some(only), _) => only.id.clone(),
            _ => String::new(),
        }
    }

    /// Listing of every product with price and stock status
    pub fn product_listing(&self) -> String {
        let mut listing = String::from("Our Products:\n\n");
        for product in &self.products {
            listing.push_str(&format!("{}. {}\n", product.id, product.name));
            listing.push_str(&format!("   Price: {}\n", product.price));
            listing.push_str(&format!("   Status: {}\n\n", product.stock));
        }
        listing.push_str(&format!(
            "To learn more about a product, please send the product number ({})",
            self.product_range()
        ));
        listing
    }

    /// Detail text for a single product
    pub fn product_detail(&self, product: &Product) -> String {
        format!(
            "{}\n\n\
            Price: {}\n\
            Availability: {}\n\n\
            Features:\n\
            • High quality product\n\
            • 1 year warranty\n\
            • Free shipping on orders above Rs. 500\n\n\
            {}\n\n\
            Would you like to know anything else?",
            product.name, product.price, product.stock, self.business.ordering_info
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Case-folded form used both to compare and to look up FAQ labels
fn label_key(label: &str) -> String {
    label.to_lowercase()
}

fn product(id: &str, name: &str, price: &str, stock: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
    }
}
