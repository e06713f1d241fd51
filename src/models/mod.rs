//! Data models module
//! 
//! Static content served by the bot: FAQ entries, products and business info.

pub mod catalog;

pub use catalog::{Catalog, FaqEntry, Product, BusinessInfo};
