//! Remote Store Client
//!
//! HTTP bindings to the remote item collection, organized by domain.

mod item;

use once_cell::sync::Lazy;
use reqwest::Client;

/// Collection resource base URL, overridable at build time.
const API_BASE: &str = match option_env!("EXPENSE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:4000",
};

static CLIENT: Lazy<Client> = Lazy::new(Client::new);

pub(crate) fn client() -> Client {
    CLIENT.clone()
}

pub(crate) fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

// Re-export all public items
pub use item::*;
