use ledger_editor::categories::category_service;
use ledger_editor::constants::DEFAULT_API_BASE_URL;
use ledger_editor::entries::entry_service;
use ledger_editor::models::{Category, Entry};
use ledger_editor::ResourceService;

// Set API_BASE_URL at build time to point the UI at another server.
const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

pub fn categories() -> ResourceService<Category> {
    category_service(reqwest::Client::new(), API_BASE)
}

pub fn entries() -> ResourceService<Entry> {
    entry_service(reqwest::Client::new(), API_BASE)
}
