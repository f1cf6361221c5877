use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::constants::*;
use crate::entries::parse_amount;
use crate::models::{Category, Entry};
use crate::server::store::InMemoryDb;

const ENTRY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year]");

pub fn validate_string_length(
    value: &str,
    field_name: &str,
    min_length: usize,
    max_length: usize,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{} não pode ficar em branco", field_name));
    }
    let length = trimmed.chars().count();
    if length < min_length {
        return Some(format!(
            "{} deve ter no mínimo {} caracteres",
            field_name, min_length
        ));
    }
    if length > max_length {
        return Some(format!(
            "{} deve ter no máximo {} caracteres",
            field_name, max_length
        ));
    }
    None
}

pub fn validate_date(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Data não pode ficar em branco".to_string());
    }

    match time::Date::parse(value.trim(), ENTRY_DATE_FORMAT) {
        Ok(_) => None,
        Err(_) => Some("Data inválida".to_string()),
    }
}

pub fn validate_amount(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Valor não pode ficar em branco".to_string());
    }
    match parse_amount(value) {
        Some(_) => None,
        None => Some("Valor inválido".to_string()),
    }
}

pub fn validate_category_exists(db: &InMemoryDb, category_id: Option<i64>) -> Option<String> {
    match category_id {
        None => Some("Categoria não pode ficar em branco".to_string()),
        Some(id) if !db.categories.contains(id) => Some("Categoria não existe".to_string()),
        Some(_) => None,
    }
}

/// All problems with a category, in field order.
pub fn validate_category(category: &Category) -> Vec<String> {
    validate_string_length(
        &category.name,
        "Nome",
        MIN_NAME_LENGTH,
        MAX_CATEGORY_NAME_LENGTH,
    )
    .into_iter()
    .collect()
}

/// All problems with an entry, in field order.
pub fn validate_entry(db: &InMemoryDb, entry: &Entry) -> Vec<String> {
    [
        validate_string_length(&entry.name, "Nome", MIN_NAME_LENGTH, MAX_ENTRY_NAME_LENGTH),
        validate_amount(&entry.amount),
        validate_date(&entry.date),
        validate_category_exists(db, entry.category_id),
    ]
    .into_iter()
    .flatten()
    .collect()
}
