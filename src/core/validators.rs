//! 聯絡表單欄位驗證。每個函式回傳錯誤訊息，空字串代表有效。

use crate::domain::model::FieldName;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const MESSAGE_REQUIRED: &str = "Message cannot be empty";
pub const MESSAGE_TOO_SHORT: &str = "Message should be at least 20 characters";

const NAME_MIN_CHARS: usize = 2;
const PHONE_MIN_CHARS: usize = 10;
const MESSAGE_MIN_CHARS: usize = 20;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").unwrap()
});

/// 長度以 UTF-16 code unit 計算，與瀏覽器端的 `String.length` 一致
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// 去除前後空白，包含 BOM (U+FEFF)
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn validate_name(value: &str) -> String {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return NAME_REQUIRED.to_string();
    }
    if utf16_len(trimmed) < NAME_MIN_CHARS {
        return NAME_TOO_SHORT.to_string();
    }
    String::new()
}

pub fn validate_email(value: &str) -> String {
    if trim_input(value).is_empty() {
        return EMAIL_REQUIRED.to_string();
    }
    // 格式比對用原始值，前後空白會讓它失敗
    if !EMAIL_PATTERN.is_match(value) {
        return EMAIL_INVALID.to_string();
    }
    String::new()
}

pub fn validate_phone(value: &str) -> String {
    let trimmed = trim_input(value);
    if !trimmed.is_empty() && utf16_len(trimmed) < PHONE_MIN_CHARS {
        return PHONE_INVALID.to_string();
    }
    String::new()
}

pub fn validate_message(value: &str) -> String {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return MESSAGE_REQUIRED.to_string();
    }
    if utf16_len(trimmed) < MESSAGE_MIN_CHARS {
        return MESSAGE_TOO_SHORT.to_string();
    }
    String::new()
}

pub fn validate(field: FieldName, value: &str) -> String {
    match field {
        FieldName::Name => validate_name(value),
        FieldName::Email => validate_email(value),
        FieldName::Phone => validate_phone(value),
        FieldName::Message => validate_message(value),
    }
}
