//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate category name
pub fn validate_category_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Category name is required".to_string());
    }

    if name.len() > 50 {
        return Err("Category name must be at most 50 characters long".to_string());
    }

    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err("Category name must contain at least one letter or number".to_string());
    }

    Ok(())
}

/// Validate category description
pub fn validate_category_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Category description is required".to_string());
    }

    if description.len() > 500 {
        return Err("Category description must be at most 500 characters long".to_string());
    }

    Ok(())
}

/// Validate product name
pub fn validate_product_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name is required".to_string());
    }

    if name.len() > 100 {
        return Err("Product name must be at most 100 characters long".to_string());
    }

    Ok(())
}

/// Validate product price in cents
pub fn validate_product_price(price_cents: i64) -> Result<(), String> {
    if price_cents < 0 {
        return Err("Price must not be negative".to_string());
    }

    Ok(())
}

/// Validate reviewer name
pub fn validate_reviewer_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Reviewer name is required".to_string());
    }

    if name.len() > 100 {
        return Err("Reviewer name must be at most 100 characters long".to_string());
    }

    Ok(())
}

/// Validate review rating
pub fn validate_rating(rating: i32) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5".to_string());
    }

    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }

    if username.len() < 3 {
        return Err("Username must be at least 3 characters long".to_string());
    }

    if username.len() > 32 {
        return Err("Username must be at most 32 characters long".to_string());
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+$").expect("Failed to compile username regex")
    });

    if !regex.is_match(username) {
        return Err(
            "Username can only contain letters, numbers, dots, underscores, and hyphens"
                .to_string(),
        );
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate full name
pub fn validate_full_name(full_name: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Full name is required".to_string());
    }

    if full_name.len() > 100 {
        return Err("Full name must be at most 100 characters long".to_string());
    }

    Ok(())
}

/// Validate avatar URL
pub fn validate_avatar_url(url: &str) -> Result<(), String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("Avatar URL must start with http:// or https://".to_string());
    }

    Ok(())
}

/// Validate identity provider subject identifier
pub fn validate_external_id(external_id: &str) -> Result<(), String> {
    if external_id.is_empty() {
        return Err("External id is required".to_string());
    }

    if external_id.len() > 255 {
        return Err("External id must be at most 255 characters long".to_string());
    }

    Ok(())
}

/// Derive a URL-safe slug from a display name
///
/// Lowercases ASCII letters and digits and collapses every other run of
/// characters into a single hyphen, with no leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
