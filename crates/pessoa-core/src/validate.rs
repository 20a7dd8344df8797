//! Field-level validators for the person form.
//!
//! All of these take raw user-entered strings and return `bool`. They never
//! panic and never allocate errors; the form layer decides what message to
//! attach to a failing field.

use chrono::{Local, NaiveDate};

/// The earliest accepted birth date.
const MIN_BIRTH_DATE: NaiveDate = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();

/// Minimal `local@domain.tld` shape: exactly one `@`, no whitespace, and a
/// dot somewhere in the domain part.
pub fn validate_email(email: &str) -> bool {
  let mut parts = email.split('@');
  let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
    return false;
  };
  if local.is_empty() || domain.is_empty() {
    return false;
  }
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  // The dot must separate non-empty labels (reject `user@domain.`).
  domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

/// ISO calendar date within `[1900-01-01, today]`.
pub fn validate_birth_date(date: &str) -> bool {
  let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
    return false;
  };
  let today = Local::now().date_naive();
  parsed >= MIN_BIRTH_DATE && parsed <= today
}

/// Letter accepted by [`validate_name`]: ASCII letters plus the Latin-1
/// accented range (À..ÿ), mirroring the backend's own rule.
fn is_name_char(c: char) -> bool {
  c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{00FF}').contains(&c)
}

/// Trimmed length >= 2, letters and whitespace only.
pub fn validate_name(name: &str) -> bool {
  let trimmed = name.trim();
  trimmed.chars().count() >= 2 && trimmed.chars().all(|c| is_name_char(c) || c.is_whitespace())
}

/// Optional free-text field: empty is valid, otherwise the trimmed length
/// must fall within `[min, max]`.
pub fn validate_text(text: &str, min: usize, max: usize) -> bool {
  if text.is_empty() {
    return true;
  }
  let len = text.trim().chars().count();
  (min..=max).contains(&len)
}

/// Optional address field, 5..=255 characters when present.
pub fn validate_address(address: &str) -> bool {
  validate_text(address, 5, 255)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn email_basic_shapes() {
    assert!(validate_email("user@example.com"));
    assert!(validate_email("a.b@sub.example.org"));
    assert!(!validate_email("user"));
    assert!(!validate_email("user@"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("user@example"));
    assert!(!validate_email("user@example."));
    assert!(!validate_email("us er@example.com"));
    assert!(!validate_email("a@b@example.com"));
  }

  #[test]
  fn birth_date_boundaries() {
    assert!(!validate_birth_date("1899-12-31"));
    assert!(validate_birth_date("1900-01-01"));
    assert!(validate_birth_date("1990-06-15"));
    let future = Local::now().date_naive() + chrono::Days::new(1);
    assert!(!validate_birth_date(&future.format("%Y-%m-%d").to_string()));
  }

  #[test]
  fn birth_date_today_is_inclusive() {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(validate_birth_date(&today));
  }

  #[test]
  fn birth_date_garbage_rejected() {
    assert!(!validate_birth_date(""));
    assert!(!validate_birth_date("not-a-date"));
    assert!(!validate_birth_date("1990-13-01"));
  }

  #[test]
  fn name_accepts_accented_letters() {
    assert!(validate_name("João"));
    assert!(validate_name("Maria da Conceição"));
    assert!(validate_name("  Ana  "));
    // Any whitespace separates words, not just plain spaces.
    assert!(validate_name("Ana\tMaria"));
  }

  #[test]
  fn name_rejects_short_and_non_letters() {
    assert!(!validate_name("J"));
    assert!(!validate_name(""));
    assert!(!validate_name("John123"));
    assert!(!validate_name("Ann-Marie"));
  }

  #[test]
  fn text_empty_is_valid() {
    assert!(validate_text("", 2, 50));
    assert!(validate_address(""));
  }

  #[test]
  fn text_length_bounds() {
    assert!(validate_text("ab", 2, 50));
    assert!(!validate_text("a", 2, 50));
    assert!(!validate_text(&"x".repeat(51), 2, 50));
    assert!(validate_text("  ab  ", 2, 50));
  }

  #[test]
  fn address_bounds() {
    assert!(validate_address("Rua A, 1"));
    assert!(!validate_address("Rua"));
    assert!(!validate_address(&"x".repeat(256)));
  }
}
