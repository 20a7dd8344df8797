//! CPF checksum validation and display formatting.
//!
//! A CPF is an 11-digit identifier whose last two digits are check digits,
//! each a weighted sum modulo 11 over the preceding digits. Validation
//! always runs on the digit-only form; display always uses
//! `XXX.XXX.XXX-XX`.

/// Strip every non-ASCII-digit character.
pub fn strip_digits(input: &str) -> String {
  input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
  let sum: u32 = digits
    .iter()
    .enumerate()
    .map(|(i, d)| d * (first_weight - i as u32))
    .sum();
  let remainder = sum % 11;
  if remainder < 2 { 0 } else { 11 - remainder }
}

/// Validate a CPF. Accepts raw digits or any punctuated form; everything
/// that is not a digit is ignored. Never panics.
pub fn validate_cpf(input: &str) -> bool {
  let clean = strip_digits(input);
  if clean.len() != 11 {
    return false;
  }

  // All-identical sequences (e.g. 00000000000) pass the checksums but are
  // not valid CPFs.
  let first = clean.as_bytes()[0];
  if clean.bytes().all(|b| b == first) {
    return false;
  }

  let digits: Vec<u32> = clean.chars().filter_map(|c| c.to_digit(10)).collect();

  if check_digit(&digits[..9], 10) != digits[9] {
    return false;
  }
  check_digit(&digits[..10], 11) == digits[10]
}

/// Format a CPF for display as `DDD.DDD.DDD-DD`.
///
/// Fewer than 11 digits are returned unpunctuated, so the function can run
/// on every keystroke while the user is still typing. With 11 or more
/// digits, the first 11 are formatted and the rest dropped. Idempotent on
/// its own output.
pub fn format_cpf(input: &str) -> String {
  let clean = strip_digits(input);
  if clean.len() < 11 {
    return clean;
  }
  format!(
    "{}.{}.{}-{}",
    &clean[0..3],
    &clean[3..6],
    &clean[6..9],
    &clean[9..11]
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  // 52998224725 is the canonical checksum-valid example CPF.

  #[test]
  fn valid_cpf_accepted() {
    assert!(validate_cpf("52998224725"));
    assert!(validate_cpf("529.982.247-25"));
  }

  #[test]
  fn corrupted_check_digit_rejected() {
    assert!(!validate_cpf("52998224724"));
    assert!(!validate_cpf("52998224735"));
  }

  #[test]
  fn repeated_digit_sequences_rejected() {
    for d in 0u8..=9 {
      let cpf: String = std::iter::repeat_n(char::from(b'0' + d), 11).collect();
      assert!(!validate_cpf(&cpf), "{cpf} should be invalid");
    }
  }

  #[test]
  fn wrong_length_rejected() {
    assert!(!validate_cpf(""));
    assert!(!validate_cpf("5299822472"));
    assert!(!validate_cpf("529982247255"));
    assert!(!validate_cpf("abc"));
  }

  #[test]
  fn format_punctuates_eleven_digits() {
    assert_eq!(format_cpf("52998224725"), "529.982.247-25");
  }

  #[test]
  fn format_is_idempotent() {
    let once = format_cpf("52998224725");
    assert_eq!(format_cpf(&once), once);
  }

  #[test]
  fn format_passes_partial_input_through() {
    assert_eq!(format_cpf("529"), "529");
    assert_eq!(format_cpf("529.982"), "529982");
    assert_eq!(format_cpf(""), "");
  }

  #[test]
  fn format_drops_excess_digits() {
    assert_eq!(format_cpf("529982247259"), "529.982.247-25");
  }
}
