//! Session token persistence.
//!
//! The bearer token survives restarts in a plain file under the user's
//! config directory, so a fresh launch goes straight to the person list
//! instead of the login screen. Logout (or a 401) deletes the file.

use std::{
  fs,
  path::{Path, PathBuf},
};

use crate::error::Result;

/// File-backed store for the session bearer token.
#[derive(Debug, Clone)]
pub struct TokenStore {
  path: PathBuf,
}

impl TokenStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: expand_tilde(&path.into()),
    }
  }

  /// Default location: `$XDG_CONFIG_HOME/pessoa/token`, falling back to
  /// `~/.config/pessoa/token`.
  pub fn default_path() -> PathBuf {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
      .map(PathBuf::from)
      .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
      .unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("pessoa").join("token")
  }

  /// Read the stored token. A missing or empty file means "logged out".
  pub fn load(&self) -> Option<String> {
    let raw = fs::read_to_string(&self.path).ok()?;
    let token = raw.trim();
    (!token.is_empty()).then(|| token.to_string())
  }

  /// Persist the token, creating parent directories as needed.
  pub fn save(&self, token: &str) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&self.path, token)?;
    Ok(())
  }

  /// Forget the session. Deleting a file that is already gone is fine.
  pub fn clear(&self) -> Result<()> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_store(name: &str) -> TokenStore {
    let dir = std::env::temp_dir().join(format!("pessoa-token-test-{name}-{}", std::process::id()));
    TokenStore::new(dir.join("token"))
  }

  #[test]
  fn save_load_clear_round_trip() {
    let store = temp_store("round-trip");
    assert_eq!(store.load(), None);

    store.save("abc123").unwrap();
    assert_eq!(store.load(), Some("abc123".to_string()));

    store.clear().unwrap();
    assert_eq!(store.load(), None);
  }

  #[test]
  fn clear_is_idempotent() {
    let store = temp_store("clear-twice");
    store.clear().unwrap();
    store.clear().unwrap();
  }

  #[test]
  fn load_trims_whitespace() {
    let store = temp_store("trim");
    store.save("abc123\n").unwrap();
    assert_eq!(store.load(), Some("abc123".to_string()));
    store.clear().unwrap();
  }
}
