//! Error types for `pessoa-api`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("falha de rede: {0}")]
  Transport(#[from] reqwest::Error),

  /// Non-2xx response. `message` is the backend's `message` field when the
  /// body carried one, otherwise the raw body or the status line.
  #[error("erro {status}: {message}")]
  Api { status: u16, message: String },

  /// 401 — the session token is missing, expired or revoked. The caller is
  /// expected to drop the stored token and re-authenticate.
  #[error("não autorizado: {0}")]
  Unauthorized(String),

  #[error("resposta inválida do servidor")]
  InvalidResponse,

  #[error("token não retornado pelo servidor")]
  MissingToken,

  #[error("falha ao acessar arquivo de token: {0}")]
  TokenFile(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
