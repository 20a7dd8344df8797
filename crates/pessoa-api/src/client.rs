//! Async HTTP client for the pessoa registry JSON API.

use std::{sync::RwLock, time::Duration};

use pessoa_core::{Person, PersonForm, PersonPatch, cpf::format_cpf};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
  error::{Error, Result},
  normalize::{PersonPage, api_body_from_form, api_body_from_patch, page_from_api, person_from_api},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// ─── Query types ──────────────────────────────────────────────────────────────

/// Parameters for `GET /pessoas`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
  pub search: Option<String>,
  pub page:   Option<usize>,
  pub limit:  Option<usize>,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async HTTP client for the pessoa REST API.
///
/// Holds the session bearer token; callers persist it separately (see
/// [`crate::token::TokenStore`]). Designed to live behind an `Arc`.
pub struct ApiClient {
  client:   Client,
  base_url: String,
  token:    RwLock<Option<String>>,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
      token: RwLock::new(token),
    })
  }

  /// Whether a session token is currently held.
  pub fn has_token(&self) -> bool {
    self.token.read().is_ok_and(|t| t.is_some())
  }

  /// Replace (or clear) the session token.
  pub fn set_token(&self, token: Option<String>) {
    if let Ok(mut slot) = self.token.write() {
      *slot = token;
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api/v1{path}", self.base_url)
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match self.token.read().ok().and_then(|t| (*t).clone()) {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  // ── Auth ──────────────────────────────────────────────────────────────────

  /// `POST /auth/login` — exchanges credentials for a bearer token.
  ///
  /// The token is retained by the client and also returned so the caller
  /// can persist it.
  pub async fn login(&self, username: &str, password: &str) -> Result<String> {
    let resp = self
      .client
      .post(format!("{}/auth/login", self.base_url))
      .json(&serde_json::json!({ "username": username, "password": password }))
      .send()
      .await?;
    let body = json_body(check(resp).await?).await?;

    let token = body
      .get("access_token")
      .and_then(Value::as_str)
      .filter(|t| !t.is_empty())
      .ok_or(Error::MissingToken)?
      .to_string();

    tracing::debug!("sessão autenticada para {username}");
    self.set_token(Some(token.clone()));
    Ok(token)
  }

  // ── People ────────────────────────────────────────────────────────────────

  /// `GET /api/v1/pessoas?search=&page=&limit=`
  pub async fn list_people(&self, query: &ListQuery) -> Result<PersonPage> {
    let mut req = self.auth(self.client.get(self.url("/pessoas")));
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
      req = req.query(&[("search", search)]);
    }
    if let Some(page) = query.page {
      req = req.query(&[("page", page)]);
    }
    if let Some(limit) = query.limit {
      req = req.query(&[("limit", limit)]);
    }

    let body = json_body(check(req.send().await?).await?).await?;
    Ok(page_from_api(&body))
  }

  /// `GET /api/v1/pessoas/{id}`
  pub async fn get_person(&self, id: &str) -> Result<Person> {
    let resp = self
      .auth(self.client.get(self.url(&format!("/pessoas/{id}"))))
      .send()
      .await?;
    let body = json_body(check(resp).await?).await?;
    Ok(person_from_api(&body))
  }

  /// `GET /api/v1/pessoas/cpf/{cpf}`
  ///
  /// The CPF is canonicalised to its `DDD.DDD.DDD-DD` form first, which is
  /// also what keeps the path segment URL-safe.
  pub async fn get_person_by_cpf(&self, cpf: &str) -> Result<Person> {
    let cpf = format_cpf(cpf);
    let resp = self
      .auth(self.client.get(self.url(&format!("/pessoas/cpf/{cpf}"))))
      .send()
      .await?;
    let body = json_body(check(resp).await?).await?;
    Ok(person_from_api(&body))
  }

  /// `POST /api/v1/pessoas`
  pub async fn create_person(&self, form: &PersonForm) -> Result<Person> {
    let resp = self
      .auth(self.client.post(self.url("/pessoas")))
      .json(&api_body_from_form(form))
      .send()
      .await?;
    let body = json_body(check(resp).await?).await?;
    Ok(person_from_api(&body))
  }

  /// `PATCH /api/v1/pessoas/{id}` — partial update, absent fields untouched.
  pub async fn update_person(&self, id: &str, patch: &PersonPatch) -> Result<Person> {
    let resp = self
      .auth(self.client.patch(self.url(&format!("/pessoas/{id}"))))
      .json(&api_body_from_patch(patch))
      .send()
      .await?;
    let body = json_body(check(resp).await?).await?;
    Ok(person_from_api(&body))
  }

  /// `DELETE /api/v1/pessoas/{id}` — 200 and 204 both count as success; any
  /// body is ignored.
  pub async fn delete_person(&self, id: &str) -> Result<()> {
    let resp = self
      .auth(self.client.delete(self.url(&format!("/pessoas/{id}"))))
      .send()
      .await?;
    check(resp).await?;
    Ok(())
  }
}

// ─── Response handling ────────────────────────────────────────────────────────

/// Pass 2xx responses through; turn anything else into a typed error with
/// the most human message available: the backend's JSON `message` field,
/// else the raw body, else the status line.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }

  let body = resp.text().await.unwrap_or_default();
  let message = serde_json::from_str::<Value>(&body)
    .ok()
    .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
    .or_else(|| (!body.is_empty()).then(|| body.clone()))
    .unwrap_or_else(|| format!("Erro {status}"));

  tracing::warn!(%status, "requisição rejeitada: {message}");
  if status == StatusCode::UNAUTHORIZED {
    Err(Error::Unauthorized(message))
  } else {
    Err(Error::Api {
      status: status.as_u16(),
      message,
    })
  }
}

/// Parse a response body as JSON; an unparseable body on a 2xx response is
/// an [`Error::InvalidResponse`], not a transport error.
async fn json_body(resp: reqwest::Response) -> Result<Value> {
  resp.json().await.map_err(|_| Error::InvalidResponse)
}
