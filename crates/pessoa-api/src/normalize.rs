//! Wire-shape normalization between the API's records and [`Person`].
//!
//! The backend has lived through a field-renaming migration, so reads must
//! tolerate both the legacy and the current name for the affected fields.
//! Each such field carries an explicit ordered candidate list, scanned
//! first-match-wins; the legacy name comes first. Writes always use the
//! current convention only.

use pessoa_core::{Person, PersonForm, PersonPatch, Sexo, cpf::format_cpf};
use serde_json::{Map, Value, json};

// ─── Candidate field names (legacy first) ─────────────────────────────────────

const BIRTH_DATE_FIELDS: &[&str] = &["dataDeNascimento", "dataNascimento"];
const CREATED_AT_FIELDS: &[&str] = &["dataCriacao", "dataCadastro"];
const ITEMS_FIELDS: &[&str] = &["items", "data"];
const LIMIT_FIELDS: &[&str] = &["limit", "size"];
const TOTAL_FIELDS: &[&str] = &["totalItems", "total"];

// ─── Value coercion helpers ───────────────────────────────────────────────────

/// First present, non-null value among `names`, in order.
fn coalesce<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
  names
    .iter()
    .filter_map(|name| obj.get(*name))
    .find(|v| !v.is_null())
}

/// Coerce a JSON scalar to its display string. Objects and arrays have no
/// meaningful string form here and coerce to empty.
fn display_string(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    Value::Number(n) => n.to_string(),
    Value::Bool(b) => b.to_string(),
    _ => String::new(),
  }
}

/// Required string field: missing or null becomes `""`, never `None`.
fn required_string(obj: &Map<String, Value>, names: &[&str]) -> String {
  coalesce(obj, names).map(display_string).unwrap_or_default()
}

/// Optional string field: missing, null or empty becomes `None`.
fn optional_string(obj: &Map<String, Value>, name: &str) -> Option<String> {
  coalesce(obj, &[name])
    .map(display_string)
    .filter(|s| !s.is_empty())
}

/// Numeric field tolerant of the backend sending numbers as strings.
/// Zero counts as absent, matching the fallback chain semantics.
fn positive_number(obj: &Map<String, Value>, names: &[&str]) -> Option<usize> {
  let value = coalesce(obj, names)?;
  let n = match value {
    Value::Number(n) => n.as_u64(),
    Value::String(s) => s.parse::<u64>().ok(),
    _ => None,
  }?;
  (n > 0).then_some(n as usize)
}

// ─── Inbound: API record → Person ─────────────────────────────────────────────

/// Map one API record into the canonical [`Person`] shape.
///
/// Tolerates both naming conventions on read (legacy wins when both are
/// present) and coerces missing fields to safe defaults: empty string for
/// required fields, `None` for optional ones.
pub fn person_from_api(api: &Value) -> Person {
  let empty = Map::new();
  let obj = api.as_object().unwrap_or(&empty);

  Person {
    id:               required_string(obj, &["id"]),
    nome:             required_string(obj, &["nome"]),
    sexo:             optional_string(obj, "sexo").and_then(|s| Sexo::parse(&s)),
    email:            optional_string(obj, "email"),
    data_nascimento:  required_string(obj, BIRTH_DATE_FIELDS),
    naturalidade:     optional_string(obj, "naturalidade"),
    nacionalidade:    optional_string(obj, "nacionalidade"),
    // Records always hold the formatted form, whatever the backend sent.
    cpf:              format_cpf(&required_string(obj, &["cpf"])),
    endereco:         optional_string(obj, "endereco"),
    data_cadastro:    required_string(obj, CREATED_AT_FIELDS),
    data_atualizacao: required_string(obj, &["dataAtualizacao"]),
  }
}

// ─── Outbound: form → API body ────────────────────────────────────────────────

/// Build the create/update body from a full form. Current-convention names
/// only; optional fields the user left empty are omitted, not nulled.
pub fn api_body_from_form(form: &PersonForm) -> Value {
  let mut body = Map::new();
  body.insert("nome".into(), json!(form.nome));
  if let Some(sexo) = form.sexo {
    body.insert("sexo".into(), json!(sexo));
  }
  if let Some(email) = form.email.as_deref().filter(|s| !s.is_empty()) {
    body.insert("email".into(), json!(email));
  }
  body.insert("dataDeNascimento".into(), json!(form.data_nascimento));
  if let Some(naturalidade) = form.naturalidade.as_deref().filter(|s| !s.is_empty()) {
    body.insert("naturalidade".into(), json!(naturalidade));
  }
  if let Some(nacionalidade) = form.nacionalidade.as_deref().filter(|s| !s.is_empty()) {
    body.insert("nacionalidade".into(), json!(nacionalidade));
  }
  body.insert("cpf".into(), json!(form.cpf));
  if let Some(endereco) = form.endereco.as_deref().filter(|s| !s.is_empty()) {
    body.insert("endereco".into(), json!(endereco));
  }
  Value::Object(body)
}

/// Build a partial-update body. Fields left at `None` are omitted entirely.
pub fn api_body_from_patch(patch: &PersonPatch) -> Value {
  let mut body = Map::new();
  if let Some(nome) = &patch.nome {
    body.insert("nome".into(), json!(nome));
  }
  if let Some(sexo) = patch.sexo {
    body.insert("sexo".into(), json!(sexo));
  }
  if let Some(email) = &patch.email {
    body.insert("email".into(), json!(email));
  }
  if let Some(data) = &patch.data_nascimento {
    body.insert("dataDeNascimento".into(), json!(data));
  }
  if let Some(naturalidade) = &patch.naturalidade {
    body.insert("naturalidade".into(), json!(naturalidade));
  }
  if let Some(nacionalidade) = &patch.nacionalidade {
    body.insert("nacionalidade".into(), json!(nacionalidade));
  }
  if let Some(cpf) = &patch.cpf {
    body.insert("cpf".into(), json!(cpf));
  }
  if let Some(endereco) = &patch.endereco {
    body.insert("endereco".into(), json!(endereco));
  }
  Value::Object(body)
}

// ─── List responses ───────────────────────────────────────────────────────────

/// A page of person records with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPage {
  pub items:       Vec<Person>,
  pub page:        usize,
  pub limit:       usize,
  pub total_items: usize,
  pub total_pages: usize,
}

/// Unwrap a list response in either of the backend's two shapes.
///
/// A bare array is the full item list (page 1, limit = count). An object
/// carries items under `items` (legacy) or `data`, with pagination metadata
/// under similarly forked names; `totalPages` is computed from the total and
/// the limit when not supplied.
pub fn page_from_api(res: &Value) -> PersonPage {
  if let Value::Array(items) = res {
    let items: Vec<Person> = items.iter().map(person_from_api).collect();
    let count = items.len();
    return PersonPage {
      page: 1,
      limit: count,
      total_items: count,
      total_pages: 1,
      items,
    };
  }

  let empty = Map::new();
  let obj = res.as_object().unwrap_or(&empty);

  let items: Vec<Person> = coalesce(obj, ITEMS_FIELDS)
    .and_then(Value::as_array)
    .map(|arr| arr.iter().map(person_from_api).collect())
    .unwrap_or_default();

  let page = positive_number(obj, &["page"]).unwrap_or(1);
  let limit = positive_number(obj, LIMIT_FIELDS)
    .or_else(|| (!items.is_empty()).then_some(items.len()))
    .unwrap_or(10);
  let total_items = positive_number(obj, TOTAL_FIELDS).unwrap_or(items.len());
  let total_pages =
    positive_number(obj, &["totalPages"]).unwrap_or_else(|| total_items.div_ceil(limit));

  PersonPage {
    items,
    page,
    limit,
    total_items,
    total_pages,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn legacy_birth_date_name_wins() {
    let p = person_from_api(&json!({
      "dataDeNascimento": "1990-01-01",
      "dataNascimento": "2000-12-31",
    }));
    assert_eq!(p.data_nascimento, "1990-01-01");
  }

  #[test]
  fn current_birth_date_name_is_fallback() {
    let p = person_from_api(&json!({ "dataNascimento": "1990-01-01" }));
    assert_eq!(p.data_nascimento, "1990-01-01");
    let p = person_from_api(&json!({ "dataDeNascimento": "1990-01-01" }));
    assert_eq!(p.data_nascimento, "1990-01-01");
  }

  #[test]
  fn creation_timestamp_coalesces() {
    let p = person_from_api(&json!({
      "dataCriacao": "2024-01-01T00:00:00Z",
      "dataCadastro": "2023-01-01T00:00:00Z",
    }));
    assert_eq!(p.data_cadastro, "2024-01-01T00:00:00Z");
    let p = person_from_api(&json!({ "dataCadastro": "2023-01-01T00:00:00Z" }));
    assert_eq!(p.data_cadastro, "2023-01-01T00:00:00Z");
  }

  #[test]
  fn null_counts_as_absent() {
    let p = person_from_api(&json!({
      "dataDeNascimento": null,
      "dataNascimento": "1990-01-01",
    }));
    assert_eq!(p.data_nascimento, "1990-01-01");
  }

  #[test]
  fn cpf_is_canonicalised_on_read() {
    let p = person_from_api(&json!({ "cpf": "52998224725" }));
    assert_eq!(p.cpf, "529.982.247-25");
    // Already-formatted input stays put.
    let p = person_from_api(&json!({ "cpf": "529.982.247-25" }));
    assert_eq!(p.cpf, "529.982.247-25");
  }

  #[test]
  fn identical_records_compare_equal() {
    let raw = json!({ "id": 1, "nome": "Ana Souza", "cpf": "52998224725" });
    assert_eq!(person_from_api(&raw), person_from_api(&raw));
    assert_eq!(
      page_from_api(&json!([raw.clone()])),
      page_from_api(&json!([raw.clone()]))
    );
  }

  #[test]
  fn numeric_id_coerces_to_string() {
    let p = person_from_api(&json!({ "id": 42, "nome": "Ana Souza" }));
    assert_eq!(p.id, "42");
  }

  #[test]
  fn missing_fields_become_safe_defaults() {
    let p = person_from_api(&json!({}));
    assert_eq!(p.id, "");
    assert_eq!(p.nome, "");
    assert_eq!(p.email, None);
    assert_eq!(p.sexo, None);
    assert_eq!(p.endereco, None);
  }

  #[test]
  fn unknown_sexo_coerces_to_none() {
    let p = person_from_api(&json!({ "sexo": "x" }));
    assert_eq!(p.sexo, None);
    let p = person_from_api(&json!({ "sexo": "feminino" }));
    assert_eq!(p.sexo, Some(Sexo::Feminino));
  }

  #[test]
  fn outbound_uses_current_convention_only() {
    let form = PersonForm {
      nome: "Ana Souza".into(),
      data_nascimento: "1990-01-01".into(),
      cpf: "529.982.247-25".into(),
      ..PersonForm::default()
    };
    let body = api_body_from_form(&form);
    assert_eq!(body["dataDeNascimento"], "1990-01-01");
    assert!(body.get("dataNascimento").is_none());
    // Empty optionals are omitted, not nulled.
    assert!(body.get("email").is_none());
    assert!(body.get("sexo").is_none());
  }

  #[test]
  fn patch_omits_absent_fields() {
    let patch = PersonPatch {
      endereco: Some("Rua das Flores, 100".into()),
      ..PersonPatch::default()
    };
    let body = api_body_from_patch(&patch);
    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(body["endereco"], "Rua das Flores, 100");
  }

  #[test]
  fn bare_array_is_a_single_full_page() {
    let page = page_from_api(&json!([
      { "id": 1, "nome": "Ana Souza" },
      { "id": 2, "nome": "Bruno Lima" },
    ]));
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 2);
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items[0].id, "1");
  }

  #[test]
  fn object_page_with_items_field() {
    let page = page_from_api(&json!({
      "items": [{ "id": 1, "nome": "Ana Souza" }],
      "page": 2,
      "limit": 10,
      "totalItems": 35,
    }));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total_items, 35);
    // ceil(35 / 10)
    assert_eq!(page.total_pages, 4);
  }

  #[test]
  fn object_page_with_data_and_forked_metadata_names() {
    let page = page_from_api(&json!({
      "data": [{ "id": 1, "nome": "Ana Souza" }],
      "size": 25,
      "total": 100,
    }));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.limit, 25);
    assert_eq!(page.total_items, 100);
    assert_eq!(page.total_pages, 4);
  }

  #[test]
  fn explicit_total_pages_wins() {
    let page = page_from_api(&json!({
      "items": [],
      "totalItems": 100,
      "limit": 10,
      "totalPages": 7,
    }));
    assert_eq!(page.total_pages, 7);
  }

  #[test]
  fn empty_object_degrades_to_empty_page() {
    let page = page_from_api(&json!({}));
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 0);
  }
}
