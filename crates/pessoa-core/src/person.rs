//! Person — the canonical client-side record shape.
//!
//! Field names follow the backend's current naming convention when
//! serialised (`dataNascimento`, `dataCadastro`, ...). The API layer owns
//! the tolerant mapping from the backend's two naming conventions into this
//! shape; once a [`Person`] exists, there is exactly one name per field.

use serde::{Deserialize, Serialize};

// ─── Sexo ─────────────────────────────────────────────────────────────────────

/// The `sexo` enumeration. The backend stores the lowercase Portuguese word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sexo {
  Masculino,
  Feminino,
  Outro,
}

impl Sexo {
  /// Parse the wire form. Unknown values coerce to `None` rather than
  /// erroring; the backend is not trusted to stay within the enumeration.
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "masculino" => Some(Self::Masculino),
      "feminino" => Some(Self::Feminino),
      "outro" => Some(Self::Outro),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Masculino => "masculino",
      Self::Feminino => "feminino",
      Self::Outro => "outro",
    }
  }
}

impl std::fmt::Display for Sexo {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Person ───────────────────────────────────────────────────────────────────

/// A person record as held by the client.
///
/// `id`, `data_cadastro` and `data_atualizacao` are assigned by the backend
/// and read-only from the client's perspective. `cpf` is always held in the
/// formatted `XXX.XXX.XXX-XX` form; validation runs on the digit-only form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:               String,
  pub nome:             String,
  pub sexo:             Option<Sexo>,
  pub email:            Option<String>,
  /// ISO calendar date, e.g. `1990-01-31`.
  pub data_nascimento:  String,
  pub naturalidade:     Option<String>,
  pub nacionalidade:    Option<String>,
  pub cpf:              String,
  pub endereco:         Option<String>,
  pub data_cadastro:    String,
  pub data_atualizacao: String,
}

// ─── Form shapes ──────────────────────────────────────────────────────────────

/// The client-editable fields of a person, as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForm {
  pub nome:            String,
  pub sexo:            Option<Sexo>,
  pub email:           Option<String>,
  pub data_nascimento: String,
  pub naturalidade:    Option<String>,
  pub nacionalidade:   Option<String>,
  pub cpf:             String,
  pub endereco:        Option<String>,
}

impl PersonForm {
  /// Pre-fill a form from an existing record, for editing.
  pub fn from_person(p: &Person) -> Self {
    Self {
      nome:            p.nome.clone(),
      sexo:            p.sexo,
      email:           p.email.clone(),
      data_nascimento: p.data_nascimento.clone(),
      naturalidade:    p.naturalidade.clone(),
      nacionalidade:   p.nacionalidade.clone(),
      cpf:             p.cpf.clone(),
      endereco:        p.endereco.clone(),
    }
  }
}

/// Partial-update input for `PATCH /pessoas/{id}`.
///
/// `None` means "leave unchanged": the field is omitted from the request
/// body entirely, never sent as null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPatch {
  pub nome:            Option<String>,
  pub sexo:            Option<Sexo>,
  pub email:           Option<String>,
  pub data_nascimento: Option<String>,
  pub naturalidade:    Option<String>,
  pub nacionalidade:   Option<String>,
  pub cpf:             Option<String>,
  pub endereco:        Option<String>,
}

impl PersonPatch {
  /// A patch carrying every field of `form` — what the edit form submits.
  pub fn from_form(form: &PersonForm) -> Self {
    Self {
      nome:            Some(form.nome.clone()),
      sexo:            form.sexo,
      email:           form.email.clone(),
      data_nascimento: Some(form.data_nascimento.clone()),
      naturalidade:    form.naturalidade.clone(),
      nacionalidade:   form.nacionalidade.clone(),
      cpf:             Some(form.cpf.clone()),
      endereco:        form.endereco.clone(),
    }
  }
}
