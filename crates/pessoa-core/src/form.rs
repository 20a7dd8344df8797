//! Form-level validation — aggregates the field validators into one pass.
//!
//! Mirrors what the submit handler enforces server-side: required fields,
//! length caps, and the CPF checksum. Messages are user-facing and attach
//! to a specific [`Field`] so the UI can render them inline.

use thiserror::Error;

use crate::{
  cpf::validate_cpf,
  person::PersonForm,
  validate::{validate_address, validate_birth_date, validate_email, validate_name, validate_text},
};

// ─── Field ────────────────────────────────────────────────────────────────────

/// A form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
  Nome,
  Cpf,
  DataNascimento,
  Sexo,
  Email,
  Naturalidade,
  Nacionalidade,
  Endereco,
}

impl Field {
  pub fn label(&self) -> &'static str {
    match self {
      Self::Nome => "Nome",
      Self::Cpf => "CPF",
      Self::DataNascimento => "Data de nascimento",
      Self::Sexo => "Sexo",
      Self::Email => "Email",
      Self::Naturalidade => "Naturalidade",
      Self::Nacionalidade => "Nacionalidade",
      Self::Endereco => "Endereço",
    }
  }
}

// ─── FormErrors ───────────────────────────────────────────────────────────────

/// One message per failing field, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("formulário inválido ({} campo(s))", .0.len())]
pub struct FormErrors(pub Vec<(Field, String)>);

impl FormErrors {
  pub fn get(&self, field: Field) -> Option<&str> {
    self
      .0
      .iter()
      .find(|(f, _)| *f == field)
      .map(|(_, m)| m.as_str())
  }
}

// ─── Validation ───────────────────────────────────────────────────────────────

impl PersonForm {
  /// Validate every field. `Ok(())` means the form may be submitted.
  pub fn validate(&self) -> Result<(), FormErrors> {
    let mut errors: Vec<(Field, String)> = Vec::new();
    let mut push = |field: Field, msg: &str| errors.push((field, msg.to_string()));

    if self.nome.trim().is_empty() {
      push(Field::Nome, "Nome é obrigatório");
    } else if !validate_name(&self.nome) {
      push(
        Field::Nome,
        "Nome deve ter pelo menos 2 caracteres e conter apenas letras e espaços",
      );
    } else if self.nome.trim().chars().count() > 100 {
      push(Field::Nome, "Nome não pode ter mais de 100 caracteres");
    }

    if self.cpf.trim().is_empty() {
      push(Field::Cpf, "CPF é obrigatório");
    } else if !validate_cpf(&self.cpf) {
      push(Field::Cpf, "CPF inválido");
    }

    if self.data_nascimento.is_empty() {
      push(Field::DataNascimento, "Data de nascimento é obrigatória");
    } else if !validate_birth_date(&self.data_nascimento) {
      push(
        Field::DataNascimento,
        "Data de nascimento inválida ou no futuro",
      );
    }

    if self.sexo.is_none() {
      push(Field::Sexo, "Sexo é obrigatório");
    }

    if let Some(email) = self.email.as_deref()
      && !email.trim().is_empty()
    {
      if !validate_email(email) {
        push(Field::Email, "Email inválido");
      } else if email.chars().count() > 100 {
        push(Field::Email, "Email não pode ter mais de 100 caracteres");
      }
    }

    if let Some(naturalidade) = self.naturalidade.as_deref()
      && !validate_text(naturalidade, 2, 50)
    {
      push(
        Field::Naturalidade,
        "Naturalidade deve ter entre 2 e 50 caracteres",
      );
    }

    if let Some(nacionalidade) = self.nacionalidade.as_deref()
      && !validate_text(nacionalidade, 2, 50)
    {
      push(
        Field::Nacionalidade,
        "Nacionalidade deve ter entre 2 e 50 caracteres",
      );
    }

    if let Some(endereco) = self.endereco.as_deref()
      && !validate_address(endereco)
    {
      push(Field::Endereco, "Endereço deve ter entre 5 e 255 caracteres");
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(FormErrors(errors))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::person::Sexo;

  fn valid_form() -> PersonForm {
    PersonForm {
      nome:            "João Silva Santos".into(),
      sexo:            Some(Sexo::Masculino),
      email:           Some("joao@example.com".into()),
      data_nascimento: "1990-05-20".into(),
      naturalidade:    Some("Fortaleza".into()),
      nacionalidade:   Some("Brasileira".into()),
      cpf:             "529.982.247-25".into(),
      endereco:        Some("Rua das Flores, 100".into()),
    }
  }

  #[test]
  fn valid_form_passes() {
    assert!(valid_form().validate().is_ok());
  }

  #[test]
  fn optional_fields_may_be_absent() {
    let form = PersonForm {
      email: None,
      naturalidade: None,
      nacionalidade: None,
      endereco: None,
      ..valid_form()
    };
    assert!(form.validate().is_ok());
  }

  #[test]
  fn missing_required_fields_all_reported() {
    let form = PersonForm::default();
    let errors = form.validate().unwrap_err();
    for field in [Field::Nome, Field::Cpf, Field::DataNascimento, Field::Sexo] {
      assert!(errors.get(field).is_some(), "{field:?} should have an error");
    }
  }

  #[test]
  fn bad_cpf_reported_on_cpf_field() {
    let form = PersonForm {
      cpf: "529.982.247-24".into(),
      ..valid_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(Field::Cpf), Some("CPF inválido"));
    assert!(errors.get(Field::Nome).is_none());
  }

  #[test]
  fn present_but_invalid_optional_field_fails() {
    let form = PersonForm {
      email: Some("not-an-email".into()),
      ..valid_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(Field::Email), Some("Email inválido"));
  }

  #[test]
  fn long_name_rejected() {
    let form = PersonForm {
      nome: "a".repeat(101),
      ..valid_form()
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.get(Field::Nome).is_some());
  }
}
