//! Core domain types and validators for the pessoa registry client.
//!
//! This crate is deliberately free of HTTP and terminal dependencies.
//! All other crates depend on it; every function here is pure.

pub mod cpf;
pub mod form;
pub mod person;
pub mod validate;

pub use form::{Field, FormErrors};
pub use person::{Person, PersonForm, PersonPatch, Sexo};
