//! Application state machine and event dispatcher.

use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pessoa_api::{ApiClient, Error as ApiError, ListQuery, PersonPage, TokenStore};
use pessoa_core::{
  Field, FormErrors, Person, PersonForm, PersonPatch, Sexo,
  cpf::{format_cpf, validate_cpf},
};

/// How long a pause in typing must last before the search re-queries the
/// backend.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// The page size requested from the backend; paging beyond it is done by
/// narrowing the search instead.
const LIST_LIMIT: usize = 100;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Username/password prompt; entered on startup without a stored token
  /// and whenever the backend answers 401.
  Login,
  /// Focus on the person list; right pane previews the cursor row.
  PersonList,
  /// Focus on the detail pane for the selected person.
  PersonDetail,
  /// Create/edit form, drawn as a modal over the list.
  PersonForm,
  /// Delete confirmation modal.
  ConfirmDelete,
}

// ─── Login state ──────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct LoginState {
  pub username: String,
  pub password: String,
  /// 0 = username, 1 = password.
  pub focus:    usize,
  pub error:    Option<String>,
  pub busy:     bool,
}

// ─── Filters ──────────────────────────────────────────────────────────────────

/// Client-side filters applied over the fetched page, on top of the
/// server-side `search` parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filters {
  pub sexo:          Option<Sexo>,
  pub naturalidade:  String,
  pub nacionalidade: String,
}

impl Filters {
  pub fn is_empty(&self) -> bool {
    self.sexo.is_none() && self.naturalidade.is_empty() && self.nacionalidade.is_empty()
  }

  fn matches(&self, person: &Person) -> bool {
    if let Some(sexo) = self.sexo
      && person.sexo != Some(sexo)
    {
      return false;
    }
    if !self.naturalidade.is_empty()
      && !contains_ci(person.naturalidade.as_deref().unwrap_or(""), &self.naturalidade)
    {
      return false;
    }
    if !self.nacionalidade.is_empty()
      && !contains_ci(person.nacionalidade.as_deref().unwrap_or(""), &self.nacionalidade)
    {
      return false;
    }
    true
  }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ─── Form state ───────────────────────────────────────────────────────────────

/// The create/edit form. Field order matches [`FormState::FIELDS`].
#[derive(Debug, Default)]
pub struct FormState {
  /// `Some(id)` when editing an existing record.
  pub editing_id: Option<String>,
  pub form:       PersonForm,
  pub focus:      usize,
  pub errors:     Option<FormErrors>,
}

impl FormState {
  pub const FIELDS: &[Field] = &[
    Field::Nome,
    Field::Cpf,
    Field::DataNascimento,
    Field::Sexo,
    Field::Email,
    Field::Naturalidade,
    Field::Nacionalidade,
    Field::Endereco,
  ];

  fn new_create() -> Self {
    Self::default()
  }

  fn new_edit(person: &Person) -> Self {
    Self {
      editing_id: Some(person.id.clone()),
      form: PersonForm::from_person(person),
      ..Self::default()
    }
  }

  pub fn focused_field(&self) -> Field {
    Self::FIELDS[self.focus.min(Self::FIELDS.len() - 1)]
  }

  /// The string value of `field` as shown in the input box.
  pub fn value(&self, field: Field) -> String {
    let opt = |o: &Option<String>| o.clone().unwrap_or_default();
    match field {
      Field::Nome => self.form.nome.clone(),
      Field::Cpf => self.form.cpf.clone(),
      Field::DataNascimento => self.form.data_nascimento.clone(),
      Field::Sexo => self
        .form
        .sexo
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".into()),
      Field::Email => opt(&self.form.email),
      Field::Naturalidade => opt(&self.form.naturalidade),
      Field::Nacionalidade => opt(&self.form.nacionalidade),
      Field::Endereco => opt(&self.form.endereco),
    }
  }

  fn push_char(&mut self, c: char) {
    let set_opt = |slot: &mut Option<String>, c: char| {
      slot.get_or_insert_default().push(c);
    };
    match self.focused_field() {
      Field::Nome => self.form.nome.push(c),
      // The CPF input re-formats on every keystroke.
      Field::Cpf => {
        self.form.cpf.push(c);
        self.form.cpf = format_cpf(&self.form.cpf);
      }
      Field::DataNascimento => self.form.data_nascimento.push(c),
      Field::Sexo => {
        // Space cycles the enumeration instead of inserting text.
        if c == ' ' {
          self.cycle_sexo();
        }
      }
      Field::Email => set_opt(&mut self.form.email, c),
      Field::Naturalidade => set_opt(&mut self.form.naturalidade, c),
      Field::Nacionalidade => set_opt(&mut self.form.nacionalidade, c),
      Field::Endereco => set_opt(&mut self.form.endereco, c),
    }
  }

  fn pop_char(&mut self) {
    let pop_opt = |slot: &mut Option<String>| {
      if let Some(s) = slot.as_mut() {
        s.pop();
        if s.is_empty() {
          *slot = None;
        }
      }
    };
    match self.focused_field() {
      Field::Nome => {
        self.form.nome.pop();
      }
      Field::Cpf => {
        // Drop the last digit, not the last punctuation character.
        let mut digits = pessoa_core::cpf::strip_digits(&self.form.cpf);
        digits.pop();
        self.form.cpf = format_cpf(&digits);
      }
      Field::DataNascimento => {
        self.form.data_nascimento.pop();
      }
      Field::Sexo => self.form.sexo = None,
      Field::Email => pop_opt(&mut self.form.email),
      Field::Naturalidade => pop_opt(&mut self.form.naturalidade),
      Field::Nacionalidade => pop_opt(&mut self.form.nacionalidade),
      Field::Endereco => pop_opt(&mut self.form.endereco),
    }
  }

  fn cycle_sexo(&mut self) {
    self.form.sexo = match self.form.sexo {
      None => Some(Sexo::Masculino),
      Some(Sexo::Masculino) => Some(Sexo::Feminino),
      Some(Sexo::Feminino) => Some(Sexo::Outro),
      Some(Sexo::Outro) => None,
    };
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen: Screen,

  pub login: LoginState,

  /// The most recently fetched page.
  pub page: Option<PersonPage>,

  /// Server-side search query (nome, CPF or email).
  pub search:        String,
  pub search_active: bool,
  /// Set on every search keystroke; drives the refetch debounce.
  search_changed_at: Option<Instant>,

  /// Client-side filters and the filter-bar editing state.
  pub filters:       Filters,
  pub filter_active: bool,
  /// 0 = sexo, 1 = naturalidade, 2 = nacionalidade.
  pub filter_focus:  usize,

  /// Cursor position within the *filtered* list.
  pub list_cursor: usize,

  /// The person shown in the detail pane.
  pub detail: Option<Person>,

  pub form: FormState,

  /// Person pending delete confirmation.
  pub deleting: Option<Person>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pub client: Arc<ApiClient>,
  pub tokens: TokenStore,
}

impl App {
  pub fn new(client: Arc<ApiClient>, tokens: TokenStore) -> Self {
    let screen = if client.has_token() {
      Screen::PersonList
    } else {
      Screen::Login
    };
    Self {
      screen,
      login: LoginState::default(),
      page: None,
      search: String::new(),
      search_active: false,
      search_changed_at: None,
      filters: Filters::default(),
      filter_active: false,
      filter_focus: 0,
      list_cursor: 0,
      detail: None,
      form: FormState::default(),
      deleting: None,
      status_msg: String::new(),
      client,
      tokens,
    }
  }

  pub fn authenticated(&self) -> bool {
    self.screen != Screen::Login
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the person list for the current search query.
  ///
  /// A query that is itself a checksum-valid CPF short-circuits to the
  /// by-CPF lookup endpoint; not found degrades to an empty list.
  pub async fn refresh_people(&mut self) {
    self.status_msg = "Carregando…".into();

    let result = if validate_cpf(&self.search) {
      match self.client.get_person_by_cpf(&self.search).await {
        Ok(person) => Ok(single_page(person)),
        Err(ApiError::Api { status: 404, .. }) => Ok(empty_page()),
        Err(e) => Err(e),
      }
    } else {
      let query = ListQuery {
        search: (!self.search.is_empty()).then(|| self.search.clone()),
        page:   Some(1),
        limit:  Some(LIST_LIMIT),
      };
      self.client.list_people(&query).await
    };

    match result {
      Ok(page) => {
        tracing::debug!(items = page.items.len(), "lista atualizada");
        self.page = Some(page);
        self.list_cursor = 0;
        self.status_msg = String::new();
      }
      Err(e) => self.handle_api_error(e),
    }
  }

  /// Drive time-based work: the search debounce. Called from the event loop
  /// on every poll tick.
  pub async fn tick(&mut self) {
    if let Some(changed_at) = self.search_changed_at
      && changed_at.elapsed() >= SEARCH_DEBOUNCE
    {
      self.search_changed_at = None;
      self.refresh_people().await;
    }
  }

  /// Map an API error to a state transition: 401 ends the session, anything
  /// else becomes a status-bar message.
  fn handle_api_error(&mut self, e: ApiError) {
    tracing::warn!("erro de API: {e}");
    if matches!(e, ApiError::Unauthorized(_)) {
      self.logout(Some("Sessão expirada. Entre novamente.".into()));
    } else {
      self.status_msg = format!("Erro: {e}");
    }
  }

  fn logout(&mut self, error: Option<String>) {
    self.tokens.clear().ok();
    self.client.set_token(None);
    self.page = None;
    self.detail = None;
    self.login = LoginState {
      error,
      ..LoginState::default()
    };
    self.screen = Screen::Login;
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// The fetched page narrowed by the local search echo and filters.
  pub fn filtered_people(&self) -> Vec<&Person> {
    let Some(page) = &self.page else {
      return Vec::new();
    };
    page
      .items
      .iter()
      .filter(|p| self.matches_search(p) && self.filters.matches(p))
      .collect()
  }

  fn matches_search(&self, person: &Person) -> bool {
    if self.search.is_empty() {
      return true;
    }
    // CPF matching compares digit-only forms, so a raw-digit query still
    // matches the formatted `XXX.XXX.XXX-XX` the record holds.
    let digits = pessoa_core::cpf::strip_digits(&self.search);
    let cpf_match =
      !digits.is_empty() && pessoa_core::cpf::strip_digits(&person.cpf).contains(&digits);
    contains_ci(&person.nome, &self.search)
      || cpf_match
      || contains_ci(person.email.as_deref().unwrap_or(""), &self.search)
  }

  pub fn cursor_person(&self) -> Option<&Person> {
    let list = self.filtered_people();
    list.get(self.list_cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.screen {
      Screen::Login => self.handle_login_key(key).await,
      Screen::PersonList if self.search_active => self.handle_search_key(key),
      Screen::PersonList if self.filter_active => self.handle_filter_key(key),
      Screen::PersonList => self.handle_list_key(key).await,
      Screen::PersonDetail => self.handle_detail_key(key).await,
      Screen::PersonForm => self.handle_form_key(key).await,
      Screen::ConfirmDelete => self.handle_confirm_key(key).await,
    }
  }

  async fn handle_login_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => return false,
      KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
        self.login.focus = 1 - self.login.focus;
      }
      KeyCode::Backspace => {
        if self.login.focus == 0 {
          self.login.username.pop();
        } else {
          self.login.password.pop();
        }
      }
      KeyCode::Char(c) => {
        if self.login.focus == 0 {
          self.login.username.push(c);
        } else {
          self.login.password.push(c);
        }
      }
      KeyCode::Enter => {
        self.login.error = None;
        self.login.busy = true;
        let result = self
          .client
          .login(&self.login.username, &self.login.password)
          .await;
        self.login.busy = false;
        match result {
          Ok(token) => {
            if let Err(e) = self.tokens.save(&token) {
              tracing::warn!("não foi possível persistir o token: {e}");
            }
            self.login.password.clear();
            self.screen = Screen::PersonList;
            self.refresh_people().await;
          }
          Err(e) => self.login.error = Some(e.to_string()),
        }
      }
      _ => {}
    }
    true
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.search.clear();
        self.list_cursor = 0;
        self.search_changed_at = Some(Instant::now());
      }
      KeyCode::Enter => {
        self.search_active = false;
        self.list_cursor = 0;
      }
      KeyCode::Backspace => {
        self.search.pop();
        self.list_cursor = 0;
        self.search_changed_at = Some(Instant::now());
      }
      KeyCode::Char(c) => {
        self.search.push(c);
        self.list_cursor = 0;
        self.search_changed_at = Some(Instant::now());
      }
      _ => {}
    }
    true
  }

  fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc | KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
      }
      KeyCode::Tab | KeyCode::Down => {
        self.filter_focus = (self.filter_focus + 1) % 3;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.filter_focus = (self.filter_focus + 2) % 3;
      }
      KeyCode::Backspace => match self.filter_focus {
        0 => self.filters.sexo = None,
        1 => {
          self.filters.naturalidade.pop();
        }
        _ => {
          self.filters.nacionalidade.pop();
        }
      },
      KeyCode::Char(' ') if self.filter_focus == 0 => {
        self.filters.sexo = match self.filters.sexo {
          None => Some(Sexo::Masculino),
          Some(Sexo::Masculino) => Some(Sexo::Feminino),
          Some(Sexo::Feminino) => Some(Sexo::Outro),
          Some(Sexo::Outro) => None,
        };
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        match self.filter_focus {
          1 => self.filters.naturalidade.push(c),
          2 => self.filters.nacionalidade.push(c),
          _ => {}
        }
        self.list_cursor = 0;
      }
      _ => {}
    }
    true
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_people().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Open detail — refetches by id so the pane shows fresh data.
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.cursor_person().map(|p| p.id.clone()) {
          self.open_detail(&id).await;
        }
      }

      // Search / filters
      KeyCode::Char('/') => {
        self.search_active = true;
        self.list_cursor = 0;
      }
      KeyCode::Char('f') => {
        self.filter_active = true;
        self.filter_focus = 0;
      }
      KeyCode::Char('c') => {
        // Clear search and filters, as the form's "Limpar" button does.
        self.search.clear();
        self.filters = Filters::default();
        self.list_cursor = 0;
        self.search_changed_at = Some(Instant::now());
      }

      // CRUD
      KeyCode::Char('n') => {
        self.form = FormState::new_create();
        self.screen = Screen::PersonForm;
      }
      KeyCode::Char('e') => {
        if let Some(person) = self.cursor_person().cloned() {
          self.form = FormState::new_edit(&person);
          self.screen = Screen::PersonForm;
        }
      }
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(person) = self.cursor_person().cloned() {
          self.deleting = Some(person);
          self.screen = Screen::ConfirmDelete;
        }
      }

      KeyCode::Char('r') => self.refresh_people().await,
      KeyCode::Char('L') => self.logout(None),

      _ => {}
    }
    true
  }

  async fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::PersonList;
        self.detail = None;
      }

      KeyCode::Char('e') => {
        if let Some(person) = self.detail.clone() {
          self.form = FormState::new_edit(&person);
          self.screen = Screen::PersonForm;
        }
      }
      KeyCode::Char('d') => {
        if let Some(person) = self.detail.clone() {
          self.deleting = Some(person);
          self.screen = Screen::ConfirmDelete;
        }
      }

      // Quick switching within the filtered list.
      KeyCode::Char(']') | KeyCode::PageDown => {
        let len = self.filtered_people().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
          if let Some(id) = self.cursor_person().map(|p| p.id.clone()) {
            self.open_detail(&id).await;
          }
        }
      }
      KeyCode::Char('[') | KeyCode::PageUp => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
          if let Some(id) = self.cursor_person().map(|p| p.id.clone()) {
            self.open_detail(&id).await;
          }
        }
      }

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => {
        self.screen = if self.detail.is_some() {
          Screen::PersonDetail
        } else {
          Screen::PersonList
        };
      }
      KeyCode::Tab | KeyCode::Down => {
        self.form.focus = (self.form.focus + 1) % FormState::FIELDS.len();
      }
      KeyCode::BackTab | KeyCode::Up => {
        let n = FormState::FIELDS.len();
        self.form.focus = (self.form.focus + n - 1) % n;
      }
      KeyCode::Backspace => self.form.pop_char(),
      KeyCode::Left | KeyCode::Right if self.form.focused_field() == Field::Sexo => {
        self.form.cycle_sexo();
      }
      KeyCode::Char(c) => self.form.push_char(c),
      KeyCode::Enter => self.submit_form().await,
      _ => {}
    }
    true
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('s') | KeyCode::Char('y') | KeyCode::Enter => {
        if let Some(person) = self.deleting.take() {
          match self.client.delete_person(&person.id).await {
            Ok(()) => {
              self.status_msg = "O registro foi removido com sucesso.".into();
              self.detail = None;
              self.screen = Screen::PersonList;
              self.refresh_people().await;
            }
            Err(e) => {
              self.screen = Screen::PersonList;
              self.handle_api_error(e);
            }
          }
        }
      }
      KeyCode::Char('n') | KeyCode::Esc => {
        self.deleting = None;
        self.screen = if self.detail.is_some() {
          Screen::PersonDetail
        } else {
          Screen::PersonList
        };
      }
      _ => {}
    }
    true
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Validate and submit the form; on success, close it and refetch the
  /// list so every view reflects the change.
  async fn submit_form(&mut self) {
    match self.form.form.validate() {
      Ok(()) => {}
      Err(errors) => {
        self.form.errors = Some(errors);
        return;
      }
    }
    self.form.errors = None;

    let result = match &self.form.editing_id {
      Some(id) => {
        let patch = PersonPatch::from_form(&self.form.form);
        self.client.update_person(id, &patch).await
      }
      None => self.client.create_person(&self.form.form).await,
    };

    match result {
      Ok(person) => {
        self.status_msg = if self.form.editing_id.is_some() {
          "Registro atualizado com sucesso.".into()
        } else {
          "Registro criado com sucesso.".into()
        };
        if self.detail.is_some() {
          self.detail = Some(person);
          self.screen = Screen::PersonDetail;
        } else {
          self.screen = Screen::PersonList;
        }
        self.form = FormState::default();
        self.refresh_people().await;
      }
      Err(e) => self.handle_api_error(e),
    }
  }

  /// Transition to `PersonDetail`, fetching the record by id.
  async fn open_detail(&mut self, id: &str) {
    match self.client.get_person(id).await {
      Ok(person) => {
        self.detail = Some(person);
        self.screen = Screen::PersonDetail;
        self.status_msg = String::new();
      }
      Err(e) => self.handle_api_error(e),
    }
  }
}

// ─── Page helpers ─────────────────────────────────────────────────────────────

fn single_page(person: Person) -> PersonPage {
  PersonPage {
    items:       vec![person],
    page:        1,
    limit:       1,
    total_items: 1,
    total_pages: 1,
  }
}

fn empty_page() -> PersonPage {
  PersonPage {
    items:       Vec::new(),
    page:        1,
    limit:       LIST_LIMIT,
    total_items: 0,
    total_pages: 0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_app() -> App {
    let client = ApiClient::new("http://localhost:9", None).unwrap();
    let tokens = TokenStore::new(std::env::temp_dir().join("pessoa-app-test-token"));
    App::new(Arc::new(client), tokens)
  }

  fn person(nome: &str, sexo: Option<Sexo>, naturalidade: Option<&str>) -> Person {
    Person {
      nome: nome.into(),
      sexo,
      naturalidade: naturalidade.map(String::from),
      cpf: "529.982.247-25".into(),
      ..Person::default()
    }
  }

  fn with_people(app: &mut App, people: Vec<Person>) {
    let count = people.len();
    app.page = Some(PersonPage {
      items:       people,
      page:        1,
      limit:       count.max(1),
      total_items: count,
      total_pages: 1,
    });
  }

  #[test]
  fn starts_on_login_without_token() {
    assert_eq!(test_app().screen, Screen::Login);
  }

  #[test]
  fn search_narrows_by_name_cpf_and_email() {
    let mut app = test_app();
    let mut ana = person("Ana Souza", None, None);
    ana.email = Some("ana@example.com".into());
    with_people(&mut app, vec![ana, person("Bruno Lima", None, None)]);

    app.search = "ana".into();
    assert_eq!(app.filtered_people().len(), 1);

    app.search = "529.982".into();
    assert_eq!(app.filtered_people().len(), 2);

    app.search = "@example".into();
    assert_eq!(app.filtered_people().len(), 1);
  }

  #[test]
  fn raw_digit_cpf_search_matches_formatted_record() {
    // The by-CPF lookup returns a formatted record; the local search echo
    // must not hide it when the user typed bare digits.
    let mut app = test_app();
    with_people(&mut app, vec![person("Ana Souza", None, None)]);

    app.search = "52998224725".into();
    assert_eq!(app.filtered_people().len(), 1);

    app.search = "247-25".into();
    assert_eq!(app.filtered_people().len(), 1);
  }

  #[test]
  fn filters_apply_over_fetched_page() {
    let mut app = test_app();
    with_people(&mut app, vec![
      person("Ana Souza", Some(Sexo::Feminino), Some("Fortaleza")),
      person("Bruno Lima", Some(Sexo::Masculino), Some("Recife")),
    ]);

    app.filters.sexo = Some(Sexo::Feminino);
    assert_eq!(app.filtered_people().len(), 1);
    assert_eq!(app.filtered_people()[0].nome, "Ana Souza");

    app.filters.sexo = None;
    app.filters.naturalidade = "reci".into();
    assert_eq!(app.filtered_people()[0].nome, "Bruno Lima");
  }

  #[test]
  fn form_cpf_input_formats_progressively() {
    let mut state = FormState::default();
    state.focus = FormState::FIELDS
      .iter()
      .position(|f| *f == Field::Cpf)
      .unwrap();
    for c in "52998224725".chars() {
      state.push_char(c);
    }
    assert_eq!(state.form.cpf, "529.982.247-25");

    state.pop_char();
    assert_eq!(state.form.cpf, "5299822472");
  }

  #[test]
  fn sexo_cycles_through_all_values() {
    let mut state = FormState::default();
    assert_eq!(state.form.sexo, None);
    state.cycle_sexo();
    assert_eq!(state.form.sexo, Some(Sexo::Masculino));
    state.cycle_sexo();
    state.cycle_sexo();
    assert_eq!(state.form.sexo, Some(Sexo::Outro));
    state.cycle_sexo();
    assert_eq!(state.form.sexo, None);
  }
}
