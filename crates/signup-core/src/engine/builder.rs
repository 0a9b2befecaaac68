//! Builder para `FormEngine`.
//!
//! Orden de precedencia del validador de email:
//! 1. `email_validator(..)` explícito (predicado inyectado).
//! 2. `email_pattern(..)` / `config(..)`: se compila en `build()`; un patrón
//!    inválido hace fallar `build()` (fail fast al arrancar).
//! 3. Validador por defecto.
//!
//! ```ignore
//! let engine = FormEngine::builder()
//!     .max_unsuccessful_attempts(4)
//!     .email_pattern(r"[a-z]+@example\.com", EmailMatchMode::Full)
//!     .build()?;
//! ```

use std::sync::Arc;

use uuid::Uuid;

use crate::config::EngineConfig;
use crate::constants::{DEFAULT_EMAIL_PATTERN, DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS};
use crate::engine::FormEngine;
use crate::errors::CoreEngineError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::machine::ValidationPolicy;
use crate::validation::{default_email_validator, EmailMatchMode, EmailValidator, RegexEmailValidator};

pub struct FormEngineBuilder<E: EventStore = InMemoryEventStore> {
    event_store: E,
    form_id: Option<Uuid>,
    email_validator: Option<Arc<dyn EmailValidator>>,
    email_pattern: Option<(String, EmailMatchMode)>,
    max_unsuccessful_attempts: u32,
    journal: bool,
    redact_passwords: bool,
}

impl FormEngineBuilder<InMemoryEventStore> {
    pub fn new() -> Self {
        Self { event_store: InMemoryEventStore::default(),
               form_id: None,
               email_validator: None,
               email_pattern: None,
               max_unsuccessful_attempts: DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS,
               journal: true,
               redact_passwords: true }
    }
}

impl Default for FormEngineBuilder<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventStore> FormEngineBuilder<E> {
    /// Sustituye la store de eventos.
    pub fn event_store<S: EventStore>(self, event_store: S) -> FormEngineBuilder<S> {
        FormEngineBuilder { event_store,
                            form_id: self.form_id,
                            email_validator: self.email_validator,
                            email_pattern: self.email_pattern,
                            max_unsuccessful_attempts: self.max_unsuccessful_attempts,
                            journal: self.journal,
                            redact_passwords: self.redact_passwords }
    }

    /// Fija el id del formulario (por defecto uno aleatorio).
    pub fn form_id(mut self, form_id: Uuid) -> Self {
        self.form_id = Some(form_id);
        self
    }

    /// Inyecta un predicado de email; tiene prioridad sobre cualquier patrón.
    pub fn email_validator<V>(mut self, validator: V) -> Self
        where V: EmailValidator + 'static
    {
        let validator: Arc<dyn EmailValidator> = Arc::new(validator);
        self.email_validator = Some(validator);
        self
    }

    pub fn email_pattern(mut self, pattern: impl Into<String>, mode: EmailMatchMode) -> Self {
        self.email_pattern = Some((pattern.into(), mode));
        self
    }

    pub fn max_unsuccessful_attempts(mut self, max: u32) -> Self {
        self.max_unsuccessful_attempts = max;
        self
    }

    pub fn journal(mut self, enabled: bool) -> Self {
        self.journal = enabled;
        self
    }

    pub fn redact_passwords(mut self, enabled: bool) -> Self {
        self.redact_passwords = enabled;
        self
    }

    /// Aplica todos los valores de `config`.
    pub fn config(self, config: &EngineConfig) -> Self {
        self.email_pattern(config.email_pattern.clone(), config.email_match)
            .max_unsuccessful_attempts(config.max_unsuccessful_attempts)
            .journal(config.journal)
            .redact_passwords(config.redact_passwords)
    }

    pub fn build(self) -> Result<FormEngine<E>, CoreEngineError> {
        let validator: Arc<dyn EmailValidator> = match (self.email_validator, self.email_pattern) {
            (Some(v), _) => v,
            (None, Some((pattern, mode))) if pattern == DEFAULT_EMAIL_PATTERN && mode == EmailMatchMode::Full => {
                Arc::new(default_email_validator().clone())
            }
            (None, Some((pattern, mode))) => Arc::new(RegexEmailValidator::new(&pattern, mode)?),
            (None, None) => Arc::new(default_email_validator().clone()),
        };
        let policy = ValidationPolicy::new(validator, self.max_unsuccessful_attempts);
        Ok(FormEngine::with_parts(self.form_id.unwrap_or_else(Uuid::new_v4),
                                  policy,
                                  self.event_store,
                                  self.journal,
                                  self.redact_passwords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FormInputs, FormOutputs};
    use crate::recorder::Recorder;

    #[test]
    fn invalid_pattern_fails_build() {
        let res = FormEngineBuilder::new().email_pattern("[", EmailMatchMode::Full).build();
        assert!(matches!(res, Err(CoreEngineError::InvalidEmailPattern { .. })));
    }

    #[test]
    fn injected_validator_wins_over_pattern() {
        let mut engine = FormEngineBuilder::new().email_pattern("[", EmailMatchMode::Full)
                                                 .email_validator(|e: &str| e == "ok")
                                                 .build()
                                                 .expect("validator ignores the pattern");
        let alerts = Recorder::attach(engine.alert_message());
        engine.on_name_changed(Some("n"));
        engine.on_email_changed(Some("ok"));
        engine.on_password_changed(Some("p"));
        engine.on_submit_pressed();
        alerts.assert_values(&["Successful"]);
    }

    #[test]
    fn form_id_and_threshold_are_applied() {
        let id = Uuid::new_v4();
        let engine = FormEngineBuilder::new().form_id(id).max_unsuccessful_attempts(7).build().unwrap();
        assert_eq!(engine.form_id(), id);
        assert_eq!(engine.policy().max_unsuccessful_attempts(), 7);
    }
}
