//! Validación de formato de email basada en `regex`.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EMAIL_PATTERN;
use crate::errors::CoreEngineError;

/// Predicado inyectable para el formato de email.
pub trait EmailValidator: Send + Sync {
    fn is_valid_email(&self, email: &str) -> bool;
}

impl<F> EmailValidator for F where F: Fn(&str) -> bool + Send + Sync
{
    fn is_valid_email(&self, email: &str) -> bool {
        self(email)
    }
}

/// Anclaje del patrón sobre el texto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailMatchMode {
    /// El patrón debe cubrir el texto completo.
    #[default]
    Full,
    /// Basta con que exista una coincidencia en algún punto del texto.
    FirstMatch,
}

impl FromStr for EmailMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(EmailMatchMode::Full),
            "first" | "first_match" => Ok(EmailMatchMode::FirstMatch),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegexEmailValidator {
    regex: Regex,
    pattern: String,
    mode: EmailMatchMode,
}

impl RegexEmailValidator {
    /// Compila `pattern`. Un patrón inválido es un error de configuración
    /// fatal: se detecta aquí, nunca en cada llamada.
    pub fn new(pattern: &str, mode: EmailMatchMode) -> Result<Self, CoreEngineError> {
        let source = match mode {
            EmailMatchMode::Full => format!("^(?:{pattern})$"),
            EmailMatchMode::FirstMatch => pattern.to_string(),
        };
        let regex = Regex::new(&source).map_err(|e| CoreEngineError::InvalidEmailPattern { pattern: pattern.to_string(),
                                                                                            reason: e.to_string() })?;
        Ok(Self { regex,
                  pattern: pattern.to_string(),
                  mode })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn mode(&self) -> EmailMatchMode {
        self.mode
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid_email(&self, email: &str) -> bool {
        self.regex.is_match(email)
    }
}

static DEFAULT_VALIDATOR: Lazy<RegexEmailValidator> = Lazy::new(|| {
    RegexEmailValidator::new(DEFAULT_EMAIL_PATTERN, EmailMatchMode::Full).expect("DEFAULT_EMAIL_PATTERN must compile")
});

/// Validador por defecto (patrón incorporado, anclaje completo). Se compila
/// una sola vez.
pub fn default_email_validator() -> &'static RegexEmailValidator {
    &DEFAULT_VALIDATOR
}

/// Atajo sobre el validador por defecto.
pub fn is_valid_email(email: &str) -> bool {
    DEFAULT_VALIDATOR.is_valid_email(email)
}
