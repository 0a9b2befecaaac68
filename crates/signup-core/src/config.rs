//! Carga de configuración del engine desde variables de entorno.
//!
//! Claves (todas opcionales):
//! - `SIGNUP_EMAIL_PATTERN`: patrón regex del email.
//! - `SIGNUP_EMAIL_MATCH`: `full` (por defecto) o `first`.
//! - `SIGNUP_MAX_UNSUCCESSFUL_ATTEMPTS`: intentos "Unsuccessful" antes del bloqueo.
//! - `SIGNUP_JOURNAL`: registrar eventos en el journal (`true`).
//! - `SIGNUP_REDACT_PASSWORDS`: enmascarar passwords en el journal (`true`).
//!
//! Un valor mal formado es un error fatal de arranque.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMAIL_PATTERN, DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS};
use crate::errors::CoreEngineError;
use crate::validation::{EmailMatchMode, RegexEmailValidator};

pub const ENV_EMAIL_PATTERN: &str = "SIGNUP_EMAIL_PATTERN";
pub const ENV_EMAIL_MATCH: &str = "SIGNUP_EMAIL_MATCH";
pub const ENV_MAX_UNSUCCESSFUL_ATTEMPTS: &str = "SIGNUP_MAX_UNSUCCESSFUL_ATTEMPTS";
pub const ENV_JOURNAL: &str = "SIGNUP_JOURNAL";
pub const ENV_REDACT_PASSWORDS: &str = "SIGNUP_REDACT_PASSWORDS";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub email_pattern: String,
    pub email_match: EmailMatchMode,
    pub max_unsuccessful_attempts: u32,
    pub journal: bool,
    pub redact_passwords: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
               email_match: EmailMatchMode::Full,
               max_unsuccessful_attempts: DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS,
               journal: true,
               redact_passwords: true }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, CoreEngineError> {
        // asegura que .env se haya cargado
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de una función arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreEngineError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(pattern) = lookup(ENV_EMAIL_PATTERN).filter(|p| !p.trim().is_empty()) {
            cfg.email_pattern = pattern;
        }
        if let Some(raw) = lookup(ENV_EMAIL_MATCH) {
            cfg.email_match = raw.parse().map_err(|_| invalid(ENV_EMAIL_MATCH, &raw))?;
        }
        if let Some(raw) = lookup(ENV_MAX_UNSUCCESSFUL_ATTEMPTS) {
            cfg.max_unsuccessful_attempts = raw.trim().parse().map_err(|_| invalid(ENV_MAX_UNSUCCESSFUL_ATTEMPTS, &raw))?;
        }
        if let Some(raw) = lookup(ENV_JOURNAL) {
            cfg.journal = parse_bool(ENV_JOURNAL, &raw)?;
        }
        if let Some(raw) = lookup(ENV_REDACT_PASSWORDS) {
            cfg.redact_passwords = parse_bool(ENV_REDACT_PASSWORDS, &raw)?;
        }
        Ok(cfg)
    }

    /// Compila el validador de email descrito por esta configuración.
    pub fn email_validator(&self) -> Result<RegexEmailValidator, CoreEngineError> {
        RegexEmailValidator::new(&self.email_pattern, self.email_match)
    }
}

fn invalid(key: &str, value: &str) -> CoreEngineError {
    CoreEngineError::InvalidConfig { key: key.to_string(),
                                     value: value.to_string() }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, CoreEngineError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.max_unsuccessful_attempts, 2);
        assert!(cfg.email_validator().is_ok());
    }

    #[test]
    fn reads_every_key() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[(ENV_EMAIL_PATTERN, r"[a-z]+@[a-z]+\.[a-z]+"),
                                                          (ENV_EMAIL_MATCH, "first"),
                                                          (ENV_MAX_UNSUCCESSFUL_ATTEMPTS, "5"),
                                                          (ENV_JOURNAL, "off"),
                                                          (ENV_REDACT_PASSWORDS, "0")])).unwrap();
        assert_eq!(cfg.email_match, EmailMatchMode::FirstMatch);
        assert_eq!(cfg.max_unsuccessful_attempts, 5);
        assert!(!cfg.journal);
        assert!(!cfg.redact_passwords);
        assert_eq!(cfg.email_pattern, r"[a-z]+@[a-z]+\.[a-z]+");
    }

    #[test]
    fn malformed_values_fail_fast() {
        let err = EngineConfig::from_lookup(lookup_from(&[(ENV_MAX_UNSUCCESSFUL_ATTEMPTS, "many")])).unwrap_err();
        assert_eq!(err,
                   CoreEngineError::InvalidConfig { key: ENV_MAX_UNSUCCESSFUL_ATTEMPTS.into(),
                                                    value: "many".into() });
        assert!(EngineConfig::from_lookup(lookup_from(&[(ENV_JOURNAL, "maybe")])).is_err());
        assert!(EngineConfig::from_lookup(lookup_from(&[(ENV_EMAIL_MATCH, "fuzzy")])).is_err());
    }

    #[test]
    fn bad_pattern_is_reported_when_compiling() {
        let cfg = EngineConfig { email_pattern: "(".into(),
                                 ..EngineConfig::default() };
        assert!(matches!(cfg.email_validator(), Err(CoreEngineError::InvalidEmailPattern { .. })));
    }
}
