//! Predicados puros sobre los valores del formulario.
//!
//! - `is_present`: los tres campos existen y no están vacíos. Controla si el
//!   usuario puede pulsar "submit", sin mirar el formato.
//! - `is_valid`: `is_present` y además el email pasa el validador inyectado.
//!
//! Sin efectos secundarios ni I/O.

mod email;

pub use email::{default_email_validator, is_valid_email, EmailMatchMode, EmailValidator, RegexEmailValidator};

use crate::model::FormSnapshot;

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// `true` sii email, nombre y password están presentes y no vacíos.
pub fn is_present(snapshot: &FormSnapshot) -> bool {
    non_empty(snapshot.email()) && non_empty(snapshot.name()) && non_empty(snapshot.password())
}

/// `true` sii `is_present` y el email es aceptado por `validator`.
pub fn is_valid(snapshot: &FormSnapshot, validator: &dyn EmailValidator) -> bool {
    is_present(snapshot) && snapshot.email().is_some_and(|e| validator.is_valid_email(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(email: Option<&str>, name: Option<&str>, password: Option<&str>) -> FormSnapshot {
        FormSnapshot::new(email, name, password)
    }

    #[test]
    fn present_requires_all_three_non_empty() {
        assert!(is_present(&snap(Some("x"), Some("y"), Some("z"))));
        assert!(!is_present(&snap(None, Some("y"), Some("z"))));
        assert!(!is_present(&snap(Some("x"), Some(""), Some("z"))));
        assert!(!is_present(&snap(Some("x"), Some("y"), None)));
    }

    #[test]
    fn present_ignores_email_format() {
        assert!(is_present(&snap(Some("not-an-email"), Some("Lisa"), Some("pw"))));
    }

    #[test]
    fn valid_requires_presence_and_email_format() {
        let v = default_email_validator();
        assert!(is_valid(&snap(Some("lisa@rules.com"), Some("Lisa"), Some("password123")), v));
        assert!(!is_valid(&snap(Some("lisa@rules"), Some("Lisa"), Some("password123")), v));
        assert!(!is_valid(&snap(Some("lisa@rules.com"), Some(""), Some("password123")), v));
        assert!(!is_valid(&snap(Some("lisa@rules.com"), Some("Lisa"), None), v));
    }

    #[test]
    fn valid_uses_the_injected_predicate() {
        let accept_all = |_: &str| true;
        assert!(is_valid(&snap(Some("whatever"), Some("a"), Some("b")), &accept_all));
        // presencia sigue siendo obligatoria
        assert!(!is_valid(&snap(Some(""), Some("a"), Some("b")), &accept_all));
    }
}
