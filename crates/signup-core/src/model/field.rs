use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FormSnapshot;

/// Campo de entrada del formulario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            other => Err(format!("unknown field `{other}`")),
        }
    }
}

/// Celda "último valor" de un campo.
///
/// `received` distingue "nunca emitió" de "emitió ausente": combine-latest
/// sólo produce valor combinado cuando los tres campos emitieron al menos una
/// vez, aunque sea `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSlot {
    pub value: Option<String>,
    pub received: bool,
}

impl FieldSlot {
    fn set(&mut self, value: Option<String>) {
        self.value = value;
        self.received = true;
    }
}

/// Estado vivo del formulario. Se muta un campo a la vez; nunca se resetea.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub name: FieldSlot,
    pub email: FieldSlot,
    pub password: FieldSlot,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, field: Field) -> &FieldSlot {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Actualiza un campo con su último valor (incluido ausente o vacío).
    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Name => self.name.set(value),
            Field::Email => self.email.set(value),
            Field::Password => self.password.set(value),
        }
    }

    /// `true` cuando los tres campos han emitido al menos una vez.
    pub fn is_combined(&self) -> bool {
        Field::ALL.iter().all(|f| self.slot(*f).received)
    }

    /// Valores actuales; un campo nunca emitido queda ausente.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot { email: self.email.value.clone(),
                       name: self.name.value.clone(),
                       password: self.password.value.clone() }
    }

    /// Snapshot combine-latest: `None` hasta que los tres campos emitieron.
    pub fn combined(&self) -> Option<FormSnapshot> {
        self.is_combined().then(|| self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_requires_every_field_to_emit_once() {
        let mut state = FieldState::new();
        state.set(Field::Name, Some("Chris".into()));
        state.set(Field::Email, Some("chris@gmail.com".into()));
        assert!(state.combined().is_none());

        // emitir ausente también cuenta
        state.set(Field::Password, None);
        let snap = state.combined().expect("all fields received");
        assert_eq!(snap.name(), Some("Chris"));
        assert_eq!(snap.password(), None);
    }

    #[test]
    fn snapshot_reports_unset_fields_as_absent() {
        let mut state = FieldState::new();
        state.set(Field::Email, Some("a@b.co".into()));
        let snap = state.snapshot();
        assert_eq!(snap.email(), Some("a@b.co"));
        assert_eq!(snap.name(), None);
        assert_eq!(snap.password(), None);
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("EMAIL".parse::<Field>(), Ok(Field::Email));
        assert!("phone".parse::<Field>().is_err());
    }
}
