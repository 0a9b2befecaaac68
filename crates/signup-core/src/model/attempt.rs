//! Intentos de envío, contador de fallos y latch de bloqueo.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MSG_SUCCESSFUL, MSG_TOO_MANY_ATTEMPTS, MSG_UNSUCCESSFUL};

/// Clasificación de un intento. Se calcula una única vez por submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Valid,
    Invalid,
}

/// Mensajes que puede emitir la señal de alerta.
/// Se serializa con el texto visible (`"Too Many Attempts"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertMessage {
    #[serde(rename = "Successful")]
    Successful,
    #[serde(rename = "Unsuccessful")]
    Unsuccessful,
    #[serde(rename = "Too Many Attempts")]
    TooManyAttempts,
}

impl AlertMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertMessage::Successful => MSG_SUCCESSFUL,
            AlertMessage::Unsuccessful => MSG_UNSUCCESSFUL,
            AlertMessage::TooManyAttempts => MSG_TOO_MANY_ATTEMPTS,
        }
    }
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contador de intentos inválidos desde la construcción del engine.
///
/// Monótono: se incrementa exactamente una vez por intento inválido y nunca
/// se decrementa ni se resetea (tampoco tras un intento válido).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCounter(u32);

impl AttemptCounter {
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Registra un intento inválido y devuelve el nuevo valor.
    pub fn record_invalid(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }
}

/// Latch de una sola dirección: una vez sellado no hay forma de abrirlo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockoutLatch {
    sealed: bool,
}

impl LockoutLatch {
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Sella el latch. Devuelve `true` sólo en la transición abierto -> sellado.
    pub fn seal(&mut self) -> bool {
        let first = !self.sealed;
        self.sealed = true;
        first
    }
}
