//! Máquina de estados del formulario.
//!
//! Cada evento de entrada se aplica a un `FormState` y produce, de forma
//! síncrona, cero o más `Emission`s. La función de transición es pura: el
//! resultado depende sólo del historial de entradas, lo que permite que el
//! replay del journal re-derive exactamente las mismas emisiones.
//!
//! Reglas:
//! - cambio de campo: actualiza la celda; si ya hay snapshot combinado y no
//!   hay bloqueo, emite `is_present` en la señal de habilitación.
//! - view loaded: emite `false` en la señal de habilitación (salvo bloqueo).
//! - submit: muestrea los valores actuales y clasifica. Los primeros
//!   `max_unsuccessful_attempts` inválidos emiten "Unsuccessful"; los
//!   siguientes "Too Many Attempts". El primero de éstos sella el latch,
//!   emite un último `false` y completa la señal de habilitación.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS;
use crate::model::{AlertMessage, AttemptCounter, AttemptOutcome, Field, FieldState, FormSnapshot, LockoutLatch};
use crate::validation::{default_email_validator, is_present, is_valid, EmailValidator};

/// Eventos de entrada aceptados por el engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormInput {
    ViewLoaded,
    FieldChanged { field: Field, value: Option<String> },
    SubmitPressed,
}

/// Salida producida por una transición, en orden de entrega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emission {
    Alert(AlertMessage),
    Enabled(bool),
    /// Cierre definitivo de la señal de habilitación.
    EnabledCompleted,
}

/// Clasificación registrada para un submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedAttempt {
    pub outcome: AttemptOutcome,
    /// Valor del contador de inválidos tras aplicar este intento.
    pub attempt_count: u32,
    /// `true` si este intento selló el bloqueo.
    pub engaged_lockout: bool,
}

/// Resultado de aplicar una entrada.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub attempt: Option<ClassifiedAttempt>,
    pub emissions: Vec<Emission>,
}

/// Parámetros de clasificación: validador de email y umbral de bloqueo.
#[derive(Clone)]
pub struct ValidationPolicy {
    email_validator: Arc<dyn EmailValidator>,
    max_unsuccessful_attempts: u32,
}

impl ValidationPolicy {
    pub fn new(email_validator: Arc<dyn EmailValidator>, max_unsuccessful_attempts: u32) -> Self {
        Self { email_validator,
               max_unsuccessful_attempts }
    }

    pub fn max_unsuccessful_attempts(&self) -> u32 {
        self.max_unsuccessful_attempts
    }

    pub fn email_validator(&self) -> &dyn EmailValidator {
        self.email_validator.as_ref()
    }

    pub fn classify(&self, snapshot: &FormSnapshot) -> AttemptOutcome {
        if is_valid(snapshot, self.email_validator.as_ref()) {
            AttemptOutcome::Valid
        } else {
            AttemptOutcome::Invalid
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(Arc::new(default_email_validator().clone()), DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS)
    }
}

impl fmt::Debug for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationPolicy")
         .field("max_unsuccessful_attempts", &self.max_unsuccessful_attempts)
         .finish_non_exhaustive()
    }
}

/// Estado completo: campos, contador de inválidos y latch de bloqueo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FieldState,
    pub attempts: AttemptCounter,
    pub lockout: LockoutLatch,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked_out(&self) -> bool {
        self.lockout.is_sealed()
    }

    /// Aplica una entrada y devuelve las emisiones resultantes.
    pub fn apply(&mut self, input: &FormInput, policy: &ValidationPolicy) -> Transition {
        let mut transition = Transition::default();
        match input {
            FormInput::ViewLoaded => {
                if !self.is_locked_out() {
                    transition.emissions.push(Emission::Enabled(false));
                }
            }
            FormInput::FieldChanged { field, value } => {
                self.fields.set(*field, value.clone());
                if !self.is_locked_out() {
                    if let Some(snapshot) = self.fields.combined() {
                        transition.emissions.push(Emission::Enabled(is_present(&snapshot)));
                    }
                }
            }
            FormInput::SubmitPressed => {
                let attempt = self.submit(policy, &mut transition.emissions);
                transition.attempt = Some(attempt);
            }
        }
        transition
    }

    fn submit(&mut self, policy: &ValidationPolicy, emissions: &mut Vec<Emission>) -> ClassifiedAttempt {
        let snapshot = self.fields.snapshot();
        match policy.classify(&snapshot) {
            AttemptOutcome::Valid => {
                // el contador NO se resetea tras un éxito
                emissions.push(Emission::Alert(AlertMessage::Successful));
                ClassifiedAttempt { outcome: AttemptOutcome::Valid,
                                    attempt_count: self.attempts.get(),
                                    engaged_lockout: false }
            }
            AttemptOutcome::Invalid => {
                let count = self.attempts.record_invalid();
                if count <= policy.max_unsuccessful_attempts() {
                    emissions.push(Emission::Alert(AlertMessage::Unsuccessful));
                    return ClassifiedAttempt { outcome: AttemptOutcome::Invalid,
                                               attempt_count: count,
                                               engaged_lockout: false };
                }
                emissions.push(Emission::Alert(AlertMessage::TooManyAttempts));
                let engaged = self.lockout.seal();
                if engaged {
                    emissions.push(Emission::Enabled(false));
                    emissions.push(Emission::EnabledCompleted);
                }
                ClassifiedAttempt { outcome: AttemptOutcome::Invalid,
                                    attempt_count: count,
                                    engaged_lockout: engaged }
            }
        }
    }
}
