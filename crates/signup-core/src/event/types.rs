//! Tipos de evento del journal y estructura `FormEvent`.
//!
//! Rol en el flujo:
//! - El `FormEngine` registra cada entrada recibida y cada emisión producida
//!   en un `EventStore` append-only.
//! - Las entradas bastan para reconstruir el estado por replay; las emisiones
//!   registradas permiten verificar que el replay reproduce la misma salida.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::machine::{Emission, FormInput};
use crate::model::{AlertMessage, AttemptOutcome, Field};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEventKind {
    /// La vista terminó de cargar.
    ViewLoaded,
    /// Un campo cambió. Con redacción activa el password se guarda como `*`
    /// repetido tantas veces como caracteres tenga.
    FieldChanged { field: Field, value: Option<String> },
    /// Pulsación de submit.
    SubmitPressed,
    /// Resultado de clasificar el submit previo.
    AttemptClassified { outcome: AttemptOutcome, attempt_count: u32 },
    /// El latch de bloqueo se selló en este intento.
    LockoutEngaged { attempt_count: u32 },
    AlertEmitted { message: AlertMessage },
    EnabledEmitted { enabled: bool },
    /// La señal de habilitación quedó cerrada.
    EnabledCompleted,
}

impl FormEventKind {
    /// Entrada equivalente, si el evento es una entrada.
    pub fn input(&self) -> Option<FormInput> {
        match self {
            FormEventKind::ViewLoaded => Some(FormInput::ViewLoaded),
            FormEventKind::FieldChanged { field, value } => Some(FormInput::FieldChanged { field: *field,
                                                                                           value: value.clone() }),
            FormEventKind::SubmitPressed => Some(FormInput::SubmitPressed),
            _ => None,
        }
    }

    /// Emisión equivalente, si el evento es una emisión.
    pub fn emission(&self) -> Option<Emission> {
        match self {
            FormEventKind::AlertEmitted { message } => Some(Emission::Alert(*message)),
            FormEventKind::EnabledEmitted { enabled } => Some(Emission::Enabled(*enabled)),
            FormEventKind::EnabledCompleted => Some(Emission::EnabledCompleted),
            _ => None,
        }
    }

    /// Código corto para trazas (`L`, `F`, `S`, `C`, `X`, `A`, `E`, `Z`).
    pub fn code(&self) -> &'static str {
        match self {
            FormEventKind::ViewLoaded => "L",
            FormEventKind::FieldChanged { .. } => "F",
            FormEventKind::SubmitPressed => "S",
            FormEventKind::AttemptClassified { .. } => "C",
            FormEventKind::LockoutEngaged { .. } => "X",
            FormEventKind::AlertEmitted { .. } => "A",
            FormEventKind::EnabledEmitted { .. } => "E",
            FormEventKind::EnabledCompleted => "Z",
        }
    }
}

impl From<Emission> for FormEventKind {
    fn from(emission: Emission) -> Self {
        match emission {
            Emission::Alert(message) => FormEventKind::AlertEmitted { message },
            Emission::Enabled(enabled) => FormEventKind::EnabledEmitted { enabled },
            Emission::EnabledCompleted => FormEventKind::EnabledCompleted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub form_id: Uuid,
    pub kind: FormEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en el replay
}
