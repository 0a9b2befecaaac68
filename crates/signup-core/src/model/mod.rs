//! Modelo de datos del formulario: campos, snapshots e intentos.

mod attempt;
mod field;

pub use attempt::{AlertMessage, AttemptCounter, AttemptOutcome, LockoutLatch};
pub use field::{Field, FieldSlot, FieldState};

use serde::{Deserialize, Serialize};

/// Triple inmutable `(email, name, password)` capturado del `FieldState`.
///
/// Se consume (muestrea) en cada submit y en cada recomputo del flag de
/// habilitación; nunca se muta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl FormSnapshot {
    pub fn new(email: Option<&str>, name: Option<&str>, password: Option<&str>) -> Self {
        Self { email: email.map(str::to_owned),
               name: name.map(str::to_owned),
               password: password.map(str::to_owned) }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
