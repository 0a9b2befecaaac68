//! Errores específicos del core.
//!
//! Un email mal formado o un campo vacío NO son errores: son estados válidos
//! del formulario y se comunican como valores de las señales. Aquí sólo viven
//! fallos de configuración (fail fast al construir el engine).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    #[error("invalid email pattern `{pattern}`: {reason}")]
    InvalidEmailPattern { pattern: String, reason: String },
    #[error("invalid configuration value for {key}: `{value}`")]
    InvalidConfig { key: String, value: String },
    #[error("internal: {0}")] Internal(String),
}
