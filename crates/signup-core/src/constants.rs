//! Constantes del motor de validación.
//!
//! Los textos de alerta forman parte del contrato observable de la señal
//! `alert_message`: la capa de presentación los muestra tal cual.

/// Mensaje para un intento válido.
pub const MSG_SUCCESSFUL: &str = "Successful";
/// Mensaje para los primeros intentos inválidos (hasta el umbral).
pub const MSG_UNSUCCESSFUL: &str = "Unsuccessful";
/// Mensaje a partir del intento inválido que supera el umbral.
pub const MSG_TOO_MANY_ATTEMPTS: &str = "Too Many Attempts";

/// Número de intentos inválidos que todavía producen `MSG_UNSUCCESSFUL`.
/// El siguiente dispara el bloqueo permanente.
pub const DEFAULT_MAX_UNSUCCESSFUL_ATTEMPTS: u32 = 2;

/// Patrón por defecto para emails: parte local, `@`, una etiqueta de dominio
/// y al menos una etiqueta adicional separada por `.`. Sensible a mayúsculas.
pub const DEFAULT_EMAIL_PATTERN: &str =
    r"[A-Za-z0-9+._%-]{1,256}@[A-Za-z0-9][A-Za-z0-9-]{0,64}(?:\.[A-Za-z0-9][A-Za-z0-9-]{0,25})+";
