//! Capa de presentación mínima para `signup-core` guiada por scripts.
//!
//! Cada línea del script es un comando:
//!
//! ```text
//! load                 # vista cargada
//! name Lisa            # cambio de nombre (sin texto => cadena vacía)
//! email lisa@rules.com
//! password secret
//! clear email          # el campo pasa a ausente
//! submit
//! ```
//!
//! Las líneas vacías y las que empiezan por `#` se ignoran.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use signup_core::{CoreEngineError, Field, FormEngine, FormInput, FormOutputs, SignalEvent};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("usage: {0}")]
    Usage(String),
    #[error(transparent)]
    Engine(#[from] CoreEngineError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Código de salida del proceso.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Parse { .. } => 4,
            _ => 5,
        }
    }
}

/// Interpreta una línea del script. `Ok(None)` para líneas sin comando.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<FormInput>, CliError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };
    let parse_err = |message: String| CliError::Parse { line: line_no, message };
    let input = match cmd.to_ascii_lowercase().as_str() {
        "load" => FormInput::ViewLoaded,
        "submit" => FormInput::SubmitPressed,
        "name" | "email" | "password" => {
            let field: Field = cmd.parse().map_err(parse_err)?;
            FormInput::FieldChanged { field,
                                      value: Some(rest.to_string()) }
        }
        "clear" => {
            let field: Field = rest.parse().map_err(parse_err)?;
            FormInput::FieldChanged { field, value: None }
        }
        other => return Err(parse_err(format!("unknown command `{other}`"))),
    };
    Ok(Some(input))
}

/// Línea de salida: una emisión de una de las dos señales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum OutputLine {
    Alert { value: String },
    Enabled { value: bool },
    EnabledCompleted,
}

/// Ejecuta el script contra `engine` escribiendo cada emisión como JSON.
pub fn run_script<R, W>(engine: &mut FormEngine, reader: R, out: &mut W) -> Result<(), CliError>
    where R: BufRead,
          W: Write
{
    let pending: Arc<Mutex<Vec<OutputLine>>> = Arc::new(Mutex::new(Vec::new()));
    let alerts = pending.clone();
    let alert_sub = engine.alert_message().observe_values(move |v: &String| {
                                              push(&alerts, OutputLine::Alert { value: v.clone() });
                                          });
    let enabled = pending.clone();
    let enabled_sub = engine.submit_button_enabled().observe(move |e: &SignalEvent<bool>| {
                                                        let line = match e {
                                                            SignalEvent::Value(v) => OutputLine::Enabled { value: *v },
                                                            SignalEvent::Completed => OutputLine::EnabledCompleted,
                                                        };
                                                        push(&enabled, line);
                                                    });

    let result = drive(engine, reader, out, &pending);
    alert_sub.dispose();
    enabled_sub.dispose();
    result
}

fn drive<R, W>(engine: &mut FormEngine, reader: R, out: &mut W, pending: &Mutex<Vec<OutputLine>>) -> Result<(), CliError>
    where R: BufRead,
          W: Write
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(input) = parse_line(idx + 1, &line)? {
            engine.handle(input);
        }
        let drained: Vec<OutputLine> = std::mem::take(&mut *lock(pending));
        for out_line in drained {
            writeln!(out, "{}", serde_json::to_string(&out_line)?)?;
        }
    }
    Ok(())
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn push(sink: &Mutex<Vec<OutputLine>>, line: OutputLine) {
    lock(sink).push(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line(1, "load").unwrap(), Some(FormInput::ViewLoaded));
        assert_eq!(parse_line(1, "  SUBMIT ").unwrap(), Some(FormInput::SubmitPressed));
        assert_eq!(parse_line(1, "name Lisa Simpson").unwrap(),
                   Some(FormInput::FieldChanged { field: Field::Name,
                                                  value: Some("Lisa Simpson".into()) }));
        assert_eq!(parse_line(1, "email").unwrap(),
                   Some(FormInput::FieldChanged { field: Field::Email,
                                                  value: Some(String::new()) }));
        assert_eq!(parse_line(1, "clear password").unwrap(),
                   Some(FormInput::FieldChanged { field: Field::Password, value: None }));
        assert_eq!(parse_line(1, "# comment").unwrap(), None);
        assert_eq!(parse_line(1, "").unwrap(), None);
    }

    #[test]
    fn rejects_unknown_commands_with_line_number() {
        let err = parse_line(7, "reset").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 7, .. }));
        assert_eq!(err.exit_code(), 4);
        assert!(parse_line(2, "clear phone").is_err());
    }
}
