//! signup-core: motor de validación reactiva de un formulario de registro.
//!
//! Deriva dos señales para la UI (texto de alerta y habilitación del botón de
//! submit) a partir de los eventos de entrada del usuario. Ver `machine` para
//! las reglas de transición.
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod machine;
pub mod model;
pub mod recorder;
pub mod replay;
pub mod signal;
pub mod validation;

pub use config::EngineConfig;
pub use engine::{FormEngine, FormEngineBuilder, FormInputs, FormOutputs, SharedFormEngine};
pub use errors::CoreEngineError;
pub use event::{EventStore, FormEvent, FormEventKind, InMemoryEventStore};
pub use machine::{Emission, FormInput, FormState, ValidationPolicy};
pub use model::{AlertMessage, AttemptOutcome, Field, FieldState, FormSnapshot};
pub use recorder::Recorder;
pub use replay::{replay, FormInstance};
pub use signal::{Signal, SignalEvent, SignalSender, Subscription};
pub use validation::{is_present, is_valid, EmailMatchMode, EmailValidator, RegexEmailValidator};
