//! Core FormEngine implementation

use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::engine::{FormEngineBuilder, FormInputs, FormOutputs};
use crate::errors::CoreEngineError;
use crate::event::{EventStore, FormEvent, FormEventKind, InMemoryEventStore};
use crate::machine::{Emission, FormInput, FormState, ValidationPolicy};
use crate::model::{Field, FieldState, FormSnapshot};
use crate::replay::{replay, FormInstance};
use crate::signal::{Signal, SignalSender};

/// Motor de validación de un formulario de registro.
///
/// Recibe eventos de entrada, aplica la máquina de estados y entrega las
/// emisiones resultantes a las señales `alert_message` y
/// `submit_button_enabled` antes de aceptar el siguiente evento.
#[derive(Debug)]
pub struct FormEngine<E = InMemoryEventStore>
    where E: EventStore
{
    form_id: Uuid,
    state: FormState,
    policy: ValidationPolicy,
    alert_message: Signal<String>,
    alert_sender: SignalSender<String>,
    submit_button_enabled: Signal<bool>,
    enabled_sender: SignalSender<bool>,
    event_store: E,
    journal: bool,
    redact_passwords: bool,
}

impl FormEngine<InMemoryEventStore> {
    /// Engine con política por defecto y journal en memoria.
    pub fn new() -> Self {
        Self::with_parts(Uuid::new_v4(), ValidationPolicy::default(), InMemoryEventStore::default(), true, true)
    }

    /// Crea un nuevo builder para configurar el engine
    #[inline]
    pub fn builder() -> FormEngineBuilder<InMemoryEventStore> {
        FormEngineBuilder::new()
    }

    /// Construye el engine a partir de una configuración ya cargada.
    pub fn from_config(config: &EngineConfig) -> Result<Self, CoreEngineError> {
        FormEngineBuilder::new().config(config).build()
    }
}

impl Default for FormEngine<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FormEngine<E> where E: EventStore
{
    pub(crate) fn with_parts(form_id: Uuid,
                             policy: ValidationPolicy,
                             event_store: E,
                             journal: bool,
                             redact_passwords: bool)
                             -> Self {
        let (alert_message, alert_sender) = Signal::pipe();
        let (submit_button_enabled, enabled_sender) = Signal::pipe();
        Self { form_id,
               state: FormState::new(),
               policy,
               alert_message,
               alert_sender,
               submit_button_enabled,
               enabled_sender,
               event_store,
               journal,
               redact_passwords }
    }

    pub fn form_id(&self) -> Uuid {
        self.form_id
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Intentos inválidos acumulados desde la construcción.
    pub fn attempt_count(&self) -> u32 {
        self.state.attempts.get()
    }

    pub fn is_locked_out(&self) -> bool {
        self.state.is_locked_out()
    }

    pub fn field_state(&self) -> &FieldState {
        &self.state.fields
    }

    /// Valores actuales (campos nunca emitidos quedan ausentes).
    pub fn snapshot(&self) -> FormSnapshot {
        self.state.fields.snapshot()
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Eventos registrados para este formulario.
    pub fn events(&self) -> Vec<FormEvent> {
        self.event_store.list(self.form_id)
    }

    /// Reconstruye el estado desde el journal con la política actual.
    pub fn replay_journal(&self) -> FormInstance {
        replay(self.form_id, &self.events(), &self.policy)
    }

    /// Aplica una entrada y entrega sus emisiones de forma síncrona.
    pub fn handle(&mut self, input: FormInput) {
        debug!("[form {}] input {:?}", self.form_id, self.loggable(&input));
        let kind = self.journal_kind(&input);
        self.record(kind);

        let transition = self.state.apply(&input, &self.policy);
        if let Some(attempt) = transition.attempt {
            info!("[form {}] attempt {:?} (invalid so far: {})",
                  self.form_id, attempt.outcome, attempt.attempt_count);
            self.record(FormEventKind::AttemptClassified { outcome: attempt.outcome,
                                                           attempt_count: attempt.attempt_count });
            if attempt.engaged_lockout {
                warn!("[form {}] lockout engaged after {} invalid attempts", self.form_id, attempt.attempt_count);
                self.record(FormEventKind::LockoutEngaged { attempt_count: attempt.attempt_count });
            }
        }
        for emission in transition.emissions {
            self.emit(emission);
        }
    }

    fn emit(&mut self, emission: Emission) {
        self.record(emission.into());
        match emission {
            Emission::Alert(message) => self.alert_sender.send_value(message.as_str().to_string()),
            Emission::Enabled(enabled) => self.enabled_sender.send_value(enabled),
            Emission::EnabledCompleted => self.enabled_sender.send_completed(),
        }
    }

    fn record(&mut self, kind: FormEventKind) {
        if self.journal {
            self.event_store.append_kind(self.form_id, kind);
        }
    }

    fn journal_kind(&self, input: &FormInput) -> FormEventKind {
        match input {
            FormInput::ViewLoaded => FormEventKind::ViewLoaded,
            FormInput::SubmitPressed => FormEventKind::SubmitPressed,
            FormInput::FieldChanged { field, value } => {
                let value = match field {
                    Field::Password if self.redact_passwords => value.as_deref().map(mask),
                    _ => value.clone(),
                };
                FormEventKind::FieldChanged { field: *field, value }
            }
        }
    }

    // nunca volcar passwords en claro a los logs
    fn loggable(&self, input: &FormInput) -> FormInput {
        match input {
            FormInput::FieldChanged { field: Field::Password, value } => {
                FormInput::FieldChanged { field: Field::Password,
                                          value: value.as_deref().map(mask) }
            }
            other => other.clone(),
        }
    }

    fn field_changed(&mut self, field: Field, value: Option<&str>) {
        self.handle(FormInput::FieldChanged { field,
                                              value: value.map(str::to_owned) });
    }
}

/// Enmascara conservando la cantidad de caracteres (y por tanto la presencia).
fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

impl<E> FormInputs for FormEngine<E> where E: EventStore
{
    fn on_name_changed(&mut self, name: Option<&str>) {
        self.field_changed(Field::Name, name);
    }

    fn on_email_changed(&mut self, email: Option<&str>) {
        self.field_changed(Field::Email, email);
    }

    fn on_password_changed(&mut self, password: Option<&str>) {
        self.field_changed(Field::Password, password);
    }

    fn on_submit_pressed(&mut self) {
        self.handle(FormInput::SubmitPressed);
    }

    fn on_view_loaded(&mut self) {
        self.handle(FormInput::ViewLoaded);
    }
}

impl<E> FormOutputs for FormEngine<E> where E: EventStore
{
    fn alert_message(&self) -> &Signal<String> {
        &self.alert_message
    }

    fn submit_button_enabled(&self) -> &Signal<bool> {
        &self.submit_button_enabled
    }
}
