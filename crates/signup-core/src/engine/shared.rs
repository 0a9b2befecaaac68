//! Handle compartido para hosts multi-hilo.
//!
//! Serializa la entrega de eventos con un `Mutex` alrededor del engine
//! completo (campos, contador y latch): cada evento se procesa entero,
//! emisiones incluidas, antes de aceptar el siguiente. Los observadores se
//! invocan con el lock tomado, por lo que no deben alimentar entradas al
//! mismo engine de forma síncrona.

use std::sync::{Arc, Mutex};

use crate::engine::{FormEngine, FormInputs, FormOutputs};
use crate::event::{EventStore, InMemoryEventStore};
use crate::machine::FormInput;
use crate::model::Field;
use crate::signal::{lock, Signal};

pub struct SharedFormEngine<E: EventStore = InMemoryEventStore> {
    inner: Arc<Mutex<FormEngine<E>>>,
    alert_message: Signal<String>,
    submit_button_enabled: Signal<bool>,
}

impl<E: EventStore> SharedFormEngine<E> {
    pub fn new(engine: FormEngine<E>) -> Self {
        let alert_message = engine.alert_message().clone();
        let submit_button_enabled = engine.submit_button_enabled().clone();
        Self { inner: Arc::new(Mutex::new(engine)),
               alert_message,
               submit_button_enabled }
    }

    pub fn handle(&self, input: FormInput) {
        lock(&self.inner).handle(input);
    }

    /// Acceso exclusivo al engine mientras dura `f`.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut FormEngine<E>) -> R) -> R {
        let mut engine = lock(&self.inner);
        f(&mut engine)
    }

    fn field_changed(&self, field: Field, value: Option<&str>) {
        self.handle(FormInput::FieldChanged { field,
                                              value: value.map(str::to_owned) });
    }
}

impl<E: EventStore> Clone for SharedFormEngine<E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(),
               alert_message: self.alert_message.clone(),
               submit_button_enabled: self.submit_button_enabled.clone() }
    }
}

impl<E: EventStore> FormInputs for SharedFormEngine<E> {
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

impl<E: EventStore> FormOutputs for SharedFormEngine<E> {
    fn alert_message(&self) -> &Signal<String> {
        &self.alert_message
    }

    fn submit_button_enabled(&self) -> &Signal<bool> {
        &self.submit_button_enabled
    }
}
