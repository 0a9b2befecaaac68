//! `Recorder`: observador que guarda todos los eventos de una señal para
//! poder hacer aserciones sobre su comportamiento.
//!
//! ```ignore
//! let enabled = Recorder::attach(engine.submit_button_enabled());
//! engine.on_view_loaded();
//! enabled.assert_values(&[false]);
//! ```

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use crate::signal::{lock, Signal, SignalEvent, Subscription};

pub struct Recorder<T> {
    events: Arc<Mutex<Vec<SignalEvent<T>>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self { events: self.events.clone() }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self { events: Arc::new(Mutex::new(Vec::new())) }
    }
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea un recorder ya suscrito a `signal`.
    pub fn attach(signal: &Signal<T>) -> Self {
        let recorder = Self::new();
        recorder.observe(signal);
        recorder
    }

    /// Suscribe este recorder a `signal`; devuelve la suscripción por si se
    /// quiere cancelar después.
    pub fn observe(&self, signal: &Signal<T>) -> Subscription {
        signal.observe(self.observer())
    }

    /// Función observadora que añade cada evento, en orden.
    pub fn observer(&self) -> impl FnMut(&SignalEvent<T>) + Send + 'static {
        let events = self.events.clone();
        move |event: &SignalEvent<T>| lock(&events).push(event.clone())
    }

    pub fn events(&self) -> Vec<SignalEvent<T>> {
        lock(&self.events).clone()
    }

    /// Todos los valores emitidos.
    pub fn values(&self) -> Vec<T> {
        lock(&self.events).iter().filter_map(|e| e.value().cloned()).collect()
    }

    pub fn value_count(&self) -> usize {
        lock(&self.events).iter().filter(|e| e.value().is_some()).count()
    }

    /// Último valor emitido.
    pub fn last_value(&self) -> Option<T> {
        lock(&self.events).iter().rev().find_map(|e| e.value().cloned())
    }

    /// `true` si se emitió al menos un valor.
    pub fn did_emit_value(&self) -> bool {
        self.value_count() > 0
    }

    /// `true` si la señal completó.
    pub fn did_complete(&self) -> bool {
        lock(&self.events).iter().any(SignalEvent::is_completed)
    }

    #[track_caller]
    pub fn assert_values<U>(&self, expected: &[U])
        where T: PartialEq<U> + Debug,
              U: Debug
    {
        let values = self.values();
        let same = values.len() == expected.len() && values.iter().zip(expected).all(|(a, b)| a == b);
        assert!(same, "expected values {:?}, found {:?}", expected, values);
    }

    #[track_caller]
    pub fn assert_value_count(&self, count: usize) {
        assert_eq!(self.value_count(), count, "should have emitted {count} values");
    }

    #[track_caller]
    pub fn assert_last_value<U>(&self, expected: U)
        where T: PartialEq<U> + Debug,
              U: Debug
    {
        let last = self.last_value();
        assert!(last.as_ref().is_some_and(|v| *v == expected),
                "last emitted value should be {:?}, found {:?}",
                expected,
                last);
    }

    #[track_caller]
    pub fn assert_did_emit_value(&self) {
        assert!(self.did_emit_value(), "should have emitted at least one value");
    }

    #[track_caller]
    pub fn assert_did_not_emit_value(&self) {
        assert_eq!(self.value_count(), 0, "should not have emitted any values");
    }

    #[track_caller]
    pub fn assert_did_complete(&self) {
        assert!(self.did_complete(), "should have completed");
    }

    #[track_caller]
    pub fn assert_did_not_complete(&self) {
        assert!(!self.did_complete(), "should not have completed");
    }
}
