//! Señales broadcast "hot" sin replay.
//!
//! Un `Signal<T>` es el handle de observación (clonable); el
//! `SignalSender<T>` correspondiente es quien emite. Los observadores se
//! invocan en orden de registro. Un observador que se registra tarde sólo ve
//! lo que se emite después. Tras `Completed` la señal queda cerrada: no se
//! entregan más valores y un observador nuevo recibe `Completed` de inmediato.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Evento entregado a un observador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalEvent<T> {
    Value(T),
    Completed,
}

impl<T> SignalEvent<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            SignalEvent::Value(v) => Some(v),
            SignalEvent::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SignalEvent::Completed)
    }
}

type ObserverFn<T> = Arc<Mutex<dyn FnMut(&SignalEvent<T>) + Send>>;

struct SignalCore<T> {
    next_id: u64,
    observers: Vec<(u64, ObserverFn<T>)>,
    completed: bool,
}

/// Ignora el envenenamiento: ningún observador deja el estado a medias.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle de observación de una señal.
pub struct Signal<T> {
    core: Arc<Mutex<SignalCore<T>>>,
}

/// Extremo emisor de una señal.
pub struct SignalSender<T> {
    core: Arc<Mutex<SignalCore<T>>>,
}

impl<T: 'static> Signal<T> {
    /// Crea una señal nueva y su emisor.
    pub fn pipe() -> (Signal<T>, SignalSender<T>) {
        let core = Arc::new(Mutex::new(SignalCore { next_id: 0,
                                                    observers: Vec::new(),
                                                    completed: false }));
        (Signal { core: core.clone() }, SignalSender { core })
    }

    /// Registra un observador de eventos (valores y completado).
    pub fn observe<F>(&self, observer: F) -> Subscription
        where F: FnMut(&SignalEvent<T>) + Send + 'static
    {
        let mut core = lock(&self.core);
        if core.completed {
            drop(core);
            let mut observer = observer;
            observer(&SignalEvent::Completed);
            return Subscription::inert();
        }
        let id = core.next_id;
        core.next_id += 1;
        let observer: ObserverFn<T> = Arc::new(Mutex::new(observer));
        core.observers.push((id, observer));

        let weak: Weak<Mutex<SignalCore<T>>> = Arc::downgrade(&self.core);
        Subscription { detach: Some(Box::new(move || {
                           if let Some(core) = weak.upgrade() {
                               lock(&core).observers.retain(|(oid, _)| *oid != id);
                           }
                       })) }
    }

    /// Registra un observador sólo de valores.
    pub fn observe_values<F>(&self, mut observer: F) -> Subscription
        where F: FnMut(&T) + Send + 'static
    {
        self.observe(move |event| {
                if let SignalEvent::Value(v) = event {
                    observer(v);
                }
            })
    }

    pub fn observer_count(&self) -> usize {
        lock(&self.core).observers.len()
    }

    pub fn is_completed(&self) -> bool {
        lock(&self.core).completed
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self { core: self.core.clone() }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = lock(&self.core);
        f.debug_struct("Signal")
         .field("observers", &core.observers.len())
         .field("completed", &core.completed)
         .finish()
    }
}

impl<T: 'static> SignalSender<T> {
    /// Handle de observación asociado.
    pub fn signal(&self) -> Signal<T> {
        Signal { core: self.core.clone() }
    }

    /// Entrega un valor a los observadores registrados en este momento.
    /// No-op si la señal ya completó.
    pub fn send_value(&self, value: T) {
        self.dispatch(SignalEvent::Value(value));
    }

    /// Cierra la señal. Sólo la primera llamada tiene efecto.
    pub fn send_completed(&self) {
        self.dispatch(SignalEvent::Completed);
    }

    fn dispatch(&self, event: SignalEvent<T>) {
        let observers: Vec<ObserverFn<T>> = {
            let mut core = lock(&self.core);
            if core.completed {
                return;
            }
            if event.is_completed() {
                core.completed = true;
                std::mem::take(&mut core.observers).into_iter().map(|(_, o)| o).collect()
            } else {
                core.observers.iter().map(|(_, o)| o.clone()).collect()
            }
        };
        // sin el lock de la señal: un observador puede volver a suscribirse
        for observer in observers {
            let mut observer = lock(&observer);
            (&mut *observer)(&event);
        }
    }
}

impl<T> fmt::Debug for SignalSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalSender").finish_non_exhaustive()
    }
}

/// Registro de un observador. Soltarlo NO cancela la suscripción; hay que
/// llamar a `dispose`.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn inert() -> Self {
        Self { detach: None }
    }

    /// Desregistra el observador. Idempotente respecto a señales ya cerradas.
    pub fn dispose(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.detach.is_some()).finish()
    }
}
