use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{FormEvent, FormEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, form_id: Uuid, kind: FormEventKind) -> FormEvent;
    /// Lista eventos de un formulario (orden ascendente por seq).
    fn list(&self, form_id: Uuid) -> Vec<FormEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<FormEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, form_id: Uuid, kind: FormEventKind) -> FormEvent {
        let vec = self.inner.entry(form_id).or_default();
        let seq = vec.len() as u64;
        let ev = FormEvent { seq, form_id, kind, ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, form_id: Uuid) -> Vec<FormEvent> {
        self.inner.get(&form_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_form_and_ascending() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(store.append_kind(a, FormEventKind::ViewLoaded).seq, 0);
        assert_eq!(store.append_kind(a, FormEventKind::SubmitPressed).seq, 1);
        assert_eq!(store.append_kind(b, FormEventKind::ViewLoaded).seq, 0);
        let listed: Vec<u64> = store.list(a).iter().map(|e| e.seq).collect();
        assert_eq!(listed, vec![0, 1]);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
