//! Journal de eventos del formulario y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{FormEvent, FormEventKind};
