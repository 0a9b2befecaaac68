//! Engine module for FormEngine implementation
//!
//! Provides the core engine, its builder, the input/output ports and a
//! mutex-guarded handle for multi-threaded hosts.

pub mod builder;
pub mod core;
pub mod ports;
pub mod shared;

pub use builder::FormEngineBuilder;
pub use self::core::FormEngine;
pub use ports::{FormInputs, FormOutputs};
pub use shared::SharedFormEngine;

pub use crate::event::{EventStore, FormEvent, FormEventKind, InMemoryEventStore};
pub use crate::machine::{Emission, FormInput, ValidationPolicy};
