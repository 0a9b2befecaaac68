//! signupflow
//!
//! Este crate agrupa los escenarios canónicos del formulario de registro:
//! - Expone `scenarios` con secuencias de entrada con nombre.
//! - `run_scenario` las ejecuta contra un `FormEngine` y devuelve lo que
//!   observaron las dos señales.
//!
//! Lo usa `main.rs` (binario `signup-demo`) y sus tests de integración.

pub mod scenarios;

pub use scenarios::{all_scenarios, run_scenario, Scenario, ScenarioReport};
