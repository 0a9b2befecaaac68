//! Replay del journal: reconstruye el estado de un formulario a partir de
//! sus eventos.
//!
//! Sólo las entradas (`ViewLoaded`, `FieldChanged`, `SubmitPressed`) alteran
//! el estado; se aplican en orden de `seq` con la misma función de transición
//! que usa el engine en vivo. Las emisiones registradas se recogen aparte para
//! comparar.
use uuid::Uuid;

use crate::event::FormEvent;
use crate::machine::{Emission, FormState, ValidationPolicy};

/// Estado reconstruido de un formulario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInstance {
    pub form_id: Uuid,
    pub state: FormState,
    pub inputs_applied: usize,
    /// Emisiones re-derivadas por el replay.
    pub emissions: Vec<Emission>,
    /// Emisiones tal como quedaron en el journal.
    pub journaled_emissions: Vec<Emission>,
}

impl FormInstance {
    pub fn attempt_count(&self) -> u32 {
        self.state.attempts.get()
    }

    pub fn is_locked_out(&self) -> bool {
        self.state.is_locked_out()
    }

    /// `true` si el replay produce exactamente las emisiones registradas.
    pub fn is_consistent(&self) -> bool {
        self.emissions == self.journaled_emissions
    }
}

/// Reconstruye la instancia `form_id` aplicando sus eventos en orden.
/// Eventos de otros formularios se ignoran.
pub fn replay(form_id: Uuid, events: &[FormEvent], policy: &ValidationPolicy) -> FormInstance {
    let mut ordered: Vec<&FormEvent> = events.iter().filter(|e| e.form_id == form_id).collect();
    ordered.sort_by_key(|e| e.seq);

    let mut state = FormState::new();
    let mut inputs_applied = 0;
    let mut emissions = Vec::new();
    let mut journaled_emissions = Vec::new();
    for ev in ordered {
        if let Some(input) = ev.kind.input() {
            emissions.extend(state.apply(&input, policy).emissions);
            inputs_applied += 1;
        } else if let Some(emission) = ev.kind.emission() {
            journaled_emissions.push(emission);
        }
    }
    FormInstance { form_id,
                   state,
                   inputs_applied,
                   emissions,
                   journaled_emissions }
}
