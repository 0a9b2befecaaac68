use signup_core::{replay, Emission, EventStore, FormEngine, FormEventKind, FormInputs, InMemoryEventStore, ValidationPolicy};
use uuid::Uuid;

fn locked_out_engine(redact: bool) -> FormEngine {
    let mut engine = FormEngine::builder().redact_passwords(redact).build().expect("default build");
    engine.on_view_loaded();
    engine.on_name_changed(Some("Lisa"));
    engine.on_email_changed(Some("lisa@rules"));
    engine.on_password_changed(Some("password123"));
    engine.on_submit_pressed();
    engine.on_submit_pressed();
    engine.on_submit_pressed();
    engine.on_email_changed(Some("lisa@rules.com"));
    engine.on_submit_pressed();
    engine
}

#[test]
fn replay_reproduces_state_and_emissions() {
    let engine = locked_out_engine(false);
    let instance = engine.replay_journal();

    assert!(instance.is_consistent(), "replayed {:?} vs journaled {:?}", instance.emissions, instance.journaled_emissions);
    assert_eq!(instance.attempt_count(), engine.attempt_count());
    assert!(instance.is_locked_out());
    assert_eq!(instance.state.fields, *engine.field_state());
    assert_eq!(instance.inputs_applied, 9);
}

#[test]
fn redacted_journal_still_replays_consistently() {
    let engine = locked_out_engine(true);
    let instance = engine.replay_journal();
    assert!(instance.is_consistent());
    assert_eq!(instance.state.fields.snapshot().password(), Some("***********"));
    assert_eq!(instance.state.fields.snapshot().email(), Some("lisa@rules.com"));
}

#[test]
fn journal_orders_lockout_before_final_disable() {
    let engine = locked_out_engine(true);
    let kinds: Vec<FormEventKind> = engine.events().into_iter().map(|e| e.kind).collect();
    let lockout = kinds.iter().position(|k| matches!(k, FormEventKind::LockoutEngaged { attempt_count: 3 })).expect("lockout recorded");
    assert_eq!(&kinds[lockout + 1..lockout + 4],
               &[FormEventKind::AlertEmitted { message: signup_core::AlertMessage::TooManyAttempts },
                 FormEventKind::EnabledEmitted { enabled: false },
                 FormEventKind::EnabledCompleted]);
    assert_eq!(kinds.iter().filter(|k| matches!(k, FormEventKind::LockoutEngaged { .. })).count(), 1);
}

#[test]
fn replay_ignores_other_forms_and_sorts_by_seq() {
    let mut store = InMemoryEventStore::default();
    let form = Uuid::new_v4();
    let other = Uuid::new_v4();
    store.append_kind(other, FormEventKind::SubmitPressed);
    store.append_kind(form, FormEventKind::ViewLoaded);
    store.append_kind(form, FormEventKind::SubmitPressed);

    let mut events = store.list(form);
    events.extend(store.list(other));
    events.reverse();

    let instance = replay(form, &events, &ValidationPolicy::default());
    assert_eq!(instance.inputs_applied, 2);
    assert_eq!(instance.attempt_count(), 1);
    assert_eq!(instance.emissions,
               vec![Emission::Enabled(false), Emission::Alert(signup_core::AlertMessage::Unsuccessful)]);
    // no se registraron emisiones en esta store manual
    assert!(!instance.is_consistent());
}

#[test]
fn custom_store_receives_the_journal() {
    let store = InMemoryEventStore::default();
    let id = Uuid::new_v4();
    let mut engine = FormEngine::builder().event_store(store).form_id(id).build().unwrap();
    engine.on_view_loaded();
    assert_eq!(engine.event_store().list(id).len(), 2);
    assert_eq!(engine.events()[0].form_id, id);
}

#[test]
fn journal_serializes_to_json() {
    let engine = locked_out_engine(true);
    let json = serde_json::to_string(&engine.events()).expect("events serialize");
    assert!(json.contains("\"type\":\"lockout_engaged\""));
    assert!(!json.contains("password123"));
}
