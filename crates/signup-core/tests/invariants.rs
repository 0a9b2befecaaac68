//! Invariantes sobre todas las secuencias cortas de entradas.

use signup_core::{Field, FormEngine, FormInput, FormOutputs, Recorder, SignalEvent};

fn alphabet() -> Vec<FormInput> {
    let set = |field, value: Option<&str>| FormInput::FieldChanged { field,
                                                                   value: value.map(str::to_owned) };
    vec![FormInput::ViewLoaded,
         FormInput::SubmitPressed,
         set(Field::Name, Some("x")),
         set(Field::Name, Some("")),
         set(Field::Email, Some("a@b.co")),
         set(Field::Password, Some("p"))]
}

fn sequences(len: usize) -> Vec<Vec<FormInput>> {
    let letters = alphabet();
    let mut out: Vec<Vec<FormInput>> = vec![vec![]];
    for _ in 0..len {
        out = out.into_iter()
                 .flat_map(|prefix| {
                     letters.iter().map(move |l| {
                                       let mut next = prefix.clone();
                                       next.push(l.clone());
                                       next
                                   })
                 })
                 .collect();
    }
    out
}

#[test]
fn enabled_signal_never_emits_after_completion_and_counter_is_monotonic() {
    for seq in sequences(5) {
        let mut engine = FormEngine::builder().journal(false).build().unwrap();
        let enabled = Recorder::attach(engine.submit_button_enabled());
        let mut last_count = 0;
        for input in &seq {
            engine.handle(input.clone());
            assert!(engine.attempt_count() >= last_count);
            last_count = engine.attempt_count();
        }

        let events = enabled.events();
        if let Some(done) = events.iter().position(SignalEvent::is_completed) {
            assert_eq!(done, events.len() - 1, "emission after completion in {seq:?}");
            assert_eq!(events[done - 1], SignalEvent::Value(false));
            assert!(engine.is_locked_out());
        } else {
            assert!(!engine.is_locked_out());
        }

        let submits = seq.iter().filter(|i| **i == FormInput::SubmitPressed).count();
        assert!(engine.attempt_count() as usize <= submits);
    }
}

#[test]
fn first_enabled_value_after_view_loaded_is_false() {
    for seq in sequences(4) {
        let mut engine = FormEngine::builder().journal(false).build().unwrap();
        for input in &seq {
            engine.handle(input.clone());
        }
        let enabled = Recorder::attach(engine.submit_button_enabled());
        engine.handle(FormInput::ViewLoaded);
        if engine.is_locked_out() {
            enabled.assert_did_not_emit_value();
        } else {
            enabled.assert_values(&[false]);
        }
    }
}

#[test]
fn replay_is_consistent_for_every_short_history() {
    for seq in sequences(4) {
        let mut engine = FormEngine::new();
        for input in &seq {
            engine.handle(input.clone());
        }
        assert!(engine.replay_journal().is_consistent(), "inconsistent replay for {seq:?}");
    }
}
