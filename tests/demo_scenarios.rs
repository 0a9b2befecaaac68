use signup_core::EngineConfig;
use signupflow::{all_scenarios, run_scenario, ScenarioReport};

fn report(name: &str) -> ScenarioReport {
    let scenario = all_scenarios().into_iter().find(|s| s.name == name).expect("scenario exists");
    run_scenario(&scenario, &EngineConfig::default()).expect("default config builds")
}

#[test]
fn submit_button_enabled_scenario() {
    let r = report("submit-button-enabled");
    assert_eq!(r.submit_button_enabled, vec![false, true, false]);
    assert!(r.alert_message.is_empty());
    assert!(!r.enabled_completed);
}

#[test]
fn successful_and_unsuccessful_scenarios() {
    assert_eq!(report("successful-signup").alert_message, vec!["Successful"]);
    assert_eq!(report("unsuccessful-signup").alert_message, vec!["Unsuccessful"]);
}

#[test]
fn too_many_attempts_scenario() {
    let r = report("too-many-attempts");
    assert_eq!(r.alert_message, vec!["Unsuccessful", "Unsuccessful", "Too Many Attempts"]);
    assert_eq!(r.submit_button_enabled, vec![false, true, false]);
    assert!(r.enabled_completed);
    assert!(r.locked_out);
    assert_eq!(r.attempt_count, 3);
}

#[test]
fn higher_threshold_delays_lockout() {
    let scenario = all_scenarios().into_iter().find(|s| s.name == "too-many-attempts").unwrap();
    let config = EngineConfig { max_unsuccessful_attempts: 3,
                                ..EngineConfig::default() };
    let r = run_scenario(&scenario, &config).unwrap();
    assert_eq!(r.alert_message, vec!["Unsuccessful"; 3]);
    // sin bloqueo el último cambio de email vuelve a emitir presencia
    assert_eq!(r.submit_button_enabled, vec![false, true, true]);
    assert!(!r.locked_out);
}

#[test]
fn invalid_pattern_is_reported() {
    let scenario = all_scenarios().remove(0);
    let config = EngineConfig { email_pattern: "(unclosed".into(),
                                ..EngineConfig::default() };
    assert!(run_scenario(&scenario, &config).is_err());
}
