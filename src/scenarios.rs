use serde::Serialize;
use signup_core::{CoreEngineError, EngineConfig, Field, FormEngine, FormInput, FormOutputs, Recorder};

/// Secuencia de entradas con nombre.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: Vec<FormInput>,
}

/// Lo que observaron las señales al ejecutar un escenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub alert_message: Vec<String>,
    pub submit_button_enabled: Vec<bool>,
    pub enabled_completed: bool,
    pub attempt_count: u32,
    pub locked_out: bool,
}

fn set(field: Field, value: &str) -> FormInput {
    FormInput::FieldChanged { field,
                              value: Some(value.to_string()) }
}

fn signup(name: &str, email: &str, password: &str) -> Vec<FormInput> {
    vec![FormInput::ViewLoaded,
         set(Field::Name, name),
         set(Field::Email, email),
         set(Field::Password, password)]
}

pub fn all_scenarios() -> Vec<Scenario> {
    let mut too_many = signup("Lisa", "lisa@rules", "password123");
    too_many.extend([FormInput::SubmitPressed, FormInput::SubmitPressed, FormInput::SubmitPressed]);
    too_many.push(set(Field::Email, "lisa@rules.com"));

    let mut successful = signup("Lisa", "lisa@rules.com", "password123");
    successful.push(FormInput::SubmitPressed);

    let mut unsuccessful = signup("Lisa", "lisa@rules", "password123");
    unsuccessful.push(FormInput::SubmitPressed);

    vec![Scenario { name: "submit-button-enabled",
                    description: "el botón sólo se habilita con los tres campos presentes",
                    steps: vec![FormInput::ViewLoaded,
                                set(Field::Name, "Chris"),
                                set(Field::Email, "chris@gmail.com"),
                                set(Field::Password, "secret123"),
                                set(Field::Name, "")] },
         Scenario { name: "successful-signup",
                    description: "datos válidos => Successful",
                    steps: successful },
         Scenario { name: "unsuccessful-signup",
                    description: "email sin TLD => Unsuccessful",
                    steps: unsuccessful },
         Scenario { name: "too-many-attempts",
                    description: "tres intentos inválidos bloquean el botón para siempre",
                    steps: too_many },]
}

/// Ejecuta `scenario` sobre un engine nuevo construido con `config`.
pub fn run_scenario(scenario: &Scenario, config: &EngineConfig) -> Result<ScenarioReport, CoreEngineError> {
    let mut engine = FormEngine::from_config(config)?;
    let alerts = Recorder::attach(engine.alert_message());
    let enabled = Recorder::attach(engine.submit_button_enabled());
    for step in &scenario.steps {
        engine.handle(step.clone());
    }
    Ok(ScenarioReport { scenario: scenario.name.to_string(),
                        alert_message: alerts.values(),
                        submit_button_enabled: enabled.values(),
                        enabled_completed: enabled.did_complete(),
                        attempt_count: engine.attempt_count(),
                        locked_out: engine.is_locked_out() })
}
