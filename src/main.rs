use signupflow::{all_scenarios, run_scenario};
use signup_core::EngineConfig;

fn main() {
    // Cargar variables de entorno desde .env si existe (antes de leer SIGNUP_*)
    let _ = dotenvy::dotenv();
    env_logger::Builder::new().filter_level(log::LevelFilter::Info)
                              .parse_default_env()
                              .init();

    let config = match EngineConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[signup-demo] configuración inválida: {e}");
            std::process::exit(2);
        }
    };

    for scenario in all_scenarios() {
        println!("== {} ({})", scenario.name, scenario.description);
        match run_scenario(&scenario, &config) {
            Ok(report) => {
                println!("   alert_message         = {:?}", report.alert_message);
                println!("   submit_button_enabled = {:?}{}",
                         report.submit_button_enabled,
                         if report.enabled_completed { " (completed)" } else { "" });
                println!("   json: {}", serde_json::to_string(&report).unwrap_or_default());
            }
            Err(e) => {
                eprintln!("[signup-demo] {}: {e}", scenario.name);
                std::process::exit(5);
            }
        }
    }
}
