use std::fs::File;
use std::io::{self, BufReader, Write};

use signup_cli::{run_script, CliError};
use signup_core::{EngineConfig, FormEngine};

fn main() {
    // Cargar .env si existe para obtener la configuración SIGNUP_*
    signup_core::config::init_dotenv();
    env_logger::Builder::from_default_env().init();

    // CLI mínima: `signup-cli [--script <PATH>] [--journal]`
    if let Err(e) = run() {
        eprintln!("[signup-cli] {e}");
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().collect();
    let mut script: Option<String> = None;
    let mut journal = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--script" => {
                i += 1;
                script = Some(args.get(i)
                                  .cloned()
                                  .ok_or_else(|| CliError::Usage("--script requires a path".into()))?);
            }
            "--journal" => journal = true,
            "-h" | "--help" => {
                println!("uso: signup-cli [--script <PATH>] [--journal]");
                return Ok(());
            }
            other => return Err(CliError::Usage(format!("unknown argument `{other}`"))),
        }
        i += 1;
    }

    let config = EngineConfig::from_env()?;
    let mut engine = FormEngine::from_config(&config)?;
    log::info!("form {} (max unsuccessful attempts: {})",
               engine.form_id(),
               config.max_unsuccessful_attempts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match script {
        Some(path) => run_script(&mut engine, BufReader::new(File::open(path)?), &mut out)?,
        None => run_script(&mut engine, io::stdin().lock(), &mut out)?,
    }

    if journal {
        writeln!(out, "{}", serde_json::to_string_pretty(&engine.events())?)?;
    }
    Ok(())
}
