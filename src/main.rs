//! Interactive to-do list.
//!
//! Loads the task file on startup, runs the menu on stdin/stdout and saves
//! the list when the user exits.

use task_list::{config::Config, session::Session};

fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("Using tasks file {}", config.tasks_file.display());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::open(&config, stdin.lock(), stdout.lock())?;
    session.run()
}
