use clap::Parser;
use color_eyre::eyre::Result;
use config::ConfigManager;
use directories::ProjectDirs;
use log::*;
use simplelog;
use std::{
    fs,
    sync::{mpsc::channel, Arc, Mutex},
    thread,
};

use ui::{app, events::manager::EventManager, store::Store};

mod config;
mod content;
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - Only prints startup diagnostics foregoing UI
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Use an alternate preferences file
    #[arg(short, long)]
    config: Option<String>,
}

fn initialize_logger(args: &Args) {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Off
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}

fn get_project_config_path() -> String {
    let project_dir = ProjectDirs::from("", "", "termfolio").unwrap();
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir).unwrap();
    config_dir.join("config.yml").to_str().unwrap().to_string()
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args);

    let config_path = args.config.clone().unwrap_or_else(get_project_config_path);
    let config_manager = Arc::new(Mutex::new(ConfigManager::new(&config_path)));
    let store = Arc::new(Store::new(config_manager));

    if args.debug {
        let state = store.get_state();
        info!("preferences file: {config_path}");
        info!("theme: {}", state.theme);
        info!("project count: {}", state.project_count);
        info!("true color support: {}", state.true_color_enabled);
        return Ok(());
    }

    let (tx, rx) = channel();
    let event_manager = EventManager::new(rx, Arc::clone(&store));
    let handle = thread::spawn(move || event_manager.start_event_loop());

    let application = app::create_app(tx, store)?;
    application.launch()?;

    handle.join().unwrap()
}
