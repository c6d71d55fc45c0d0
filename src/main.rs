use std::env;

use linksnip::config;
use linksnip::runtime::modes::{self, Mode};
use linksnip::system::logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // -c/--config 先摘出来，模式检测只看剩下的参数
    let raw_args: Vec<String> = env::args().collect();
    let (config_path, args) = config::args::extract_config_path(&raw_args);

    match config_path {
        Some(ref path) => config::init_config_from(path),
        None => config::init_config(),
    }
    let app_config = config::get_config();

    let mode = modes::detect_mode(&args);

    // TUI 模式独占终端，日志绝不能落到 stdout
    let _guard = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => logging::init_tui_logging(&app_config),
        _ => logging::init_logging(&app_config),
    };

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(err) = modes::run_tui().await {
                eprintln!("TUI error: {}", err);
                std::process::exit(1);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            if let Err(err) = modes::run_cli().await {
                eprintln!("{}", err.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!("No execution mode available. Rebuild with the cli or tui feature.");
            std::process::exit(1);
        }
    }
}
