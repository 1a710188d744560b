use clap::Parser;

use read_beyond::app::ReadBeyondApp;
use read_beyond::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("[MAIN] Starting Read Beyond");
    log::debug!("[MAIN] Configuration: {:?}", cli.config);

    let app = ReadBeyondApp::build(cli.config);

    if cli.command.is_remote() {
        app.print_banner();
    }

    if let Err(error) = app.run(cli.command).await {
        log::error!("[MAIN] Command failed: {:#}", error);
        std::process::exit(1);
    }
}
