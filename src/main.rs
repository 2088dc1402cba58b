//! Activity Board
//!
//! Terminal entry point. Reads commands from stdin and prints the board
//! after every change; logs go to stderr.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use activity_board::{
    config::Settings,
    handlers::{parse_command, Command, HELP_TEXT},
    runtime::EventSender,
    services::ApiClient,
    state::{BoardOptions, Event},
    utils::logging,
    view::{to_text, ViewNode},
    Dispatcher,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on drop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", activity_board::info());
    info!(base_url = %settings.api.base_url, "Using activities service");

    let api = ApiClient::new(&settings.api)?;
    let dispatcher = Dispatcher::new(api, BoardOptions::from(&settings.client));

    tokio::spawn(read_commands(dispatcher.sender()));

    println!("{}", HELP_TEXT);
    let final_state = dispatcher
        .run(|view: &ViewNode| {
            println!("\n{}", "-".repeat(60));
            println!("{}", to_text(view));
        })
        .await;

    info!(session = final_state.session.label(), "Activity board has been shut down.");
    Ok(())
}

/// Forward stdin lines to the board until EOF or `quit`
async fn read_commands(sender: EventSender) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed to read from stdin");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(command) => {
                for event in command.into_events() {
                    if !sender.send(event) {
                        return;
                    }
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    sender.send(Event::Shutdown);
}
