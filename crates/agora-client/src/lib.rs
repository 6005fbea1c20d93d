pub mod commands;
pub mod composer;
pub mod config;
pub mod events;
pub mod feed;
pub mod host;
pub mod post_card;
pub mod render;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{dispatch, Command, Outcome};
use crate::config::ClientConfig;
use crate::host::MemoryHost;
use crate::render::render_text;
use crate::state::AppState;

/// Run the interactive feed shell on stdin/stdout until `quit` or EOF.
pub async fn run() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agora_client_lib=debug,agora_shared=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Starting Agora feed shell");

    let mut host = MemoryHost::new(config.page_url.clone());
    let mut state = AppState::new(config);

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{}\n{}\n", render_text(&state.page()), commands::HELP).as_bytes())
        .await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                stdout.write_all(format!("{e}\n").as_bytes()).await?;
                continue;
            }
        };

        let result = dispatch(&mut state, &mut host, cmd).await;

        let mut out = String::new();
        let toasts = host.drain_toasts();
        for toast in &toasts {
            out.push_str(&format!("{toast}\n"));
        }
        match result {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) if !text.is_empty() => {
                out.push_str(&text);
                out.push('\n');
            }
            Ok(Outcome::Output(_)) => {}
            // rejected input already surfaced as a toast
            Err(_) if !toasts.is_empty() => {}
            Err(e) => out.push_str(&format!("error: {e}\n")),
        }
        host.drain_opened();

        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("Feed shell closed");
    Ok(())
}
