use std::sync::Arc;

use anyhow::Context;

use crew_chat::api::CrewClient;
use crew_chat::config::CrewConfig;
use crew_chat::repl;
use crew_chat::session::ChatSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Keep the guard alive or the file writer flushes nothing
    let _log_guard = init_tracing()?;

    let config = CrewConfig::from_env().context("invalid configuration")?;

    eprintln!("🛠️  Crew Chat v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Server: {}", config.base_url);
    eprintln!("   Describe a project to kick off the crew (e.g. \"Build me a drone\").");
    eprintln!("   /restart starts over, /quit exits.\n");

    let client = CrewClient::new(&config).context("failed to build the crew client")?;
    let mut session = ChatSession::new(Arc::new(client));

    repl::run(&mut session).await
}

/// Initialize tracing: stderr by default, or a file when
/// `CREW_CHAT_LOG_FILE` is set so diagnostics stay out of the chat.
fn init_tracing() -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    match std::env::var("CREW_CHAT_LOG_FILE") {
        Ok(path) => {
            let path = std::path::PathBuf::from(path);
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => std::path::Path::new("."),
            };
            let file = path
                .file_name()
                .context("CREW_CHAT_LOG_FILE has no file name")?;

            let (writer, guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::never(dir, file),
            );
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
