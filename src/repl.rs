//! Terminal chat loop — stdin in, rendered events out.
//!
//! Each turn is awaited to completion before the next prompt appears, so
//! one submission can never overlap another.

use futures::{Stream, StreamExt, stream};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::ReplyFormatter;
use crate::session::{ChatEvent, ChatSession};

/// Run the chat loop until EOF or a quit command.
pub async fn run(session: &mut ChatSession) -> anyhow::Result<()> {
    let formatter = ReplyFormatter::new();
    let mut input = Box::pin(input_stream());

    eprint!("> ");
    while let Some(line) = input.next().await {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "/quit" | "/exit" => break,
            "/restart" => {
                session.reset();
                println!("\nStarting over. Describe a new project whenever you're ready.\n");
            }
            _ => {
                if !trimmed.is_empty() {
                    eprintln!("⏳ The crew is thinking...");
                }
                for event in session.submit(&line).await {
                    render_event(&formatter, &event);
                }
            }
        }
        eprint!("> ");
    }

    eprintln!("\nBye.");
    Ok(())
}

fn render_event(formatter: &ReplyFormatter, event: &ChatEvent) {
    match event {
        ChatEvent::Result(text) => println!("\n{}\n", formatter.format(text)),
        ChatEvent::Prompt(text) => println!("➜ {text}\n"),
        ChatEvent::Guidance(text) | ChatEvent::Failure(text) => println!("\n{text}\n"),
    }
}

/// Lines from stdin as an async stream, ending at EOF.
fn input_stream() -> impl Stream<Item = String> {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    tokio::spawn(async move {
        let stdin = tokio::io::stdin();
        let reader = BufReader::new(stdin);
        let mut lines = reader.lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    tracing::error!("Error reading stdin: {e}");
                    break;
                }
            }
        }
    });

    stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|line| (line, rx)) })
}
