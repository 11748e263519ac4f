use futures::stream::{FuturesUnordered, StreamExt};
use mp3grab_core::core::events::StateEmitter;
use mp3grab_core::core::orchestrator::DownloadOrchestrator;
use mp3grab_core::core::state::{RequestSnapshot, Status};
use tokio::io::{AsyncBufReadExt, BufReader};

const BANNER: &str = "Paste a YouTube or SoundCloud URL and press Enter to get the audio.
Enter a URL while a download runs to cancel it. Commands: cancel, quit.";

pub fn status_message(status: Status) -> &'static str {
    match status {
        Status::Completed => "✅ The download is complete.",
        Status::InvalidUrl => "❓ The URL is wrong. Please check the YouTube or SoundCloud URL.",
        Status::Unknown => "❌ An unexpected error has occurred.",
        Status::Processing => "📁 Busy extracting the audio...",
        Status::Canceled => {
            "🥺 Oh, you canceled! That's okay, just submit the URL again to continue."
        }
        Status::None => "...",
    }
}

/// One line per state change; the raw error goes on a second line.
pub fn render(state: &RequestSnapshot) -> String {
    let mut line = format!("{}  [status: {}]", status_message(state.status), state.status);
    if state.status == Status::Unknown {
        if let Some(err) = &state.last_error {
            line.push_str("\n    ");
            line.push_str(err);
        }
    }
    line
}

/// Submits each URL in turn, waiting for every one to settle. Returns how
/// many did not complete. Ctrl-C cancels the running download and stops.
pub async fn batch<E: StateEmitter>(orchestrator: &DownloadOrchestrator<E>, urls: &[String]) -> usize {
    let mut failed = 0;
    for (done, url) in urls.iter().enumerate() {
        tokio::select! {
            _ = orchestrator.submit(url) => {}
            _ = tokio::signal::ctrl_c() => {
                orchestrator.cancel().await;
                tracing::warn!("Interrupted, skipping remaining URLs");
                return urls.len() - done;
            }
        }
        if orchestrator.snapshot().await.status != Status::Completed {
            failed += 1;
        }
    }
    failed
}

/// Reads URLs from stdin until end of input or `quit`. Every line is one
/// press of the download button, so a line entered while a download runs
/// cancels it.
pub async fn interactive<E: StateEmitter>(
    orchestrator: &DownloadOrchestrator<E>,
) -> anyhow::Result<()> {
    println!("{BANNER}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = FuturesUnordered::new();
    let mut abort = false;

    loop {
        tokio::select! {
            biased;
            Some(()) = pending.next(), if !pending.is_empty() => {}
            _ = tokio::signal::ctrl_c() => {
                abort = true;
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "q" | "quit" | "exit" => {
                        abort = true;
                        break;
                    }
                    "c" | "cancel" => {
                        if !orchestrator.cancel().await {
                            println!("Nothing to cancel.");
                        }
                    }
                    input => {
                        let input = input.to_string();
                        pending.push(async move { orchestrator.submit(&input).await });
                    }
                }
            }
        }
    }

    if abort {
        orchestrator.cancel().await;
    }
    while pending.next().await.is_some() {}
    Ok(())
}
