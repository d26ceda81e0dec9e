//! Interactive websocket chat session against the server's `/ws/` endpoint.
//!
//! DESIGN
//! ======
//! The session is two cooperating halves joined by one `select!` loop:
//! - A dedicated thread reads terminal lines and feeds them over a bounded
//!   channel; dropping the sender on EOF is the end-of-input signal.
//! - Inbound socket events are classified into an [`Outcome`] by a pure
//!   function; the loop applies the outcome. Classification never touches
//!   the socket, so dispatch behavior is testable without one.
//!
//! LIFECYCLE
//! =========
//! 1. Prompt for the operator name (blocking, before any connection)
//! 2. Connect → relay terminal lines out, inbound frames to stdout
//! 3. EOF / remote close / transport error / Ctrl-C → close socket → return

use std::io::{self, BufRead, Write};

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info};

use crate::ProbeError;
use crate::endpoint::Endpoint;

const CHAT_PATH: &str = "/ws/";

// =============================================================================
// OUTCOME
// =============================================================================

/// What the session loop should do after one inbound socket event. The loop
/// owns all socket writes and printing; classification only decides.
#[derive(Debug, PartialEq)]
enum Outcome {
    /// Write a line to the operator terminal.
    Print(String),
    /// Queue a reply frame on the socket.
    Reply(Message),
    /// Write a line, then stop the session.
    PrintAndStop(String),
    /// Stop the session with no further action.
    Stop,
    /// Nothing to do for this event.
    Ignore,
}

// =============================================================================
// SESSION
// =============================================================================

/// Run one interactive chat session.
///
/// Prompts for the operator display name on stdin before connecting, then
/// relays terminal lines and inbound frames until either side ends the
/// session. The socket is closed on every exit path, including Ctrl-C.
///
/// # Errors
///
/// Returns [`ProbeError::Connect`] when the websocket handshake fails and
/// [`ProbeError::Input`] when the name prompt cannot be read.
pub async fn run(endpoint: &Endpoint) -> Result<(), ProbeError> {
    let Some(name) = prompt_name()? else {
        // EOF before a name was given; nothing to connect for.
        return Ok(());
    };

    let url = endpoint.ws_url(CHAT_PATH);
    let (mut stream, _) = connect_async(url.as_str())
        .await
        .map_err(|error| ProbeError::Connect(Box::new(error)))?;
    info!(%url, %name, "chat: connected");

    let mut lines = spawn_stdin_lines();
    tokio::select! {
        () = run_session(&mut stream, &name, &mut lines) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("chat: interrupt received");
            let _ = SinkExt::close(&mut stream).await;
        }
    }
    info!("chat: session ended");
    Ok(())
}

/// Relay frames between the open socket and the terminal until one side ends
/// the session, then close the socket so the server sees a clean shutdown.
async fn run_session<S>(
    stream: &mut WebSocketStream<S>,
    name: &str,
    lines: &mut mpsc::Receiver<String>,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    loop {
        tokio::select! {
            event = stream.next() => {
                match classify(event) {
                    Outcome::Print(line) => println!("{line}"),
                    Outcome::Reply(reply) => {
                        if stream.send(reply).await.is_err() {
                            break;
                        }
                    }
                    Outcome::PrintAndStop(line) => {
                        println!("{line}");
                        break;
                    }
                    Outcome::Stop => break,
                    Outcome::Ignore => {}
                }
            }
            line = lines.recv() => {
                // A closed channel means local input reached EOF.
                let Some(line) = line else { break };
                let outbound = outbound_line(name, &line);
                if stream.send(Message::Text(outbound.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    // Sink close sends a close frame while the session is still open, and
    // flushes the acknowledgement the transport queued when the peer closed
    // first. The inherent `close` cannot: it refuses to send once closing.
    let _ = SinkExt::close(stream).await;
    debug!("chat: socket closed");
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Classify one inbound socket event into the action the loop should take.
///
/// Text payloads are trimmed of surrounding whitespace; printed notices carry
/// the frame-kind label and a two-space separator, e.g. `Text:  hi there`.
fn classify(event: Option<Result<Message, tokio_tungstenite::tungstenite::Error>>) -> Outcome {
    match event {
        Some(Ok(Message::Text(text))) => Outcome::Print(format!("Text:  {}", text.trim())),
        Some(Ok(Message::Binary(payload))) => Outcome::Print(format!("Binary:  {payload:?}")),
        Some(Ok(Message::Ping(payload))) => Outcome::Reply(Message::Pong(payload)),
        Some(Ok(Message::Pong(_))) => Outcome::Print("Pong received".to_owned()),
        // The transport queues the close acknowledgement as it reads the
        // frame; the session's closing flush puts it on the wire.
        Some(Ok(Message::Close(_))) => Outcome::Stop,
        Some(Ok(Message::Frame(_))) => Outcome::Ignore,
        Some(Err(error)) => Outcome::PrintAndStop(format!("Error during receive: {error}")),
        None => Outcome::Stop,
    }
}

/// Format one terminal line as the chat text frame payload.
fn outbound_line(name: &str, line: &str) -> String {
    format!("{name}: {line}")
}

// =============================================================================
// LOCAL INPUT
// =============================================================================

/// Prompt for the operator display name, blocking until a line arrives.
///
/// Returns `Ok(None)` when stdin reaches EOF before a name is entered.
fn prompt_name() -> Result<Option<String>, ProbeError> {
    print!("Please enter your name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Feed terminal lines into the session over a bounded channel.
///
/// Reads happen on a dedicated thread because stdin blocks; the thread drops
/// its sender on EOF, which closes the channel and ends the session loop.
fn spawn_stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(32);
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
