//! # Command Dispatcher
//!
//! Execute one parsed [`Command`] against a session's writer.
//!
//! ## Design Principles
//!
//! 1. **Exhaustive Match**: Every `Command` variant has exactly one branch.
//! 2. **Flush Per Response**: Every branch ends with a flush so output is
//!    never left sitting in the buffer while the client waits.
//! 3. **Session-Local Failures**: Lookup errors become a response line; only
//!    I/O errors on the connection escape to the caller.

use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use teanet_common::Command;
use teanet_common::protocol::{self, CRLF};
use teanet_lookup::SummaryLookup;

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Close the connection.
    Terminate,
}

/// Runs `command`, writes its response and flushes.
///
/// Returns `Flow::Terminate` only for `quit`/`exit`.
pub async fn dispatch<W, L>(command: Command, writer: &mut W, lookup: &L) -> io::Result<Flow>
where
    W: AsyncWrite + Unpin,
    L: SummaryLookup + ?Sized,
{
    let flow = match command {
        Command::Help => {
            writer.write_all(protocol::HELP.as_bytes()).await?;
            Flow::Continue
        }
        Command::Wiki { subject: None } => {
            writer.write_all(protocol::WIKI_USAGE.as_bytes()).await?;
            Flow::Continue
        }
        Command::Wiki {
            subject: Some(subject),
        } => {
            let response = lookup_response(&subject, lookup).await;
            writer.write_all(response.as_bytes()).await?;
            Flow::Continue
        }
        Command::Quit => {
            writer.write_all(protocol::GOODBYE.as_bytes()).await?;
            Flow::Terminate
        }
        Command::Unknown(verb) => {
            debug!(%verb, "unknown command");
            writer.write_all(protocol::UNKNOWN_COMMAND.as_bytes()).await?;
            Flow::Continue
        }
    };

    writer.flush().await?;
    Ok(flow)
}

async fn lookup_response<L>(subject: &str, lookup: &L) -> String
where
    L: SummaryLookup + ?Sized,
{
    match lookup.summary(subject).await {
        Ok(summary) => format!("{summary}{CRLF}"),
        Err(err) => {
            warn!(
                %subject,
                kind = err.kind().as_str(),
                status = ?err.status(),
                error = %err,
                "lookup failed"
            );
            protocol::lookup_error_line(&err)
        }
    }
}
