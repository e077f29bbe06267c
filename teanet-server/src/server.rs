//! # Connection Handling
//!
//! Accept TCP connections and drive one interactive session per connection.
//!
//! ## Design Principles
//!
//! 1. **Task Per Connection**: Each accepted stream runs on its own tokio
//!    task; a slow client or slow lookup never delays the accept loop.
//! 2. **Transport Agnostic Session**: `run_session` only needs an async
//!    reader and writer, so tests can drive it over in-memory pipes.
//! 3. **Fail-Open Accept**: Accept errors are skipped; only the initial bind
//!    is fatal.
//! 4. **Ownership Cleanup**: A session owns its stream halves; returning from
//!    the loop on any path drops them and closes the connection.

use std::future::Future;
use std::io;
use std::net::{Ipv6Addr, SocketAddr};
use std::sync::Arc;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, trace};

use teanet_common::Command;
use teanet_common::protocol::{GREETING, PORT, PROMPT};
use teanet_lookup::SummaryLookup;

use crate::dispatch::{Flow, dispatch};

const LISTEN_BACKLOG: i32 = 1024;

/// Address the server listens on: every interface, port 2323.
///
/// IPv6 unspecified; `bind` makes it dual-stack so IPv4 clients connect too.
pub fn listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv6Addr::UNSPECIFIED, PORT))
}

/// Binds a listening socket with `SO_REUSEADDR` set.
///
/// IPv6 addresses also accept IPv4-mapped connections.
/// Must be called from within a tokio runtime.
pub fn bind(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    TcpListener::from_std(socket.into())
}

/// Accepts connections forever.
pub async fn serve<L>(listener: TcpListener, lookup: Arc<L>)
where
    L: SummaryLookup + ?Sized + 'static,
{
    serve_until(listener, lookup, std::future::pending::<()>()).await
}

/// Accepts connections until `shutdown` completes.
///
/// Sessions already running keep going after the listener stops.
pub async fn serve_until<L, F>(listener: TcpListener, lookup: Arc<L>, shutdown: F)
where
    L: SummaryLookup + ?Sized + 'static,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("listener shutting down");
                break;
            }
            accept = listener.accept() => {
                let (stream, _) = match accept {
                    Ok(value) => value,
                    Err(err) => {
                        debug!(error = %err, "accept failed");
                        continue;
                    }
                };
                let lookup = Arc::clone(&lookup);
                tokio::spawn(async move {
                    let _ = handle_connection(stream, lookup).await;
                });
            }
        }
    }
}

/// Runs one session on an accepted TCP stream.
pub async fn handle_connection<L>(stream: TcpStream, lookup: Arc<L>) -> io::Result<()>
where
    L: SummaryLookup + ?Sized,
{
    let peer = stream.peer_addr().ok();
    let _ = stream.set_nodelay(true);
    debug!(?peer, "session opened");

    let (reader, writer) = stream.into_split();
    let result = run_session(reader, writer, lookup.as_ref()).await;

    match &result {
        Ok(()) => debug!(?peer, "session closed"),
        Err(err) => debug!(?peer, error = %err, "session ended on i/o error"),
    }

    result
}

/// Drives the greeting, prompt, read and dispatch cycle until the client
/// quits, disconnects, or an I/O error occurs.
///
/// A final line that is not newline-terminated is treated as a disconnect
/// and never dispatched.
pub async fn run_session<R, W, L>(reader: R, writer: W, lookup: &L) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    L: SummaryLookup + ?Sized,
{
    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);

    writer.write_all(GREETING.as_bytes()).await?;
    writer.flush().await?;

    let mut line = Vec::with_capacity(256);
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 || line.last() != Some(&b'\n') {
            return Ok(());
        }

        let text = String::from_utf8_lossy(&line);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = Command::parse(trimmed);
        trace!(verb = command.verb(), "dispatching");
        if dispatch(command, &mut writer, lookup).await? == Flow::Terminate {
            return Ok(());
        }
    }
}
