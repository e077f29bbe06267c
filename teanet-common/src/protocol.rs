//! # Line Protocol
//!
//! Purpose: Define every fixed byte sequence the server writes to a client.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: Responses live here so tests and the
//!    dispatcher compare against the same bytes.
//! 2. **Wire-Ready**: Constants already carry their CRLF terminators.
//! 3. **Compile-Time Assembly**: Multi-line blocks are built with `concat!`
//!    so no allocation happens per session.
//!
//! ## Session Transcript Example
//!
//! ```text
//! <banner art>\r\n
//! Welcome to the Teanet!\r\n
//! Type 'help' to see commands.\r\n
//! \r\n
//! > help\r\n
//! Available commands:\r\n
//!   help        Show this help\r\n
//!   wiki <term> Wikipedia lookup\r\n
//!   quit        Disconnect\r\n
//! > quit\r\n
//! Goodbye!\r\n
//! ```

/// Line terminator used for every server response.
pub const CRLF: &str = "\r\n";

/// Prompt marker written before each read; no trailing newline.
pub const PROMPT: &str = "> ";

// Expands to the teapot art literal so `concat!` can embed it.
macro_rules! banner_art {
    () => {
        r"
             ;,'
     _o_    ;:;'
 ,-.'---`.__ ;
((j`=====',-'
 `-\     /
    `-=-'
"
    };
}

/// Fixed TCP port the server listens on.
pub const PORT: u16 = 2323;

/// ASCII-art teapot shown at the top of the greeting.
pub const BANNER_ART: &str = banner_art!();

/// Full greeting written once per connection, before the first prompt.
pub const GREETING: &str = concat!(
    banner_art!(),
    "\r\n",
    "Welcome to the Teanet!\r\n",
    "Type 'help' to see commands.\r\n\r\n",
);

/// Response to `help`: a header line followed by the command summary.
pub const HELP: &str = concat!(
    "Available commands:\r\n",
    "  help        Show this help\r\n",
    "  wiki <term> Wikipedia lookup\r\n",
    "  quit        Disconnect\r\n",
);

/// Response to `wiki` without a subject.
pub const WIKI_USAGE: &str = "Usage: wiki <search term>\r\n";

/// Response to any verb the dispatcher does not know.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help'.\r\n";

/// Farewell written before the server closes the connection.
pub const GOODBYE: &str = "Goodbye!\r\n";

/// Label prefixed to a failed lookup's error text.
pub const LOOKUP_ERROR_LABEL: &str = "Error fetching Wikipedia: ";

/// Builds the single response line for a failed lookup.
pub fn lookup_error_line(error: &impl std::fmt::Display) -> String {
    format!("{LOOKUP_ERROR_LABEL}{error}{CRLF}")
}
