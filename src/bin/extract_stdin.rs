//! Reads a page from stdin and writes the extracted document as JSON.
//!
//! ```text
//! extract_stdin <url> < page.html
//! extract_stdin --json < request.json
//! ```
//!
//! With `--json`, stdin holds an `{"url": ..., "html": ...}` request and the
//! positional URL is not needed. Set `RUST_LOG=pagelift=debug` to see which
//! heuristics fired.

use std::io::{self, Read};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut json_request = false;
    let mut url = String::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json_request = true;
        } else if url.is_empty() {
            url = arg;
        }
    }

    let mut input = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut input) {
        tracing::error!(%err, "failed to read stdin");
        return ExitCode::FAILURE;
    }

    let document = if json_request {
        let body = String::from_utf8_lossy(&input);
        match pagelift::extract_request_json(&body) {
            Ok(document) => document,
            Err(err) => {
                tracing::error!(%err, "request rejected");
                return ExitCode::FAILURE;
            }
        }
    } else {
        pagelift::extract_bytes(&url, &input)
    };

    match serde_json::to_string(&document) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "failed to serialize document");
            ExitCode::FAILURE
        }
    }
}
