//! # calcpad-keypad: terminal keypad
//!
//! Composition root that drives a [`KeypadSession`] from standard input.
//!
//! ## Responsibilities
//! - Initialise structured logging (stderr, `CALCPAD_LOG`)
//! - Pick the arithmetic backend: a remote calcpad server when
//!   `CALCPAD_API_URL` is set, the in-process calculator otherwise
//! - Probe the remote server and report whether it is reachable
//! - Read key names line by line, press them, and render the keypad
//!
//! ## Input
//! Each line holds whitespace-separated key names. Keyboard names (`Enter`,
//! `Escape`, `Backspace`, `*`, `/`, ...) and button labels (`AC`, `CE`, `±`,
//! `×`, `÷`, ...) are both accepted, plus `neg` for `±`. A token that is not a
//! key name is pressed character by character, so `12.5` types three digits
//! and a decimal point.

use calcpad_adapter_http_client::Config;
use calcpad_app::ports::Arithmetic;
use calcpad_app::services::calculator_service::CalculatorService;
use calcpad_app::services::keypad_session::KeypadSession;
use calcpad_domain::keypad::{Key, KeyBinding, KeypadState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "calcpad=warn";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = std::env::var("CALCPAD_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .init();

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    match Config::from_env() {
        Ok(config) => {
            let remote = config.build()?;
            tracing::info!(url = remote.base_url(), "using remote calculator");
            let status = if remote.health().await {
                "API Connected"
            } else {
                "API Offline"
            };
            output.write_all(format!("{status}\n").as_bytes()).await?;
            run(KeypadSession::new(remote), input, &mut output).await?;
        }
        Err(_) => {
            tracing::info!("using in-process calculator");
            run(KeypadSession::new(CalculatorService::new()), input, &mut output).await?;
        }
    }

    Ok(())
}

/// Press every key read from `input`, rendering the keypad after each line.
async fn run<A, R, W>(
    mut session: KeypadSession<A>,
    input: R,
    output: &mut W,
) -> std::io::Result<KeypadState>
where
    A: Arithmetic,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(render(session.state()).as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        for token in line.split_whitespace() {
            let Some(keys) = resolve_keys(token) else {
                tracing::warn!(token, "unknown key");
                continue;
            };
            for key in keys {
                session.press(key).await;
            }
        }
        output.write_all(render(session.state()).as_bytes()).await?;
        output.flush().await?;
    }

    Ok(session.state().clone())
}

fn resolve_key(name: &str) -> Option<Key> {
    if name.eq_ignore_ascii_case("neg") {
        return Some(Key::ToggleSign);
    }
    KeyBinding::from_keyboard(name)
        .map(|binding| binding.key)
        .or_else(|| Key::from_button(name))
}

fn resolve_keys(token: &str) -> Option<Vec<Key>> {
    if let Some(key) = resolve_key(token) {
        return Some(vec![key]);
    }
    let mut buf = [0; 4];
    token
        .chars()
        .map(|c| resolve_key(c.encode_utf8(&mut buf)))
        .collect()
}

fn render(state: &KeypadState) -> String {
    let mut out = format!("history | {}\ndisplay | {}\n", state.history, state.display);
    if let Some(error) = &state.error {
        out.push_str(&format!("error   | {error}\n"));
    }
    out
}
