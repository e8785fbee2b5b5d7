//! Prints the CSS a page would inject for a given query string and cookie.
//!
//! ```text
//! render_filter_css [--query "?show=silver-border&hide=lands"]
//!                   [--cookie "filter=%7B...%7D"]
//!                   [--config page.json]
//! ```
//!
//! Set `RUST_LOG=debug` to see the reconciled overrides.

use std::fs;

use manabase_filter::{
    CookieFilter, FilterConfig, FilterState, RawFilters, RuleBuffer, StyleInjector,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut query = String::new();
    let mut cookie_header = String::new();
    let mut config = FilterConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--query" => query = args.next().ok_or("--query needs a value")?,
            "--cookie" => cookie_header = args.next().ok_or("--cookie needs a value")?,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = serde_json::from_str(&fs::read_to_string(path)?)?;
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let cookie = CookieFilter::from_cookie_header_lossy(&cookie_header, &config.cookie_name);
    let state = FilterState::new(config, RawFilters::collect(cookie, &query));
    let mut sheet = RuleBuffer::new();
    StyleInjector::new(state.config()).apply(&state, &mut sheet);
    for rule in sheet.rules() {
        println!("{rule}");
    }
    Ok(())
}
