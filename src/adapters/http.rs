use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Shared client for both upstream APIs. Without a timeout a stalled endpoint
/// blocks the run indefinitely.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
