use reqwest::blocking::Client;
use reqwest::{redirect, StatusCode};
use thiserror::Error;

/// Fixed retry budget; attempts run one at a time.
pub const DOWNLOAD_ATTEMPTS: usize = 5;

/// Client for archive downloads. Redirects are not followed; a 3xx counts
/// as a failed attempt like any other non-200 status.
pub fn client() -> reqwest::Result<Client> {
    Client::builder().redirect(redirect::Policy::none()).build()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DownloadError {
    #[error("download failed, giving up")]
    GivingUp,
}

/// Outcome of a single attempt. Transient failures carry a reason for the
/// retry notice; they never propagate as errors.
enum Attempt {
    Done(Vec<u8>),
    Retry(String),
}

/// Fetch `<base>/<file>` into memory, retrying transient failures (non-200
/// statuses and transport errors) up to the attempt budget.
pub fn download_with_retry(
    client: &Client,
    base: &str,
    file: &str,
) -> Result<Vec<u8>, DownloadError> {
    let url = format!("{}/{}", base.trim_end_matches('/'), file);
    for _ in 0..DOWNLOAD_ATTEMPTS {
        match attempt(client, &url) {
            Attempt::Done(bytes) => return Ok(bytes),
            Attempt::Retry(reason) => println!("Download {reason}, retrying..."),
        }
    }
    Err(DownloadError::GivingUp)
}

fn attempt(client: &Client, url: &str) -> Attempt {
    let response = match client.get(url).send() {
        Ok(r) => r,
        Err(e) => return Attempt::Retry(format!("error {e}")),
    };
    if response.status() != StatusCode::OK {
        return Attempt::Retry(format!(
            "received status code {}",
            response.status().as_u16()
        ));
    }
    match response.bytes() {
        Ok(body) => Attempt::Done(body.to_vec()),
        Err(e) => Attempt::Retry(format!("error {e}")),
    }
}
