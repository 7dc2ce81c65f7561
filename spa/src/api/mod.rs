use url::Url;

pub mod auth_api;

const DEFAULT_API_ENDPOINT: &str = "https://frontend-take-home-service.fetch.com";

pub const PUBLIC_API_ENDPOINT: &str = match option_env!("PUBLIC_API_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_API_ENDPOINT,
};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("transport_error: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("unexpected_response: status={status}, body={body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("invalid_endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

pub fn endpoint(path: &str) -> Result<Url, ApiError> {
    endpoint_from(PUBLIC_API_ENDPOINT, path)
}

/// Joins `path` under `base`, keeping any path prefix the base URL already has.
pub fn endpoint_from(base: &str, path: &str) -> Result<Url, ApiError> {
    let mut base = Url::parse(base)?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}
