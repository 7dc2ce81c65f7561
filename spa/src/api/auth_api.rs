use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use shared::{AuthError, LoginCredentials, SessionService};
use web_sys::RequestCredentials;

use crate::api::{endpoint, ApiError};

/// Every call carries the browser's cookies; the service keeps the session in one.
pub async fn login(credentials: &LoginCredentials) -> Result<(), ApiError> {
    let endpoint = endpoint("auth/login")?;
    log::info!("Doing login, endpoint={endpoint}");
    let response = Request::post(endpoint.as_str())
        .credentials(RequestCredentials::Include)
        .json(credentials)?
        .send()
        .await?;
    ensure_success(response).await?;
    log::info!("Api auth login, name={}", credentials.name);
    Ok(())
}

pub async fn logout() -> Result<(), ApiError> {
    let endpoint = endpoint("auth/logout")?;
    let response = Request::post(endpoint.as_str())
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    ensure_success(response).await?;
    log::info!("Api auth logout");
    Ok(())
}

async fn ensure_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!(
        "Api auth error = unexpected response, status={status}, url={url}, response={body}",
        url = response.url()
    );
    Err(ApiError::UnexpectedStatus { status, body })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HttpSessionService;

#[async_trait(?Send)]
impl SessionService for HttpSessionService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        login(credentials)
            .await
            .map_err(|error| AuthError::LoginFailed(error.to_string()))
    }

    async fn logout(&self) -> Result<(), AuthError> {
        logout()
            .await
            .map_err(|error| AuthError::LogoutFailed(error.to_string()))
    }
}
