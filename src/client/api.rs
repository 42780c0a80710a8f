use async_trait::async_trait;

use crate::models::{Product, UpdateUserRequest, UserProfile};
use crate::services::auth_service::{LoginRequest, LoginResponse, RegisterRequest};

use super::error::ClientError;

/// Auth side of the HTTP API, seen from the app.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError>;
    async fn profile(&self, access_token: &str) -> Result<UserProfile, ClientError>;
}

/// Product lookups used by the scanning screen.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn product_by_id(
        &self,
        access_token: &str,
        product_id: &str,
    ) -> Result<Product, ClientError>;
}

/// Typed client for the Cash Manager HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ClientError> {
        let url = format!("{}/api/v1/auth/register", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub async fn update_profile(
        &self,
        access_token: &str,
        changes: &UpdateUserRequest,
    ) -> Result<UserProfile, ClientError> {
        let url = format!("{}/api/v1/users/me", self.base_url);

        let response = self
            .http
            .patch(&url)
            .bearer_auth(access_token)
            .json(changes)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let url = format!("{}/api/v1/auth/login", self.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn profile(&self, access_token: &str) -> Result<UserProfile, ClientError> {
        let url = format!("{}/api/v1/auth/profile", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProductGateway for ApiClient {
    async fn product_by_id(
        &self,
        access_token: &str,
        product_id: &str,
    ) -> Result<Product, ClientError> {
        let url = format!(
            "{}/api/v1/products/{}",
            self.base_url,
            urlencoding::encode(product_id)
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Extrai a mensagem do envelope `{"success": false, "error": "..."}`.
async fn api_error(response: reqwest::Response) -> ClientError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error.unwrap_or(fallback),
        Err(_) => fallback,
    };

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");

        let client = ApiClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
