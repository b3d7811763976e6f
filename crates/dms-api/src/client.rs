//! HTTP plumbing shared by every endpoint.

use reqwest::{multipart::Form, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::FileContent;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// REST client for the document service with bearer auth on every call.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// `token` is the bearer token of the signed-in operator. Without one every
    /// call fails with [`ApiError::MissingToken`] before any request is made.
    pub fn new(config: &ApiConfig, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(request.bearer_auth(token))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request)?.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text().await?;
        decode_body(&text)
    }

    /// GET and deserialize a JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        log::debug!("GET {}", path);
        let response = self.send(self.client.get(self.build_url(path))).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and deserialize the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        log::debug!("POST {}", path);
        let request = self.client.post(self.build_url(path)).json(body);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// POST a JSON body where only the status matters.
    pub async fn post_json_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        log::debug!("POST {}", path);
        let request = self.client.post(self.build_url(path)).json(body);
        self.send(request).await?;
        Ok(())
    }

    /// POST a multipart form and deserialize the JSON response.
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        log::debug!("POST (multipart) {}", path);
        let request = self.client.post(self.build_url(path)).multipart(form);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// GET raw bytes together with the response content type.
    pub async fn get_bytes(&self, path: &str) -> Result<FileContent> {
        log::debug!("GET (binary) {}", path);
        let response = self.send(self.client.get(self.build_url(path))).await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        Ok(FileContent {
            content_type,
            bytes,
        })
    }
}

/// Any body that does not match `T` is a decode error, never a partial value.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> ApiClient {
        ApiClient::new(
            &ApiConfig::new("http://dms.local:8080/"),
            token.map(str::to_string),
        )
    }

    #[test]
    fn build_url_joins_base_and_path() {
        let api = client(Some("t"));
        assert_eq!(
            api.build_url("/CategoryMaster/findAll"),
            "http://dms.local:8080/CategoryMaster/findAll"
        );
    }

    #[test]
    fn requests_without_token_are_refused() {
        let api = client(None);
        let request = api.client.get(api.build_url("/branchmaster/findAll"));
        assert!(matches!(
            api.authorize(request),
            Err(ApiError::MissingToken)
        ));
        assert!(!api.has_token());
    }

    #[test]
    fn bearer_token_is_attached() {
        let api = client(Some("abc.def.ghi"));
        let request = api
            .authorize(api.client.get(api.build_url("/branchmaster/findAll")))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer abc.def.ghi"
        );
    }
}
