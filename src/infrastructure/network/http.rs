// HTTP client utilities
use crate::domain::error::SiteError;
use crate::domain::traits::Fetcher;
use async_trait::async_trait;
use reqwest::Client;

/// Create the HTTP client used for every page and API request.
///
/// No request timeout is set: a stalled server blocks the caller until the
/// transport gives up.
pub fn create_client() -> Result<Client, SiteError> {
    Ok(Client::builder()
        .user_agent(concat!("nps-sites/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// `Fetcher` over a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SiteError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
