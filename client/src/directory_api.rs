//! Typed boundary to the company directory service.

use async_trait::async_trait;
use common::company::{CompanyDetail, CompanySummary};
use common::search_criteria::SearchCriteria;

/// The two directory operations the dashboard consumes.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    async fn search_companies(
        &self,
        criteria: &SearchCriteria,
    ) -> anyhow::Result<Vec<CompanySummary>>;
    async fn company_by_ticker(&self, ticker: &str) -> anyhow::Result<CompanyDetail>;
}

/// HTTP implementation against a running directory service.
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> DirectoryClient {
        DirectoryClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CompanyDirectory for DirectoryClient {
    async fn search_companies(
        &self,
        criteria: &SearchCriteria,
    ) -> anyhow::Result<Vec<CompanySummary>> {
        let url = format!("{}/company/search", self.base_url);
        let response = self.client.post(url).json(criteria).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let rows = serde_json::from_str(&response_txt)?;
        Ok(rows)
    }

    async fn company_by_ticker(&self, ticker: &str) -> anyhow::Result<CompanyDetail> {
        let url = format!("{}/company/{}", self.base_url, ticker);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let company = serde_json::from_str(&response_txt)?;
        Ok(company)
    }
}

#[cfg(test)]
#[path = "tests/directory_api_tests.rs"]
mod tests;
