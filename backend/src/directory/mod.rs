//! In-memory company dataset behind the directory endpoints.

pub mod fixtures;

use common::company::CompanyDetail;

pub struct DirectoryStore {
    companies: Vec<CompanyDetail>,
}

impl DirectoryStore {
    /// Load the dataset: the JSON file named by `COMPANY_DATASET` when set,
    /// the built-in fixture records otherwise. Read once at startup.
    pub fn load() -> anyhow::Result<DirectoryStore> {
        let companies = match std::env::var("COMPANY_DATASET") {
            Ok(path) if !path.is_empty() => {
                tracing::info!("loading company dataset from {}", path);
                let raw = std::fs::read_to_string(&path)?;
                serde_json::from_str(&raw)?
            }
            _ => fixtures::fixture_companies(),
        };
        Ok(DirectoryStore { companies })
    }

    pub fn from_records(companies: Vec<CompanyDetail>) -> DirectoryStore {
        DirectoryStore { companies }
    }

    pub fn all(&self) -> &[CompanyDetail] {
        &self.companies
    }

    pub fn by_ticker(&self, ticker: &str) -> Option<&CompanyDetail> {
        self.companies
            .iter()
            .find(|company| company.ticker.eq_ignore_ascii_case(ticker))
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
