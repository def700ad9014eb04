//! Company record schemas served by the directory service.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search_criteria::{CategoryField, NumericField};


/// Precomputed valuation stats. Every field is optional; the directory
/// only reports what it has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompanyStats {
    pub ltm_revenue: Option<f64>,
    pub ltm_revenue_growth: Option<f64>,
    pub ltm_net_income: Option<f64>,
    pub ltm_ebitda: Option<f64>,

    pub share_price: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub equity_value: Option<f64>,
    pub cash: Option<f64>,
    pub debt: Option<f64>,
    pub enterprise_value: Option<f64>,

    pub multiple_ev_to_revenue: Option<f64>,
    pub multiple_ev_to_ebitda: Option<f64>,
    pub price_to_earnings: Option<f64>,

    pub median_fund_investment_percentage_change: Option<f64>,
}

impl CompanyStats {
    pub fn get(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::SharePrice => self.share_price,
            NumericField::EquityValue => self.equity_value,
            NumericField::LtmRevenue => self.ltm_revenue,
            NumericField::EnterpriseValue => self.enterprise_value,
            NumericField::EvToRevenue => self.multiple_ev_to_revenue,
            NumericField::EvToEbitda => self.multiple_ev_to_ebitda,
            NumericField::PriceToEarnings => self.price_to_earnings,
        }
    }
}

/// One row of the search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub stats: CompanyStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanySummary {
    pub fn category_value(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::Industry => self.industry.as_deref(),
            CategoryField::SubIndustry => self.sub_industry.as_deref(),
        }
    }

    pub fn stat_value(&self, field: NumericField) -> Option<f64> {
        self.stats.get(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingType {
    #[serde(rename = "10-Q")]
    TenQ,
    #[serde(rename = "10-K")]
    TenK,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingSource {
    #[serde(rename = "EDGAR")]
    Edgar,
    Manual,
    Other,
}

/// One reported filing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filing {
    pub id: String,
    pub cik: String,
    pub company_id: String,
    #[serde(rename = "type")]
    pub filing_type: FilingType,
    pub period_end: DateTime<Utc>,
    pub filing_date: DateTime<Utc>,

    // income statement
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
    pub ebitda: Option<f64>,
    pub shares_outstanding: Option<f64>,

    // balance sheet
    pub cash: Option<f64>,
    pub debt: Option<f64>,

    pub document_url: Option<String>,
    pub source: Option<FilingSource>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompanyComparables {
    pub median_ev_to_revenue: Option<f64>,
    pub median_ev_to_ebitda: Option<f64>,
    pub median_pe_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompanyPredictions {
    pub projected_5y_share_price: Option<f64>,
}

/// Full company record behind the per-ticker endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,

    #[serde(default)]
    pub filings: Vec<Filing>,
    pub latest_filing: Option<Filing>,

    pub stats: Option<CompanyStats>,
    pub comparables: Option<CompanyComparables>,
    pub predictions: Option<CompanyPredictions>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyDetail {
    /// Flatten into the search-row shape. Absent stats become the empty block.
    pub fn to_summary(&self) -> CompanySummary {
        CompanySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            ticker: self.ticker.clone(),
            industry: self.industry.clone(),
            sub_industry: self.sub_industry.clone(),
            description: self.description.clone(),
            website: self.website.clone(),
            stats: self.stats.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Distinct values of one categorical column across a result page, sorted.
/// The search page fills its filter dropdowns from this.
pub fn distinct_category_values(companies: &[CompanySummary], field: CategoryField) -> Vec<String> {
    let mut values = BTreeSet::new();
    for company in companies {
        if let Some(value) = company.category_value(field) {
            values.insert(value.to_string());
        }
    }
    values.into_iter().collect()
}

#[cfg(test)]
#[path = "tests/company_tests.rs"]
mod tests;
