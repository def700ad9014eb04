//! Shared search criteria model and the pure edit operations behind the search page.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::search_const::DEFAULT_PAGE_LIMIT;


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryField {
    #[serde(rename = "industries")]
    Industry,
    #[serde(rename = "subIndustries")]
    SubIndustry,
}

impl CategoryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryField::Industry => "industries",
            CategoryField::SubIndustry => "subIndustries",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumericField {
    #[serde(rename = "stats.share_price")]
    SharePrice,
    #[serde(rename = "stats.equity_value")]
    EquityValue,
    #[serde(rename = "stats.ltm_revenue")]
    LtmRevenue,
    #[serde(rename = "stats.enterprise_value")]
    EnterpriseValue,
    #[serde(rename = "stats.multiple_ev_to_revenue")]
    EvToRevenue,
    #[serde(rename = "stats.multiple_ev_to_ebitda")]
    EvToEbitda,
    #[serde(rename = "stats.price_to_earnings")]
    PriceToEarnings,
}

impl NumericField {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericField::SharePrice => "stats.share_price",
            NumericField::EquityValue => "stats.equity_value",
            NumericField::LtmRevenue => "stats.ltm_revenue",
            NumericField::EnterpriseValue => "stats.enterprise_value",
            NumericField::EvToRevenue => "stats.multiple_ev_to_revenue",
            NumericField::EvToEbitda => "stats.multiple_ev_to_ebitda",
            NumericField::PriceToEarnings => "stats.price_to_earnings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "ticker")]
    Ticker,
    #[serde(rename = "industry")]
    Industry,
    #[serde(rename = "sub_industry")]
    SubIndustry,
    #[serde(rename = "stats.share_price")]
    SharePrice,
    #[serde(rename = "stats.equity_value")]
    EquityValue,
    #[serde(rename = "stats.ltm_revenue")]
    LtmRevenue,
    #[serde(rename = "stats.enterprise_value")]
    EnterpriseValue,
    #[serde(rename = "stats.multiple_ev_to_revenue")]
    EvToRevenue,
    #[serde(rename = "stats.multiple_ev_to_ebitda")]
    EvToEbitda,
    #[serde(rename = "stats.price_to_earnings")]
    PriceToEarnings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Sort cycle position of one column. Every header click advances it one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortState {
    pub fn cycled(self) -> SortState {
        match self {
            SortState::Unsorted => SortState::Ascending,
            SortState::Ascending => SortState::Descending,
            SortState::Descending => SortState::Unsorted,
        }
    }

    pub fn direction(self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending => Some(SortDirection::Asc),
            SortState::Descending => Some(SortDirection::Desc),
        }
    }
}

/// Inclusive numeric interval. A `None` bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NumericRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> NumericRange {
        NumericRange { min, max }
    }

    /// Build a range from the two text inputs of a range control. Blank,
    /// unparseable or non-finite text leaves that side open.
    pub fn from_inputs(min_text: &str, max_text: &str) -> NumericRange {
        NumericRange {
            min: parse_bound(min_text),
            max: parse_bound(max_text),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Pagination {
        Pagination {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Active filters. Category selections serialize as sibling keys of
/// `numericRanges` (`industries`, `subIndustries`), which is the wire shape
/// the directory service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchFilters {
    #[serde(flatten)]
    pub categories: BTreeMap<CategoryField, BTreeSet<String>>,
    #[serde(rename = "numericRanges", skip_serializing_if = "BTreeMap::is_empty")]
    pub numeric_ranges: BTreeMap<NumericField, NumericRange>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.numeric_ranges.is_empty()
    }
}

/// One complete search intent: free text, filters, sort order and page.
///
/// Empty parts are omitted when serializing, so two criteria that mean the
/// same search serialize to the same bytes. `{}` deserializes to the default
/// first-page criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorting: Vec<SortCriterion>,
    #[serde(skip_serializing_if = "SearchFilters::is_empty")]
    pub filters: SearchFilters,
    pub pagination: Pagination,
}

impl SearchCriteria {
    pub fn with_search_term(&self, term: &str) -> SearchCriteria {
        let mut next = self.clone();
        if term.trim().is_empty() {
            next.search = None;
        } else {
            next.search = Some(term.to_string());
        }
        next
    }

    /// Advance the sort cycle of one column. Entering the cycle appends the
    /// column after the existing criteria; flipping to descending keeps its
    /// position; leaving the cycle drops it.
    pub fn toggle_sort(&self, field: SortField) -> SearchCriteria {
        let mut next = self.clone();
        match self.sort_state(field).cycled() {
            SortState::Ascending => {
                next.sorting.push(SortCriterion {
                    field,
                    direction: SortDirection::Asc,
                });
            }
            SortState::Descending => {
                for criterion in next.sorting.iter_mut() {
                    if criterion.field == field {
                        criterion.direction = SortDirection::Desc;
                    }
                }
            }
            SortState::Unsorted => {
                next.sorting.retain(|criterion| criterion.field != field);
            }
        }
        next
    }

    pub fn sort_state(&self, field: SortField) -> SortState {
        match self.sorting.iter().find(|criterion| criterion.field == field) {
            None => SortState::Unsorted,
            Some(criterion) => match criterion.direction {
                SortDirection::Asc => SortState::Ascending,
                SortDirection::Desc => SortState::Descending,
            },
        }
    }

    pub fn toggle_category(&self, field: CategoryField, value: &str, included: bool) -> SearchCriteria {
        let mut next = self.clone();
        let entry = next.filters.categories.entry(field).or_insert(BTreeSet::new());
        if included {
            entry.insert(value.to_string());
        } else {
            entry.remove(value);
        }
        if entry.is_empty() {
            next.filters.categories.remove(&field);
        }
        next
    }

    pub fn apply_range(&self, field: NumericField, range: NumericRange) -> SearchCriteria {
        let mut next = self.clone();
        if range.is_unbounded() {
            next.filters.numeric_ranges.remove(&field);
        } else {
            next.filters.numeric_ranges.insert(field, range);
        }
        next
    }

    pub fn clear_range(&self, field: NumericField) -> SearchCriteria {
        let mut next = self.clone();
        next.filters.numeric_ranges.remove(&field);
        next
    }
}

#[cfg(test)]
#[path = "tests/search_criteria_tests.rs"]
mod tests;
