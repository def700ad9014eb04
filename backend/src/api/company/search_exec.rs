//! Criteria evaluation over the in-memory dataset: match, sort, then page.

use std::cmp::Ordering;

use common::{
    company::{CompanyDetail, CompanySummary},
    search_criteria::{SearchCriteria, SortCriterion, SortDirection, SortField},
};

pub fn run_search(companies: &[CompanyDetail], criteria: &SearchCriteria) -> Vec<CompanySummary> {
    let mut rows = companies
        .iter()
        .map(|company| company.to_summary())
        .filter(|row| matches_criteria(row, criteria))
        .collect::<Vec<_>>();

    if !criteria.sorting.is_empty() {
        rows.sort_by(|a, b| compare_rows(a, b, &criteria.sorting));
    }

    rows.into_iter()
        .skip(criteria.pagination.offset as usize)
        .take(criteria.pagination.limit as usize)
        .collect()
}

fn matches_criteria(row: &CompanySummary, criteria: &SearchCriteria) -> bool {
    if let Some(term) = criteria.search.as_deref() {
        if !matches_text(row, term) {
            return false;
        }
    }
    for (field, selected) in criteria.filters.categories.iter() {
        match row.category_value(*field) {
            Some(value) if selected.contains(value) => {}
            _ => return false,
        }
    }
    // a record that does not report the stat stays out while a range on it
    // is active
    for (field, range) in criteria.filters.numeric_ranges.iter() {
        match row.stat_value(*field) {
            Some(value) if range.contains(value) => {}
            _ => return false,
        }
    }
    true
}

fn matches_text(row: &CompanySummary, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let mut haystacks = vec![row.name.as_str(), row.ticker.as_str()];
    haystacks.extend(row.industry.as_deref());
    haystacks.extend(row.sub_industry.as_deref());
    haystacks.extend(row.description.as_deref());
    haystacks
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

fn compare_rows(a: &CompanySummary, b: &CompanySummary, sorting: &[SortCriterion]) -> Ordering {
    for criterion in sorting {
        let ordering = compare_on(a, b, criterion);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Rows missing the sort value order after present ones in both directions,
/// so a descending sort does not float empty rows to the top.
fn compare_on(a: &CompanySummary, b: &CompanySummary, criterion: &SortCriterion) -> Ordering {
    match (sort_key(a, criterion.field), sort_key(b, criterion.field)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => {
            let ordering = compare_keys(&left, &right);
            match criterion.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

enum SortKey {
    Text(String),
    Number(f64),
}

fn compare_keys(left: &SortKey, right: &SortKey) -> Ordering {
    match (left, right) {
        (SortKey::Text(left), SortKey::Text(right)) => left.cmp(right),
        (SortKey::Number(left), SortKey::Number(right)) => left.total_cmp(right),
        // one field always yields one key kind
        _ => Ordering::Equal,
    }
}

fn sort_key(row: &CompanySummary, field: SortField) -> Option<SortKey> {
    match field {
        SortField::Name => Some(SortKey::Text(row.name.to_lowercase())),
        SortField::Ticker => Some(SortKey::Text(row.ticker.to_lowercase())),
        SortField::Industry => row
            .industry
            .as_deref()
            .map(|value| SortKey::Text(value.to_lowercase())),
        SortField::SubIndustry => row
            .sub_industry
            .as_deref()
            .map(|value| SortKey::Text(value.to_lowercase())),
        SortField::SharePrice => row.stats.share_price.map(SortKey::Number),
        SortField::EquityValue => row.stats.equity_value.map(SortKey::Number),
        SortField::LtmRevenue => row.stats.ltm_revenue.map(SortKey::Number),
        SortField::EnterpriseValue => row.stats.enterprise_value.map(SortKey::Number),
        SortField::EvToRevenue => row.stats.multiple_ev_to_revenue.map(SortKey::Number),
        SortField::EvToEbitda => row.stats.multiple_ev_to_ebitda.map(SortKey::Number),
        SortField::PriceToEarnings => row.stats.price_to_earnings.map(SortKey::Number),
    }
}

#[cfg(test)]
#[path = "tests/search_exec_tests.rs"]
mod tests;
