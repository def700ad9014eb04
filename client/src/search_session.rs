//! One mounted search view: live criteria, the debounce window and
//! latest-wins publication of results.

use std::sync::Arc;
use std::time::Duration;

use common::company::{CompanyDetail, CompanySummary};
use common::search_const::SEARCH_DEBOUNCE_MS;
use common::search_criteria::{
    CategoryField, NumericField, NumericRange, SearchCriteria, SortField, SortState,
};
use tokio::sync::watch;

use crate::debounce::{DebounceTicket, Debouncer};
use crate::directory_api::CompanyDirectory;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchOutcome {
    #[default]
    Pending,
    Loaded(Vec<CompanySummary>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    pub criteria: SearchCriteria,
    pub outcome: SearchOutcome,
}

/// Holds the criteria under edit and keeps the published snapshot in step
/// with the directory. Dropping the session cancels any pending dispatch.
pub struct SearchSession {
    directory: Arc<dyn CompanyDirectory>,
    criteria: SearchCriteria,
    debouncer: Debouncer,
    updates: Arc<watch::Sender<SearchSnapshot>>,
}

impl SearchSession {
    /// Open a session with default criteria and query immediately.
    pub fn start(
        directory: Arc<dyn CompanyDirectory>,
    ) -> (SearchSession, watch::Receiver<SearchSnapshot>) {
        Self::start_with(
            directory,
            SearchCriteria::default(),
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        )
    }

    pub fn start_with(
        directory: Arc<dyn CompanyDirectory>,
        criteria: SearchCriteria,
        debounce: Duration,
    ) -> (SearchSession, watch::Receiver<SearchSnapshot>) {
        let (updates, receiver) = watch::channel(SearchSnapshot {
            criteria: criteria.clone(),
            outcome: SearchOutcome::Pending,
        });
        let mut session = SearchSession {
            directory,
            criteria,
            debouncer: Debouncer::new(debounce),
            updates: Arc::new(updates),
        };
        session.dispatch_now();
        (session, receiver)
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.replace(self.criteria.with_search_term(term));
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.replace(self.criteria.toggle_sort(field));
    }

    pub fn sort_state(&self, field: SortField) -> SortState {
        self.criteria.sort_state(field)
    }

    pub fn toggle_category(&mut self, field: CategoryField, value: &str, included: bool) {
        self.replace(self.criteria.toggle_category(field, value, included));
    }

    pub fn apply_range(&mut self, field: NumericField, range: NumericRange) {
        self.replace(self.criteria.apply_range(field, range));
    }

    pub fn clear_range(&mut self, field: NumericField) {
        self.replace(self.criteria.clear_range(field));
    }

    pub fn refresh(&mut self) {
        self.dispatch_now();
    }

    /// Fetch one company record. Navigation-shaped, so no debounce.
    pub async fn company_detail(&self, ticker: &str) -> anyhow::Result<CompanyDetail> {
        self.directory.company_by_ticker(ticker).await
    }

    /// Adopt the edited criteria and restart the quiescence window. An edit
    /// that lands on the current criteria is dropped without restarting it.
    fn replace(&mut self, next: SearchCriteria) {
        if next == self.criteria {
            return;
        }
        self.criteria = next;
        let _ = self.updates.send(SearchSnapshot {
            criteria: self.criteria.clone(),
            outcome: SearchOutcome::Pending,
        });
        let directory = Arc::clone(&self.directory);
        let updates = Arc::clone(&self.updates);
        let criteria = self.criteria.clone();
        self.debouncer
            .schedule(move |ticket| run_query(directory, updates, criteria, ticket));
    }

    fn dispatch_now(&mut self) {
        let directory = Arc::clone(&self.directory);
        let updates = Arc::clone(&self.updates);
        let criteria = self.criteria.clone();
        self.debouncer
            .schedule_now(move |ticket| run_query(directory, updates, criteria, ticket));
    }
}

/// Issue the search and publish its outcome, unless a newer dispatch took
/// over while the request was in flight.
async fn run_query(
    directory: Arc<dyn CompanyDirectory>,
    updates: Arc<watch::Sender<SearchSnapshot>>,
    criteria: SearchCriteria,
    ticket: DebounceTicket,
) {
    let outcome = match directory.search_companies(&criteria).await {
        Ok(rows) => SearchOutcome::Loaded(rows),
        Err(error) => {
            tracing::warn!("company search failed: {:#}", error);
            SearchOutcome::Failed
        }
    };
    if ticket.is_current() {
        let _ = updates.send(SearchSnapshot { criteria, outcome });
    }
}

#[cfg(test)]
#[path = "tests/search_session_tests.rs"]
mod tests;
