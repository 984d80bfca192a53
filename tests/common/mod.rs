use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crm_dashboard::collection::{CollectionPage, CollectionQuery};
use crm_dashboard::domain::customer::{Customer, CustomerLocation, CustomerName};
use crm_dashboard::domain::types::SortField;
use crm_dashboard::fetcher::CollectionFetcher;
use crm_dashboard::fetcher::errors::{FetchError, FetchResult};

/// Generates `count` distinct customers with predictable field values.
pub fn customers(count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| Customer {
            id: format!("customer-{i:02}"),
            name: CustomerName {
                first: format!("First{i:02}"),
                last: format!("Last{i:02}"),
            },
            email: format!("customer{i:02}@example.com"),
            phone: Some(format!("+1-555-01{i:02}")),
            location: Some(CustomerLocation {
                city: format!("City{i:02}"),
                country: Some("US".to_string()),
            }),
            picture: None,
            registered_at: None,
        })
        .collect()
}

fn sort_key(customer: &Customer, field: SortField) -> String {
    match field {
        SortField::FirstName => customer.name.first.clone(),
        SortField::LastName => customer.name.last.clone(),
        SortField::Email => customer.email.clone(),
        SortField::City => customer
            .location
            .as_ref()
            .map(|l| l.city.clone())
            .unwrap_or_default(),
        SortField::RegisteredAt => customer
            .registered_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default(),
    }
}

/// In-memory stand-in for the listing endpoint: filters, sorts, and pages a
/// fixed customer set, recording every query it receives.
#[derive(Clone)]
pub struct FixtureFetcher {
    customers: Arc<Vec<Customer>>,
    calls: Arc<Mutex<Vec<CollectionQuery>>>,
}

impl FixtureFetcher {
    pub fn new(count: usize) -> Self {
        Self {
            customers: Arc::new(customers(count)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<CollectionQuery> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CollectionFetcher<Customer> for FixtureFetcher {
    async fn fetch_page(&self, query: &CollectionQuery) -> FetchResult<CollectionPage<Customer>> {
        self.calls.lock().unwrap().push(query.clone());

        let mut matches: Vec<Customer> = self
            .customers
            .iter()
            .filter(|c| match &query.search {
                Some(term) => {
                    let term = term.to_lowercase();
                    c.name.first.to_lowercase().contains(&term)
                        || c.name.last.to_lowercase().contains(&term)
                        || c.email.to_lowercase().contains(&term)
                }
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by_key(|c| sort_key(c, query.sort_by));

        let total = matches.len();
        let per_page = query.per_page.get();
        let items = matches
            .into_iter()
            .skip(query.page * per_page)
            .take(per_page)
            .collect();

        Ok(CollectionPage {
            items,
            total,
            query: query.clone(),
        })
    }
}

/// Scripted resolution for one [`GateFetcher`] request.
pub enum Outcome {
    /// Resolve with `count` generated rows and the given total.
    Page { count: usize, total: usize },
    Fail(FetchError),
}

/// Fetcher whose requests block until the test resolves them, letting tests
/// control response arrival order. Gates must be armed before the fetches
/// they resolve, and are consumed in request order.
#[derive(Clone)]
pub struct GateFetcher {
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<Outcome>>>>,
    calls: Arc<Mutex<Vec<CollectionQuery>>>,
}

impl GateFetcher {
    pub fn new() -> Self {
        Self {
            gates: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn arm(&self) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CollectionFetcher<Customer> for GateFetcher {
    async fn fetch_page(&self, query: &CollectionQuery) -> FetchResult<CollectionPage<Customer>> {
        self.calls.lock().unwrap().push(query.clone());
        let gate = {
            self.gates
                .lock()
                .unwrap()
                .pop_front()
                .expect("fetch issued with no gate armed")
        };
        match gate.await.expect("gate sender dropped") {
            Outcome::Page { count, total } => Ok(CollectionPage {
                items: customers(count),
                total,
                query: query.clone(),
            }),
            Outcome::Fail(error) => Err(error),
        }
    }
}

/// Lets spawned controller tasks run to completion without advancing time.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
