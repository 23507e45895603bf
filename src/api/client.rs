use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;

use crate::{
    api::{
        ClientConfig,
        Page,
        query::{ConsumptionQuery, ProductsQuery, to_query_string},
        transport::{HttpTransport, Request, Transport},
    },
    model::{Account, ConsumptionRecord, Grouping, MeterId, Period, Product, ProductFilter},
    prelude::*,
};

/// Full-collection retrieval of the backend resources.
pub trait EnergyClient {
    fn fetch_account(&self, account_number: &str) -> Result<Account>;

    /// Records in the backend page order.
    fn fetch_consumption(
        &self,
        meter: &MeterId,
        period: Period,
        grouping: Grouping,
    ) -> Result<Vec<ConsumptionRecord>>;

    fn fetch_products(
        &self,
        available_at: Option<DateTime<FixedOffset>>,
        filter: ProductFilter,
    ) -> Result<Vec<Product>>;
}

pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::InvalidArgument("the API key must not be empty".to_owned()));
        }
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Follow the `next` cursors starting from page 1 and concatenate the results.
    fn fetch_all<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        mut query: impl FnMut(u32) -> Result<String>,
    ) -> Result<Vec<R>> {
        let mut results = Vec::new();
        let mut last_cursor: Option<String> = None;
        let mut page_number = 1;
        loop {
            let request = Request::new(segments, query(page_number)?);
            let page: Page<R> = self.transport.get(&request)?.error_for_status()?.json()?;
            debug!(
                page = page_number,
                n_results = page.results.len(),
                has_next = page.next_cursor.is_some(),
                "fetched a page…"
            );
            results.extend(page.results);
            match page.next_cursor {
                None => {
                    info!(n_pages = page_number, n_results = results.len(), "fetched");
                    return Ok(results);
                }
                Some(cursor) if last_cursor.as_ref() == Some(&cursor) => {
                    return Err(Error::Pagination { cursor });
                }
                Some(cursor) => {
                    last_cursor = Some(cursor);
                    page_number += 1;
                }
            }
        }
    }
}

impl<T: Transport> EnergyClient for ApiClient<T> {
    #[instrument(skip_all, fields(account_number = account_number))]
    fn fetch_account(&self, account_number: &str) -> Result<Account> {
        let request = Request::new(&["accounts", account_number], String::new());
        let account: Account = self.transport.get(&request)?.error_for_status()?.json()?;
        info!(n_properties = account.properties.len(), "fetched");
        Ok(account)
    }

    #[instrument(skip_all, fields(meter = %meter, grouping = ?grouping))]
    fn fetch_consumption(
        &self,
        meter: &MeterId,
        period: Period,
        grouping: Grouping,
    ) -> Result<Vec<ConsumptionRecord>> {
        let mut query = ConsumptionQuery::new(period, grouping);
        self.fetch_all(
            &["electricity-meter-points", &meter.mpan, "meters", &meter.serial_number, "consumption"],
            |page| {
                query.page = page;
                to_query_string(&query)
            },
        )
    }

    #[instrument(skip_all, fields(available_at = ?available_at, filter = ?filter))]
    fn fetch_products(
        &self,
        available_at: Option<DateTime<FixedOffset>>,
        filter: ProductFilter,
    ) -> Result<Vec<Product>> {
        let mut query = ProductsQuery::new(available_at, filter);
        self.fetch_all(&["products"], |page| {
            query.page = page;
            to_query_string(&query)
        })
    }
}
