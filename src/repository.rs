//! Aggregations over the fully fetched collections.

use chrono::{DateTime, FixedOffset};
use ordered_float::OrderedFloat;

use crate::{
    api::EnergyClient,
    model::{Account, ConsumptionRecord, Grouping, MeterId, Period, Product, ProductFilter},
    prelude::*,
};

pub struct Repository<C> {
    client: C,
    meter: MeterId,
}

impl<C: EnergyClient> Repository<C> {
    pub const fn new(client: C, meter: MeterId) -> Self {
        Self { client, meter }
    }

    pub const fn meter(&self) -> &MeterId {
        &self.meter
    }

    pub fn account(&self, account_number: &str) -> Result<Account> {
        self.client.fetch_account(account_number)
    }

    pub fn consumption(&self, period: Period, grouping: Grouping) -> Result<Vec<ConsumptionRecord>> {
        self.client.fetch_consumption(&self.meter, period, grouping)
    }

    /// Record with the greatest value, the first one among equals.
    #[instrument(skip_all, fields(grouping = ?grouping))]
    pub fn max_consumption(&self, period: Period, grouping: Grouping) -> Result<ConsumptionRecord> {
        let record = first_extreme(self.consumption(period, grouping)?, |candidate, best| {
            candidate > best
        })?;
        info!(value = record.value, interval_start = %record.interval_start, "maximum");
        Ok(record)
    }

    /// Record with the smallest value, the first one among equals.
    #[instrument(skip_all, fields(grouping = ?grouping))]
    pub fn min_consumption(&self, period: Period, grouping: Grouping) -> Result<ConsumptionRecord> {
        let record = first_extreme(self.consumption(period, grouping)?, |candidate, best| {
            candidate < best
        })?;
        info!(value = record.value, interval_start = %record.interval_start, "minimum");
        Ok(record)
    }

    /// Sum of all half-hourly values.
    ///
    /// The bounds of the returned record are the period bounds when given,
    /// otherwise the earliest start and the latest end of the fetched records.
    /// Always fetched at the native resolution.
    #[instrument(skip_all)]
    pub fn total_consumption(&self, period: Period) -> Result<ConsumptionRecord> {
        let records = self.consumption(period, Grouping::HalfHour)?;
        let value: f64 = records.iter().map(|record| record.value).sum();
        let interval_start = bound(period.from, records.iter().map(|record| record.interval_start).min())?;
        let interval_end = bound(period.to, records.iter().map(|record| record.interval_end).max())?;
        info!(value, n_records = records.len(), "total");
        Ok(ConsumptionRecord::new(value, interval_start, interval_end))
    }

    pub fn products(
        &self,
        available_at: Option<DateTime<FixedOffset>>,
        filter: ProductFilter,
    ) -> Result<Vec<Product>> {
        self.client.fetch_products(available_at, filter)
    }
}

/// Linear scan keeping the current best unless `replaces` strictly prefers the candidate.
fn first_extreme(
    records: Vec<ConsumptionRecord>,
    replaces: impl Fn(OrderedFloat<f64>, OrderedFloat<f64>) -> bool,
) -> Result<ConsumptionRecord> {
    records
        .into_iter()
        .reduce(|best, candidate| {
            if replaces(OrderedFloat(candidate.value), OrderedFloat(best.value)) {
                candidate
            } else {
                best
            }
        })
        .ok_or(Error::EmptyCollection)
}

fn bound(
    explicit: Option<DateTime<FixedOffset>>,
    observed: Option<DateTime<FixedOffset>>,
) -> Result<DateTime<FixedOffset>> {
    explicit.or(observed).ok_or(Error::EmptyCollection)
}
