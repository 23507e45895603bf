//! Query strings of the paginated collections.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Serialize;

use crate::{
    model::{Grouping, Period, ProductFacet, ProductFilter},
    prelude::*,
};

#[serde_with::skip_serializing_none]
#[derive(Serialize)]
pub struct ConsumptionQuery {
    /// Sent in UTC without an offset.
    pub period_from: Option<NaiveDateTime>,

    pub period_to: Option<NaiveDateTime>,
    pub page: u32,
    pub group_by: Option<&'static str>,
}

impl ConsumptionQuery {
    pub fn new(period: Period, grouping: Grouping) -> Self {
        Self {
            period_from: period.from.map(|from| from.naive_utc()),
            period_to: period.to.map(|to| to.naive_utc()),
            page: 1,
            group_by: grouping.as_query_value(),
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Serialize)]
pub struct ProductsQuery {
    pub is_variable: Option<bool>,
    pub is_green: Option<bool>,
    pub is_tracker: Option<bool>,
    pub is_prepay: Option<bool>,
    pub is_business: Option<bool>,
    pub available_at: Option<NaiveDateTime>,
    pub page: u32,
}

impl ProductsQuery {
    pub fn new(available_at: Option<DateTime<FixedOffset>>, filter: ProductFilter) -> Self {
        let facet = |facet: ProductFacet| filter.contains(facet).then_some(true);
        Self {
            is_variable: facet(ProductFacet::Variable),
            is_green: facet(ProductFacet::Green),
            is_tracker: facet(ProductFacet::Tracker),
            is_prepay: facet(ProductFacet::Prepay),
            is_business: facet(ProductFacet::Business),
            available_at: available_at.map(|at| at.naive_utc()),
            page: 1,
        }
    }
}

pub fn to_query_string<Q: Serialize>(query: &Q) -> Result<String> {
    serde_qs::to_string(query)
        .map_err(|error| Error::InvalidArgument(format!("failed to build the query: {error}")))
}
