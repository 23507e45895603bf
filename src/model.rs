//! Value objects returned by the backend and produced by the aggregations.

pub mod account;
pub mod consumption;
pub mod grouping;
pub mod product;

pub use self::{
    account::Account,
    consumption::{ConsumptionRecord, MeterId, Period},
    grouping::Grouping,
    product::{Product, ProductFacet, ProductFilter},
};
