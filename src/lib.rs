#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod api;
pub mod energy;
pub mod error;
pub mod model;
pub mod quantity;
pub mod repository;

mod prelude;

pub use self::{
    api::{ApiClient, ClientConfig, EnergyClient},
    error::{Error, Result},
    quantity::{Dimension, Quantity, Unit},
    repository::Repository,
};
