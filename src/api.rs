//! Authenticated, paginated access to the Octopus Energy REST API.

mod client;
mod config;
mod page;
mod query;
mod transport;

pub use self::{
    client::{ApiClient, EnergyClient},
    config::ClientConfig,
    page::Page,
    transport::{HttpTransport, Request, Response, Transport},
};
