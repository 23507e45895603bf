use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use octopus_energy::{
    EnergyClient,
    model::{ProductFacet, ProductFilter},
};

use crate::cli::{api::ApiArgs, print_json, timestamp};

#[derive(Parser)]
pub struct ProductArgs {
    #[command(subcommand)]
    command: ProductCommand,
}

impl ProductArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            ProductCommand::List(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
enum ProductCommand {
    /// List the products, optionally requiring some facets.
    List(ListArgs),
}

#[derive(Parser)]
struct ListArgs {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(short, long)]
    variable: bool,

    #[clap(short, long)]
    green: bool,

    #[clap(short, long)]
    tracker: bool,

    #[clap(short, long)]
    prepay: bool,

    #[clap(short, long)]
    business: bool,

    /// Only products available at this moment.
    #[clap(long, value_parser = timestamp::parse)]
    at: Option<DateTime<FixedOffset>>,
}

impl ListArgs {
    fn filter(&self) -> ProductFilter {
        [
            (self.variable, ProductFacet::Variable),
            (self.green, ProductFacet::Green),
            (self.tracker, ProductFacet::Tracker),
            (self.prepay, ProductFacet::Prepay),
            (self.business, ProductFacet::Business),
        ]
        .into_iter()
        .filter_map(|(is_selected, facet)| is_selected.then_some(facet))
        .collect()
    }

    fn run(self) -> anyhow::Result<()> {
        let products = self
            .api
            .client()?
            .fetch_products(self.at, self.filter())
            .context("failed to fetch the products")?;
        print_json(&products)
    }
}
