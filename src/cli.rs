mod account;
mod api;
mod consumption;
mod energy;
mod product;
mod timestamp;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::cli::{
    account::AccountArgs,
    consumption::ConsumptionArgs,
    energy::EnergyArgs,
    product::ProductArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Account(args) => args.run(),
            Command::Consumption(args) => args.run(),
            Command::Product(args) => args.run(),
            Command::Energy(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show the configured account with its properties and meter points.
    Account(AccountArgs),

    /// Electricity consumption of the configured meter.
    Consumption(ConsumptionArgs),

    /// Tariff products.
    Product(ProductArgs),

    /// Offline energy, power, and emission calculations.
    Energy(EnergyArgs),
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize the output")?;
    println!("{json}");
    Ok(())
}
