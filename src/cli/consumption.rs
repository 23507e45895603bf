use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use octopus_energy::{
    ApiClient,
    Repository,
    model::{ConsumptionRecord, Grouping, Period},
};

use crate::{
    cli::{
        api::{ApiArgs, MeterArgs},
        print_json,
        timestamp,
    },
    tables::build_consumption_table,
};

#[derive(Parser)]
pub struct ConsumptionArgs {
    #[command(subcommand)]
    command: ConsumptionCommand,
}

impl ConsumptionArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            ConsumptionCommand::List(args) => args.run(),
            ConsumptionCommand::Max(args) => args.run(Extreme::Max),
            ConsumptionCommand::Min(args) => args.run(Extreme::Min),
            ConsumptionCommand::Total(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
enum ConsumptionCommand {
    /// List the consumption records.
    List(ListArgs),

    /// Show the record with the highest consumption.
    Max(ExtremeArgs),

    /// Show the record with the lowest consumption.
    Min(ExtremeArgs),

    /// Sum the consumption over the period.
    Total(TotalArgs),
}

#[derive(Parser)]
struct CommonArgs {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(flatten)]
    meter: MeterArgs,

    /// Period start, RFC 3339 or `YYYY-MM-DD[THH:MM:SS]` in UTC.
    #[clap(long, value_parser = timestamp::parse)]
    from: Option<DateTime<FixedOffset>>,

    /// Period end, same format as `--from`.
    #[clap(long, value_parser = timestamp::parse)]
    to: Option<DateTime<FixedOffset>>,

    /// Report CO2-equivalent mass in kg instead of energy in kWh.
    #[clap(long)]
    co2: bool,
}

impl CommonArgs {
    fn repository(self) -> anyhow::Result<(Repository<ApiClient>, Period, bool)> {
        let period = Period::builder().maybe_from(self.from).maybe_to(self.to).build();
        let repository = Repository::new(self.api.client()?, self.meter.into());
        Ok((repository, period, self.co2))
    }
}

fn convert(record: ConsumptionRecord, co2: bool) -> anyhow::Result<ConsumptionRecord> {
    if co2 { Ok(record.to_co2()?) } else { Ok(record) }
}

#[derive(Parser)]
struct ListArgs {
    #[clap(flatten)]
    common: CommonArgs,

    #[clap(long, value_enum, default_value_t = Grouping::HalfHour)]
    group: Grouping,

    /// Print a table instead of JSON.
    #[clap(long)]
    table: bool,
}

impl ListArgs {
    fn run(self) -> anyhow::Result<()> {
        let (repository, period, co2) = self.common.repository()?;
        let records = repository
            .consumption(period, self.group)
            .with_context(|| format!("failed to fetch the consumption of `{}`", repository.meter()))?
            .into_iter()
            .map(|record| convert(record, co2))
            .collect::<anyhow::Result<Vec<_>>>()?;
        if self.table {
            println!("{}", build_consumption_table(&records, if co2 { "kg CO2e" } else { "kWh" }));
            Ok(())
        } else {
            print_json(&records)
        }
    }
}

#[derive(Copy, Clone)]
enum Extreme {
    Max,
    Min,
}

#[derive(Parser)]
struct ExtremeArgs {
    #[clap(flatten)]
    common: CommonArgs,

    #[clap(long, value_enum, default_value_t = Grouping::HalfHour)]
    group: Grouping,
}

impl ExtremeArgs {
    fn run(self, extreme: Extreme) -> anyhow::Result<()> {
        let (repository, period, co2) = self.common.repository()?;
        let record = match extreme {
            Extreme::Max => repository.max_consumption(period, self.group),
            Extreme::Min => repository.min_consumption(period, self.group),
        }
        .context("failed to aggregate the consumption")?;
        print_json(&convert(record, co2)?)
    }
}

#[derive(Parser)]
struct TotalArgs {
    #[clap(flatten)]
    common: CommonArgs,
}

impl TotalArgs {
    fn run(self) -> anyhow::Result<()> {
        let (repository, period, co2) = self.common.repository()?;
        let record = repository.total_consumption(period).context("failed to total the consumption")?;
        print_json(&convert(record, co2)?)
    }
}
