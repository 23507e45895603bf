use clap::{Parser, Subcommand};
use octopus_energy::{
    Quantity,
    Unit,
    energy::{energy_from_power, power_from_energy, to_co2},
};

use crate::cli::print_json;

#[derive(Parser)]
pub struct EnergyArgs {
    #[command(subcommand)]
    command: EnergyCommand,
}

impl EnergyArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let quantity = match self.command {
            EnergyCommand::Convert(args) => Quantity::new(args.amount, args.from).to(args.to)?,
            EnergyCommand::Co2(args) => {
                Quantity::new(to_co2(Quantity::new(args.amount, args.unit))?, Unit::Kilogram)
            }
            EnergyCommand::Power(args) => Quantity::new(
                power_from_energy(
                    Quantity::new(args.energy, args.energy_unit),
                    Quantity::new(args.duration, args.duration_unit),
                    args.to,
                )?,
                args.to,
            ),
            EnergyCommand::FromPower(args) => Quantity::new(
                energy_from_power(
                    Quantity::new(args.power, args.power_unit),
                    Quantity::new(args.duration, args.duration_unit),
                    args.to,
                )?,
                args.to,
            ),
        };
        print_json(&quantity)
    }
}

#[derive(Subcommand)]
enum EnergyCommand {
    /// Convert a quantity between units of the same dimension.
    Convert(ConvertArgs),

    /// CO2-equivalent mass of the energy drawn from the grid.
    Co2(Co2Args),

    /// Average power from energy and duration.
    Power(PowerArgs),

    /// Energy from power and duration.
    FromPower(FromPowerArgs),
}

#[derive(Parser)]
struct ConvertArgs {
    amount: f64,

    #[clap(long)]
    from: Unit,

    #[clap(long)]
    to: Unit,
}

#[derive(Parser)]
struct Co2Args {
    amount: f64,

    #[clap(long, default_value = "kWh")]
    unit: Unit,
}

#[derive(Parser)]
struct PowerArgs {
    energy: f64,
    duration: f64,

    #[clap(long, default_value = "kWh")]
    energy_unit: Unit,

    #[clap(long, default_value = "h")]
    duration_unit: Unit,

    #[clap(long, default_value = "W")]
    to: Unit,
}

#[derive(Parser)]
struct FromPowerArgs {
    power: f64,
    duration: f64,

    #[clap(long, default_value = "W")]
    power_unit: Unit,

    #[clap(long, default_value = "h")]
    duration_unit: Unit,

    #[clap(long, default_value = "kWh")]
    to: Unit,
}
