use anyhow::Context;
use clap::Parser;
use octopus_energy::{ApiClient, ClientConfig, model::MeterId};

#[derive(Parser)]
pub struct ApiArgs {
    #[clap(long = "api-key", env = "OCTOPUS_ENERGY_API_KEY", hide_env_values = true)]
    api_key: String,
}

impl ApiArgs {
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        let config = ClientConfig::builder().api_key(&self.api_key).build();
        ApiClient::new(&config).context("failed to create the API client")
    }
}

#[derive(Parser)]
pub struct MeterArgs {
    /// Meter point administration number.
    #[clap(long, env = "OCTOPUS_ENERGY_METER_MPAN")]
    mpan: String,

    #[clap(long = "serial", alias = "serial-number", env = "OCTOPUS_ENERGY_METER_SERIAL")]
    serial_number: String,
}

impl From<MeterArgs> for MeterId {
    fn from(args: MeterArgs) -> Self {
        Self { mpan: args.mpan, serial_number: args.serial_number }
    }
}
