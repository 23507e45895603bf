use anyhow::Context;
use clap::Parser;
use octopus_energy::EnergyClient;

use crate::cli::{api::ApiArgs, print_json};

#[derive(Parser)]
pub struct AccountArgs {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(long = "account", env = "OCTOPUS_ENERGY_ACCOUNT_NUMBER")]
    account_number: String,
}

impl AccountArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let account = self
            .api
            .client()?
            .fetch_account(&self.account_number)
            .with_context(|| format!("failed to fetch the account `{}`", self.account_number))?;
        print_json(&account)
    }
}
