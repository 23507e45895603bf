use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.octopus.energy/v1/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed to talk to the backend, passed explicitly into the client.
#[must_use]
#[derive(Clone, bon::Builder)]
pub struct ClientConfig {
    /// Sent as the Basic auth username with an empty password.
    #[builder(into)]
    pub api_key: String,

    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,

    /// Applies to every request. Timed out requests are not retried.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}
