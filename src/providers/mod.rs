pub mod bitquery;
pub mod coingecko;
pub mod descriptor;
pub mod sim;

pub use bitquery::BitqueryApi;
pub use coingecko::CoinGeckoApi;
pub use descriptor::execute;
pub use sim::SimApi;

use anyhow::Result;

use crate::config::ProvidersConfig;

/// All provider adapters plus the shared outbound HTTP client, constructed
/// once at startup and handed to handlers through `web::Data`.
pub struct Providers {
    pub http: reqwest::Client,
    pub sim: SimApi,
    pub coingecko: CoinGeckoApi,
    pub bitquery: BitqueryApi,
}

impl Providers {
    pub fn new(config: &ProvidersConfig) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            sim: SimApi::new(&config.sim)?,
            coingecko: CoinGeckoApi::new(&config.coingecko)?,
            bitquery: BitqueryApi::new(&config.bitquery)?,
        })
    }
}
