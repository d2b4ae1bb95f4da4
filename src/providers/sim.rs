use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::config::SimConfig;
use crate::providers::descriptor::RequestDescriptor;

/// Number of balance rows requested from the provider per wallet.
const BALANCES_FETCH_LIMIT: u32 = 100;

/// Adapter for the wallet-balance provider. Holds the validated base URL
/// and the pre-built auth headers; building a request performs no I/O.
pub struct SimApi {
    base_url: String,
    headers: HeaderMap,
}

impl SimApi {
    pub fn new(config: &SimConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(anyhow!("Sim API key is not set"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-API-KEY",
            HeaderValue::from_str(&config.api_key).context("Invalid Sim API key")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Parse once so request builders only ever see a valid base.
        Url::parse(&config.base_url).context("Invalid Sim base URL")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// GET /balances/{address} limited to the Solana chain.
    pub fn balances_request(&self, address: &str) -> Result<RequestDescriptor> {
        let mut url = Url::parse(&format!("{}/balances/{}", self.base_url, address))?;
        url.query_pairs_mut()
            .append_pair("chains", "solana")
            .append_pair("limit", &BALANCES_FETCH_LIMIT.to_string());

        Ok(RequestDescriptor::get(url, self.headers.clone()))
    }
}
