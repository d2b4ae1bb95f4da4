use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::config::CoinGeckoConfig;
use crate::providers::descriptor::RequestDescriptor;

/// Adapter for the token metadata/price provider. The demo API key is
/// optional; without it requests still work under public rate limits.
pub struct CoinGeckoApi {
    base_url: String,
    headers: HeaderMap,
}

impl CoinGeckoApi {
    pub fn new(config: &CoinGeckoConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &config.api_key {
            headers.insert(
                "x-cg-demo-api-key",
                HeaderValue::from_str(api_key).context("Invalid CoinGecko API key")?,
            );
        }

        Url::parse(&config.base_url).context("Invalid CoinGecko base URL")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// GET /coins/list with platform contract addresses included.
    pub fn coin_list_request(&self) -> Result<RequestDescriptor> {
        let mut url = self.endpoint("/coins/list")?;
        url.query_pairs_mut().append_pair("include_platform", "true");

        Ok(RequestDescriptor::get(url, self.headers.clone()))
    }

    /// GET /simple/token_price/solana for one or more contract addresses
    /// (comma separated), with market cap, volume and 24h change included.
    pub fn token_price_request(&self, addresses: &str) -> Result<RequestDescriptor> {
        let mut url = self.endpoint("/simple/token_price/solana")?;
        url.query_pairs_mut()
            .append_pair("contract_addresses", addresses)
            .append_pair("vs_currencies", "usd")
            .append_pair("include_market_cap", "true")
            .append_pair("include_24hr_vol", "true")
            .append_pair("include_24hr_change", "true");

        Ok(RequestDescriptor::get(url, self.headers.clone()))
    }

    /// GET /coins/markets for a single coin id. The provider returns a
    /// batch array even for per_page=1.
    pub fn markets_request(&self, id: &str) -> Result<RequestDescriptor> {
        let mut url = self.endpoint("/coins/markets")?;
        url.query_pairs_mut()
            .append_pair("vs_currency", "usd")
            .append_pair("ids", id)
            .append_pair("order", "market_cap_desc")
            .append_pair("per_page", "1")
            .append_pair("page", "1")
            .append_pair("price_change_percentage", "1h");

        Ok(RequestDescriptor::get(url, self.headers.clone()))
    }
}
