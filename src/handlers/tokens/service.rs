use log::debug;
use std::collections::HashMap;

use crate::errors::ApiError;
use crate::handlers::tokens::dto::{
    RawCoinListItem, RawMarketData, RawTokenPrice, TokenMarketData, TokenMeta, TokenPrice,
};
use crate::providers::{execute, Providers};
use crate::validation::Pagination;

/// Service layer for token metadata, prices and market data.
pub struct TokenService;

impl TokenService {
    /// Fetch the multi-chain coin list and reduce it to the requested page
    /// of Solana tokens.
    pub async fn get_solana_tokens(
        providers: &Providers,
        pagination: Pagination,
    ) -> Result<Vec<TokenMeta>, ApiError> {
        debug!("Fetching coin list, pagination {:?}", pagination);

        let descriptor = providers.coingecko.coin_list_request()?;
        let raw: Vec<RawCoinListItem> =
            execute(&providers.http, descriptor, "Fetching Solana tokens").await?;

        Ok(Self::normalize_coin_list(raw, pagination))
    }

    /// Fetch prices for a caller-ordered list of mint addresses. Any
    /// address the provider has no price for fails the whole request.
    pub async fn get_token_prices(
        providers: &Providers,
        addresses: &[String],
    ) -> Result<Vec<TokenPrice>, ApiError> {
        debug!("Fetching prices for {} addresses", addresses.len());

        let descriptor = providers
            .coingecko
            .token_price_request(&addresses.join(","))?;
        let raw: HashMap<String, RawTokenPrice> =
            execute(&providers.http, descriptor, "Fetching token prices").await?;

        Self::normalize_price_list(&raw, addresses)
    }

    /// Fetch the price of a single token by mint address.
    pub async fn get_token_price(
        providers: &Providers,
        address: &str,
    ) -> Result<TokenPrice, ApiError> {
        debug!("Fetching price for token {}", address);

        let descriptor = providers.coingecko.token_price_request(address)?;
        let raw: HashMap<String, RawTokenPrice> =
            execute(&providers.http, descriptor, "Fetching token price").await?;

        raw.get(address)
            .map(Self::normalize_price)
            .ok_or_else(|| ApiError::NotFound("Token price not found".to_string()))
    }

    /// Fetch market data for one coin id. The provider answers with a
    /// batch array; only its first record is used.
    pub async fn get_market_data(
        providers: &Providers,
        id: &str,
    ) -> Result<TokenMarketData, ApiError> {
        debug!("Fetching market data for {}", id);

        let descriptor = providers.coingecko.markets_request(id)?;
        let raw: Vec<RawMarketData> =
            execute(&providers.http, descriptor, "Fetching market data").await?;

        raw.into_iter()
            .next()
            .map(Self::normalize_market_data)
            .ok_or_else(|| ApiError::NotFound("Market data not found".to_string()))
    }

    /// Keep only entries with a Solana platform address, then apply the
    /// pagination window. Filtering must happen before the window so the
    /// page is a slice of the filtered set.
    fn normalize_coin_list(raw: Vec<RawCoinListItem>, pagination: Pagination) -> Vec<TokenMeta> {
        raw.into_iter()
            .filter_map(|item| {
                let address = item.platforms.and_then(|p| p.solana)?;
                if address.is_empty() {
                    return None;
                }
                Some(TokenMeta {
                    name: item.name,
                    symbol: item.symbol,
                    address,
                    is_native: None,
                    is_wrapped: None,
                    image_url: None,
                })
            })
            .skip(pagination.offset)
            .take(pagination.limit)
            .collect()
    }

    fn normalize_price(raw: &RawTokenPrice) -> TokenPrice {
        TokenPrice {
            usd: raw.usd,
            usd_market_cap: raw.usd_market_cap,
            usd_24h_vol: raw.usd_24h_vol,
            usd_24h_change: raw.usd_24h_change,
        }
    }

    /// Produce one price per requested address, in the caller's order.
    fn normalize_price_list(
        raw: &HashMap<String, RawTokenPrice>,
        addresses: &[String],
    ) -> Result<Vec<TokenPrice>, ApiError> {
        addresses
            .iter()
            .map(|address| {
                raw.get(address)
                    .map(Self::normalize_price)
                    .ok_or_else(|| ApiError::NotFound("Token price not found".to_string()))
            })
            .collect()
    }

    fn normalize_market_data(raw: RawMarketData) -> TokenMarketData {
        TokenMarketData {
            current_price: raw.current_price,
            market_cap: raw.market_cap,
            market_cap_rank: raw.market_cap_rank,
            fully_diluted_valuation: raw.fully_diluted_valuation,
            total_volume: raw.total_volume,
            high_24h: raw.high_24h,
            low_24h: raw.low_24h,
            price_change_24h: raw.price_change_24h,
            price_change_percentage_24h: raw.price_change_percentage_24h,
            market_cap_change_24h: raw.market_cap_change_24h,
            market_cap_change_percentage_24h: raw.market_cap_change_percentage_24h,
            circulating_supply: raw.circulating_supply,
            total_supply: raw.total_supply,
            max_supply: raw.max_supply,
            ath: raw.ath,
            ath_change_percentage: raw.ath_change_percentage,
            atl: raw.atl,
            atl_change_percentage: raw.atl_change_percentage,
        }
    }
}
