use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::config::Config;
use crate::errors::ApiError;
use crate::handlers::tokens::service::TokenService;
use crate::providers::Providers;
use crate::storage;
use crate::validation::{
    parse_address_list, validate_token_id, AddressListQuery, Pagination, PaginationQuery,
};

/// GET /tokens - Returns the requested page of Solana tokens
///
/// # Returns
/// JSON array of TokenMeta objects
pub async fn get_tokens_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /tokens request");

    let pagination = Pagination::from_query(&query)
        .map_err(|details| ApiError::validation("Invalid query parameters", details))?;

    match TokenService::get_solana_tokens(&providers, pagination).await {
        Ok(tokens) => {
            info!("Successfully retrieved {} tokens", tokens.len());

            storage::save_debug_file(&config.debug, "solana-coin-list.json", &tokens).await;

            Ok(HttpResponse::Ok().json(tokens))
        }
        Err(e) => {
            error!("Failed to retrieve tokens: {}", e);
            Err(e)
        }
    }
}

/// GET /tokens/prices?addresses=a,b,c - Returns prices in request order
///
/// # Returns
/// JSON array of TokenPrice objects, one per requested address
pub async fn get_token_prices_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    query: web::Query<AddressListQuery>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /tokens/prices request");

    let addresses = parse_address_list(&query)
        .map_err(|details| ApiError::validation("Invalid query parameters", details))?;

    match TokenService::get_token_prices(&providers, &addresses).await {
        Ok(prices) => {
            info!("Successfully retrieved {} prices", prices.len());

            storage::save_debug_file(
                &config.debug,
                &format!("token-prices-{}.json", addresses.join(",")),
                &prices,
            )
            .await;

            Ok(HttpResponse::Ok().json(prices))
        }
        Err(e) => {
            error!("Failed to retrieve prices: {}", e);
            Err(e)
        }
    }
}

/// GET /tokens/prices/token/{id} - Returns the price of a single token
pub async fn get_token_price_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let token_id = path.into_inner();
    info!("Handling GET /tokens/prices/token/{} request", token_id);

    validate_token_id(&token_id)
        .map_err(|details| ApiError::validation("Invalid route parameters", details))?;

    match TokenService::get_token_price(&providers, &token_id).await {
        Ok(price) => {
            storage::save_debug_file(
                &config.debug,
                &format!("token-price-{}.json", token_id),
                &price,
            )
            .await;

            Ok(HttpResponse::Ok().json(price))
        }
        Err(e) => {
            error!("Failed to retrieve price for {}: {}", token_id, e);
            Err(e)
        }
    }
}

/// GET /tokens/markets/{id} - Returns market data for one coin id
pub async fn get_market_data_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    path: web::Path<String>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    info!("Handling GET /tokens/markets/{} request", id);

    validate_token_id(&id)
        .map_err(|details| ApiError::validation("Invalid route parameters", details))?;
    // The limit is bounds-checked but the provider call always asks for a
    // single record.
    Pagination::from_query(&query)
        .map_err(|details| ApiError::validation("Invalid query parameters", details))?;

    match TokenService::get_market_data(&providers, &id).await {
        Ok(market_data) => {
            storage::save_debug_file(
                &config.debug,
                &format!("token-market-{}.json", id),
                &market_data,
            )
            .await;

            Ok(HttpResponse::Ok().json(market_data))
        }
        Err(e) => {
            error!("Failed to retrieve market data for {}: {}", id, e);
            Err(e)
        }
    }
}
