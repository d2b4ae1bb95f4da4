use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::config::Config;
use crate::errors::ApiError;
use crate::handlers::balances::service::BalanceService;
use crate::providers::Providers;
use crate::storage;
use crate::validation::validate_wallet_address;

/// GET /balances - Probe endpoint for the balances group
pub async fn balances_index_handler() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Balances endpoint" })))
}

/// GET /balances/{address} - Returns native and SPL token balances of a wallet
///
/// # Returns
/// JSON array of TokenBalance objects
pub async fn get_balances_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let address = path.into_inner();
    info!("Handling GET /balances/{} request", address);

    validate_wallet_address(&address)
        .map_err(|details| ApiError::validation("Invalid route parameters", details))?;

    match BalanceService::get_balances(&providers, &address).await {
        Ok(balances) => {
            info!("Successfully retrieved {} balances", balances.len());

            storage::save_debug_file(
                &config.debug,
                &format!("balance-{}.json", address),
                &balances,
            )
            .await;

            Ok(HttpResponse::Ok().json(balances))
        }
        Err(e) => {
            error!("Failed to retrieve balances: {}", e);
            Err(e)
        }
    }
}
