use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::config::Config;
use crate::errors::ApiError;
use crate::handlers::transfers::service::TransferService;
use crate::providers::Providers;
use crate::storage;
use crate::validation::{Pagination, PaginationQuery};

/// GET /transfers - Returns recent token transfers with resolved images
///
/// # Returns
/// JSON array of Transfer objects, newest first
pub async fn get_transfers_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /transfers request");

    let pagination = Pagination::from_query(&query)
        .map_err(|details| ApiError::validation("Invalid query parameters", details))?;

    match TransferService::get_transfers(&providers, pagination.limit).await {
        Ok(transfers) => {
            info!("Successfully retrieved {} transfers", transfers.len());

            storage::save_debug_file(
                &config.debug,
                &format!(
                    "transfers-{}-{}.json",
                    pagination.limit,
                    storage::timestamp()
                ),
                &transfers,
            )
            .await;

            Ok(HttpResponse::Ok().json(transfers))
        }
        Err(e) => {
            error!("Failed to retrieve transfers: {}", e);
            Err(e)
        }
    }
}

/// GET /transactions - Returns recent transactions as provider-shaped JSON
pub async fn get_transactions_handler(
    providers: web::Data<Providers>,
    config: web::Data<Config>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /transactions request");

    let pagination = Pagination::from_query(&query)
        .map_err(|details| ApiError::validation("Invalid query parameters", details))?;

    match TransferService::get_transactions(&providers, pagination.limit).await {
        Ok(transactions) => {
            storage::save_debug_file(
                &config.debug,
                &format!(
                    "transactions-{}-{}.json",
                    pagination.limit,
                    storage::timestamp()
                ),
                &transactions,
            )
            .await;

            Ok(HttpResponse::Ok().json(transactions))
        }
        Err(e) => {
            error!("Failed to retrieve transactions: {}", e);
            Err(e)
        }
    }
}
