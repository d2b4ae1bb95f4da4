use chrono::DateTime;
use futures::future::join_all;
use log::debug;

use crate::errors::ApiError;
use crate::handlers::tokens::dto::TokenMeta;
use crate::handlers::transfers::dto::{
    RawTokenMetadata, RawTransferEntry, RawTransfersResponse, Transfer,
};
use crate::providers::{execute, Providers};

/// Service layer for the transaction-graph endpoints.
pub struct TransferService;

impl TransferService {
    /// Fetch the most recent token transfers and resolve each token's
    /// off-chain image. Image fetches run concurrently; their count equals
    /// the already-validated `limit`, so the fan-out is bounded by it.
    pub async fn get_transfers(
        providers: &Providers,
        limit: usize,
    ) -> Result<Vec<Transfer>, ApiError> {
        debug!("Fetching {} transfers", limit);

        let descriptor = providers.bitquery.transfers_request(limit);
        let raw: RawTransfersResponse =
            execute(&providers.http, descriptor, "Fetching transfers").await?;

        let transfers = join_all(
            raw.data
                .solana
                .transfers
                .into_iter()
                .map(|entry| Self::normalize_transfer(&providers.http, entry)),
        )
        .await;

        transfers.into_iter().collect()
    }

    /// Fetch recent transactions and pass the provider's JSON through
    /// unchanged; the transaction shape already matches the client schema.
    pub async fn get_transactions(
        providers: &Providers,
        limit: usize,
    ) -> Result<serde_json::Value, ApiError> {
        debug!("Fetching {} transactions", limit);

        let descriptor = providers.bitquery.transactions_request(limit);
        execute(&providers.http, descriptor, "Fetching transactions").await
    }

    async fn normalize_transfer(
        client: &reqwest::Client,
        entry: RawTransferEntry,
    ) -> Result<Transfer, ApiError> {
        let image_url = match entry.transfer.currency.uri.as_deref() {
            Some(uri) if !uri.is_empty() => Self::fetch_token_image(client, uri).await,
            _ => String::new(),
        };

        Self::assemble_transfer(entry, image_url)
    }

    /// Pure assembly of one transfer record from the raw entry and the
    /// already-resolved image URL.
    fn assemble_transfer(
        entry: RawTransferEntry,
        image_url: String,
    ) -> Result<Transfer, ApiError> {
        let time = DateTime::parse_from_rfc3339(&entry.block.time)
            .map(|t| t.timestamp())
            .map_err(|_| {
                ApiError::Internal(format!(
                    "Upstream sent an unparseable block time: {}",
                    entry.block.time
                ))
            })?;

        let transfer = entry.transfer;

        // The provider occasionally sends an empty AmountInUSD
        let amount = transfer.amount.parse::<f64>().unwrap_or(0.0);
        let amount_usd = transfer.amount_in_usd.parse::<f64>().unwrap_or(0.0);

        Ok(Transfer {
            from: transfer.sender.address,
            to: transfer.receiver.address,
            amount,
            amount_usd,
            time,
            token_meta: TokenMeta {
                name: transfer.currency.name,
                symbol: transfer.currency.symbol,
                address: transfer.currency.mint_address,
                is_native: Some(transfer.currency.native),
                is_wrapped: Some(transfer.currency.wrapped),
                image_url: Some(image_url),
            },
        })
    }

    /// Resolve a token's metadata URI to its image URL. Best-effort: any
    /// failure degrades to an empty string and never fails the transfer.
    async fn fetch_token_image(client: &reqwest::Client, uri: &str) -> String {
        let response = match client.get(uri).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!("Token metadata fetch returned {}: {}", response.status(), uri);
                return String::new();
            }
            Err(e) => {
                debug!("Token metadata fetch failed for {}: {}", uri, e);
                return String::new();
            }
        };

        match response.json::<RawTokenMetadata>().await {
            Ok(metadata) => metadata.image.unwrap_or_default(),
            Err(e) => {
                debug!("Token metadata decode failed for {}: {}", uri, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::transfers::dto::{RawAccount, RawBlock, RawCurrency, RawTransfer};
    use actix_web::{web, App, HttpResponse};

    fn raw_entry(time: &str) -> RawTransferEntry {
        RawTransferEntry {
            transfer: RawTransfer {
                amount: "0.5".to_string(),
                amount_in_usd: "75.25".to_string(),
                sender: RawAccount {
                    address: "sender-address".to_string(),
                },
                receiver: RawAccount {
                    address: "receiver-address".to_string(),
                },
                currency: RawCurrency {
                    name: "Wrapped SOL".to_string(),
                    symbol: "WSOL".to_string(),
                    mint_address: "So11111111111111111111111111111111111111112".to_string(),
                    native: false,
                    wrapped: true,
                    uri: None,
                },
            },
            block: RawBlock {
                time: time.to_string(),
            },
        }
    }

    #[test]
    fn test_assemble_transfer() {
        let transfer = TransferService::assemble_transfer(
            raw_entry("2026-08-23T12:00:00Z"),
            "https://img.example.com/wsol.png".to_string(),
        )
        .unwrap();

        assert_eq!(transfer.from, "sender-address");
        assert_eq!(transfer.to, "receiver-address");
        assert_eq!(transfer.amount, 0.5);
        assert_eq!(transfer.amount_usd, 75.25);
        assert_eq!(transfer.time, 1787486400);
        assert_eq!(transfer.token_meta.symbol, "WSOL");
        assert_eq!(transfer.token_meta.is_wrapped, Some(true));
        assert_eq!(
            transfer.token_meta.image_url.as_deref(),
            Some("https://img.example.com/wsol.png")
        );
    }

    #[test]
    fn test_assemble_transfer_empty_image_survives() {
        let transfer =
            TransferService::assemble_transfer(raw_entry("2026-08-23T12:00:00Z"), String::new())
                .unwrap();

        assert_eq!(transfer.token_meta.image_url.as_deref(), Some(""));
    }

    #[test]
    fn test_assemble_transfer_defaults_unparseable_amounts() {
        let mut entry = raw_entry("2026-08-23T12:00:00Z");
        entry.transfer.amount_in_usd = String::new();

        let transfer = TransferService::assemble_transfer(entry, String::new()).unwrap();
        assert_eq!(transfer.amount_usd, 0.0);
        assert_eq!(transfer.amount, 0.5);
    }

    #[test]
    fn test_assemble_transfer_rejects_bad_block_time() {
        let err = TransferService::assemble_transfer(raw_entry("not-a-time"), String::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_transfer_serializes_camel_case() {
        let transfer = TransferService::assemble_transfer(
            raw_entry("2026-08-23T12:00:00Z"),
            String::new(),
        )
        .unwrap();

        let json = serde_json::to_value(&transfer).unwrap();
        assert!(json.get("amountUsd").is_some());
        assert!(json.get("tokenMeta").is_some());
        assert!(json["tokenMeta"].get("isNative").is_some());
    }

    #[actix_web::test]
    async fn test_unreachable_metadata_uri_degrades_to_empty_image() {
        let mut entry = raw_entry("2026-08-23T12:00:00Z");
        // Nothing listens on the discard port
        entry.transfer.currency.uri = Some("http://127.0.0.1:9/token.json".to_string());

        let client = reqwest::Client::new();
        let transfer = TransferService::normalize_transfer(&client, entry)
            .await
            .unwrap();

        assert_eq!(transfer.token_meta.image_url.as_deref(), Some(""));
        assert_eq!(transfer.from, "sender-address");
        assert_eq!(transfer.amount, 0.5);
    }

    #[actix_web::test]
    async fn test_metadata_error_status_degrades_to_empty_image() {
        let srv = actix_test::start(|| {
            App::new().route(
                "/token.json",
                web::get().to(|| async { HttpResponse::InternalServerError().finish() }),
            )
        });

        let mut entry = raw_entry("2026-08-23T12:00:00Z");
        entry.transfer.currency.uri = Some(srv.url("/token.json"));

        let client = reqwest::Client::new();
        let transfer = TransferService::normalize_transfer(&client, entry)
            .await
            .unwrap();

        assert_eq!(transfer.token_meta.image_url.as_deref(), Some(""));
    }

    #[actix_web::test]
    async fn test_metadata_uri_resolves_to_image() {
        let srv = actix_test::start(|| {
            App::new().route(
                "/token.json",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .json(serde_json::json!({"image": "https://img.example.com/wsol.png"}))
                }),
            )
        });

        let mut entry = raw_entry("2026-08-23T12:00:00Z");
        entry.transfer.currency.uri = Some(srv.url("/token.json"));

        let client = reqwest::Client::new();
        let transfer = TransferService::normalize_transfer(&client, entry)
            .await
            .unwrap();

        assert_eq!(
            transfer.token_meta.image_url.as_deref(),
            Some("https://img.example.com/wsol.png")
        );
    }
}
