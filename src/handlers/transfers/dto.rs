use serde::{Deserialize, Serialize};

use crate::handlers::tokens::dto::TokenMeta;

/// GraphQL responses arrive wrapped in a `data` field; the transfer rows
/// sit under `Solana.Transfers` with PascalCase naming throughout.
#[derive(Debug, Deserialize)]
pub struct RawTransfersResponse {
    pub data: RawTransfersData,
}

#[derive(Debug, Deserialize)]
pub struct RawTransfersData {
    #[serde(rename = "Solana")]
    pub solana: RawSolanaTransfers,
}

#[derive(Debug, Deserialize)]
pub struct RawSolanaTransfers {
    #[serde(rename = "Transfers")]
    pub transfers: Vec<RawTransferEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawTransferEntry {
    #[serde(rename = "Transfer")]
    pub transfer: RawTransfer,
    #[serde(rename = "Block")]
    pub block: RawBlock,
}

#[derive(Debug, Deserialize)]
pub struct RawTransfer {
    #[serde(rename = "Amount", default)]
    pub amount: String,
    #[serde(rename = "AmountInUSD", default)]
    pub amount_in_usd: String,
    #[serde(rename = "Sender")]
    pub sender: RawAccount,
    #[serde(rename = "Receiver")]
    pub receiver: RawAccount,
    #[serde(rename = "Currency")]
    pub currency: RawCurrency,
}

#[derive(Debug, Deserialize)]
pub struct RawAccount {
    #[serde(rename = "Address")]
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct RawCurrency {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Symbol", default)]
    pub symbol: String,
    #[serde(rename = "MintAddress", default)]
    pub mint_address: String,
    #[serde(rename = "Native", default)]
    pub native: bool,
    #[serde(rename = "Wrapped", default)]
    pub wrapped: bool,
    #[serde(rename = "Uri", default)]
    pub uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "Time")]
    pub time: String,
}

/// Off-chain token metadata document resolved from `Currency.Uri`.
#[derive(Debug, Default, Deserialize)]
pub struct RawTokenMetadata {
    #[serde(default)]
    pub image: Option<String>,
}

/// Response model for the transfers endpoint.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub amount_usd: f64,
    /// Block time as unix seconds.
    pub time: i64,
    pub token_meta: TokenMeta,
}
