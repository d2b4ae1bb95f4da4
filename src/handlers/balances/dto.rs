use serde::{Deserialize, Serialize};

/// Upstream balances payload. The provider wraps the rows in a `balances`
/// field and names everything snake_case.
#[derive(Debug, Deserialize)]
pub struct RawBalancesResponse {
    pub balances: Vec<RawBalance>,
}

#[derive(Debug, Deserialize)]
pub struct RawBalance {
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub amount: String,
    pub balance: String,
    pub value_usd: String,
    pub raw_balance: String,
    pub decimals: u32,
}

/// Response model for the balances endpoint. Token amounts stay as decimal
/// strings: raw integer amounts can exceed what f64 represents exactly.
/// `valueUsd` is the one numeric field, per the client contract.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub amount: String,
    pub balance: String,
    pub value_usd: f64,
    pub raw_balance: String,
    pub decimals: u32,
}
