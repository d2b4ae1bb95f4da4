use log::debug;

use crate::errors::ApiError;
use crate::handlers::balances::dto::{RawBalance, RawBalancesResponse, TokenBalance};
use crate::providers::{execute, Providers};

/// Service layer for wallet balance lookups.
pub struct BalanceService;

impl BalanceService {
    /// Fetch and normalize the Solana token balances of a wallet.
    pub async fn get_balances(
        providers: &Providers,
        address: &str,
    ) -> Result<Vec<TokenBalance>, ApiError> {
        debug!("Fetching balances for wallet {}", address);

        let descriptor = providers.sim.balances_request(address)?;
        let raw: RawBalancesResponse =
            execute(&providers.http, descriptor, "Fetching balances").await?;

        raw.balances
            .into_iter()
            .map(Self::normalize_balance)
            .collect()
    }

    /// Map one upstream balance row into the client shape. `value_usd`
    /// arrives as a string and is coerced to a number.
    fn normalize_balance(raw: RawBalance) -> Result<TokenBalance, ApiError> {
        let value_usd = raw.value_usd.parse::<f64>().map_err(|_| {
            ApiError::Internal(format!(
                "Upstream sent a non-numeric value_usd for token {}",
                raw.address
            ))
        })?;

        Ok(TokenBalance {
            name: raw.name,
            symbol: raw.symbol,
            address: raw.address,
            amount: raw.amount,
            balance: raw.balance,
            value_usd,
            raw_balance: raw.raw_balance,
            decimals: raw.decimals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_sol_balance() -> RawBalance {
        RawBalance {
            name: "SOL".to_string(),
            symbol: "SOL".to_string(),
            address: "native".to_string(),
            amount: "1000000000".to_string(),
            balance: "1".to_string(),
            value_usd: "150.00".to_string(),
            raw_balance: "1000000000".to_string(),
            decimals: 9,
        }
    }

    #[test]
    fn test_normalize_balance_coerces_value_usd() {
        let balance = BalanceService::normalize_balance(raw_sol_balance()).unwrap();

        assert_eq!(balance.name, "SOL");
        assert_eq!(balance.value_usd, 150.0);
        assert_eq!(balance.amount, "1000000000");
        assert_eq!(balance.decimals, 9);

        // Serialized shape is camelCase with a numeric valueUsd
        let json = serde_json::to_value(&balance).unwrap();
        assert!(json["valueUsd"].is_f64());
        assert_eq!(json["rawBalance"], "1000000000");
    }

    #[test]
    fn test_normalize_balance_keeps_amount_strings() {
        let mut raw = raw_sol_balance();
        // Larger than any integer f64 can hold exactly
        raw.amount = "123456789012345678901234567890".to_string();
        raw.raw_balance = raw.amount.clone();

        let balance = BalanceService::normalize_balance(raw).unwrap();
        assert_eq!(balance.amount, "123456789012345678901234567890");
    }

    #[test]
    fn test_normalize_balance_rejects_bad_value_usd() {
        let mut raw = raw_sol_balance();
        raw.value_usd = "not-a-number".to_string();

        assert!(BalanceService::normalize_balance(raw).is_err());
    }
}
