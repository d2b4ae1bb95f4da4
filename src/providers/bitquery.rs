use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use url::Url;

use crate::config::BitqueryConfig;
use crate::providers::descriptor::RequestDescriptor;

/// GraphQL document for recent Solana token transfers, newest first.
const TRANSFERS_QUERY: &str = r#"
query GetTransfers($limit: Int!) {
  Solana {
    Transfers(limit: {count: $limit}, orderBy: {descending: Block_Time}) {
      Transfer {
        Amount
        AmountInUSD
        Sender {
          Address
        }
        Receiver {
          Address
        }
        Currency {
          Symbol
          Name
          MintAddress
          Native
          Wrapped
          Uri
        }
      }
      Block {
        Time
      }
    }
  }
}
"#;

/// GraphQL document for recent Solana transactions.
const TRANSACTIONS_QUERY: &str = r#"
query GetTransactions($limit: Int!) {
  Solana {
    Transactions(limit: {count: $limit}) {
      Transaction {
        Signature
        Signer
        FeePayer
        Fee
        Index
        Result {
          ErrorMessage
          Success
        }
        RecentBlockhash
        TokenBalanceUpdatesCount
        InstructionsCount
        BalanceUpdatesCount
      }
      Block {
        Slot
        Time
        Height
        Hash
      }
    }
  }
}
"#;

/// Adapter for the transaction-graph provider (streaming GraphQL API).
pub struct BitqueryApi {
    streaming_url: Url,
    headers: HeaderMap,
}

impl BitqueryApi {
    pub fn new(config: &BitqueryConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(anyhow!("Bitquery API key is not set"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .context("Invalid Bitquery API key")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            streaming_url: Url::parse(&config.streaming_url)
                .context("Invalid Bitquery streaming URL")?,
            headers,
        })
    }

    fn graphql_request(&self, query: &str, limit: usize) -> RequestDescriptor {
        RequestDescriptor::post(
            self.streaming_url.clone(),
            self.headers.clone(),
            json!({
                "query": query,
                "variables": { "limit": limit },
            }),
        )
    }

    pub fn transfers_request(&self, limit: usize) -> RequestDescriptor {
        self.graphql_request(TRANSFERS_QUERY, limit)
    }

    pub fn transactions_request(&self, limit: usize) -> RequestDescriptor {
        self.graphql_request(TRANSACTIONS_QUERY, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_config() -> BitqueryConfig {
        BitqueryConfig {
            streaming_url: "https://streaming.example.com/graphql".to_string(),
            api_key: "bq-key".to_string(),
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let mut config = fake_config();
        config.api_key = String::new();
        assert!(BitqueryApi::new(&config).is_err());
    }

    #[test]
    fn test_transfers_request() {
        let api = BitqueryApi::new(&fake_config()).unwrap();
        let descriptor = api.transfers_request(10);

        assert_eq!(
            descriptor.headers.get(AUTHORIZATION).unwrap(),
            "Bearer bq-key"
        );

        let body = descriptor.body.unwrap();
        assert_eq!(body["variables"]["limit"], 10);
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("Transfers(limit: {count: $limit}"));
        assert!(query.contains("descending: Block_Time"));
    }

    #[test]
    fn test_transactions_request() {
        let api = BitqueryApi::new(&fake_config()).unwrap();
        let descriptor = api.transactions_request(25);

        let body = descriptor.body.unwrap();
        assert_eq!(body["variables"]["limit"], 25);
        assert!(body["query"]
            .as_str()
            .unwrap()
            .contains("Transactions(limit: {count: $limit})"));
    }
}
