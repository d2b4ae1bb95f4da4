use serde::{Deserialize, Serialize};

pub const LIMIT_DEFAULT: usize = 50;
pub const LIMIT_MIN: usize = 1;
pub const LIMIT_MAX: usize = 100;

/// Solana base58 addresses are 32 to 44 characters.
pub const ADDRESS_MIN_LEN: usize = 32;
pub const ADDRESS_MAX_LEN: usize = 44;

pub const PASSWORD_MIN_LEN: usize = 8;

/// One field-level violation, reported back to the client inside the
/// `details` array of a ValidationError response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raw pagination query string before coercion. Query values always arrive
/// as strings, so coercion to numbers happens here, not in serde.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: LIMIT_DEFAULT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Coerce and bound the raw query values. All violations are collected
    /// before returning; a partially valid query is never applied.
    pub fn from_query(raw: &PaginationQuery) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut pagination = Pagination::default();

        if let Some(limit) = raw.limit.as_deref() {
            match limit.parse::<usize>() {
                Ok(value) if (LIMIT_MIN..=LIMIT_MAX).contains(&value) => {
                    pagination.limit = value;
                }
                Ok(_) => errors.push(FieldError::new(
                    "limit",
                    format!("must be between {} and {}", LIMIT_MIN, LIMIT_MAX),
                )),
                Err(_) => errors.push(FieldError::new("limit", "must be a number")),
            }
        }

        if let Some(offset) = raw.offset.as_deref() {
            match offset.parse::<usize>() {
                Ok(value) => pagination.offset = value,
                Err(_) => errors.push(FieldError::new(
                    "offset",
                    "must be a non-negative number",
                )),
            }
        }

        if errors.is_empty() {
            Ok(pagination)
        } else {
            Err(errors)
        }
    }
}

pub fn validate_wallet_address(address: &str) -> Result<(), Vec<FieldError>> {
    if (ADDRESS_MIN_LEN..=ADDRESS_MAX_LEN).contains(&address.len()) {
        Ok(())
    } else {
        Err(vec![FieldError::new(
            "address",
            format!(
                "must be between {} and {} characters",
                ADDRESS_MIN_LEN, ADDRESS_MAX_LEN
            ),
        )])
    }
}

pub fn validate_token_id(id: &str) -> Result<(), Vec<FieldError>> {
    if id.is_empty() {
        Err(vec![FieldError::new("id", "must not be empty")])
    } else {
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressListQuery {
    pub addresses: Option<String>,
}

/// Split the comma-separated `addresses` query value, preserving the
/// caller's order. Empty list or empty entries are violations.
pub fn parse_address_list(raw: &AddressListQuery) -> Result<Vec<String>, Vec<FieldError>> {
    let value = match raw.addresses.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => {
            return Err(vec![FieldError::new("addresses", "must not be empty")]);
        }
    };

    let addresses: Vec<String> = value.split(',').map(|s| s.trim().to_string()).collect();

    if addresses.iter().any(|a| a.is_empty()) {
        return Err(vec![FieldError::new(
            "addresses",
            "must be a comma-separated list of addresses",
        )]);
    }

    Ok(addresses)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

pub fn validate_new_user(user: &NewUser) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let email_ok = match user.email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !email_ok {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }

    if user.password.len() < PASSWORD_MIN_LEN {
        errors.push(FieldError::new(
            "password",
            format!("must be at least {} characters", PASSWORD_MIN_LEN),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>, offset: Option<&str>) -> PaginationQuery {
        PaginationQuery {
            limit: limit.map(String::from),
            offset: offset.map(String::from),
        }
    }

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::from_query(&query(None, None)).unwrap();
        assert_eq!(pagination.limit, 50);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_pagination_coerces_numeric_strings() {
        let pagination = Pagination::from_query(&query(Some("10"), Some("20"))).unwrap();
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset, 20);
    }

    #[test]
    fn test_pagination_bounds() {
        let errors = Pagination::from_query(&query(Some("0"), None)).unwrap_err();
        assert_eq!(errors[0].field, "limit");

        let errors = Pagination::from_query(&query(Some("101"), None)).unwrap_err();
        assert_eq!(errors[0].field, "limit");

        let errors = Pagination::from_query(&query(Some("abc"), Some("-1"))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "limit");
        assert_eq!(errors[1].field, "offset");
    }

    #[test]
    fn test_wallet_address_length() {
        assert!(validate_wallet_address(&"a".repeat(32)).is_ok());
        assert!(validate_wallet_address(&"a".repeat(44)).is_ok());
        assert!(validate_wallet_address("short").is_err());
        assert!(validate_wallet_address(&"a".repeat(45)).is_err());
    }

    #[test]
    fn test_address_list_preserves_order() {
        let raw = AddressListQuery {
            addresses: Some("mint-b, mint-a,mint-c".to_string()),
        };
        let addresses = parse_address_list(&raw).unwrap();
        assert_eq!(addresses, vec!["mint-b", "mint-a", "mint-c"]);
    }

    #[test]
    fn test_address_list_rejects_empty() {
        assert!(parse_address_list(&AddressListQuery { addresses: None }).is_err());
        assert!(parse_address_list(&AddressListQuery {
            addresses: Some("a,,b".to_string())
        })
        .is_err());
    }

    #[test]
    fn test_new_user() {
        let user = NewUser {
            email: "user@example.com".to_string(),
            password: "hunter22hunter22".to_string(),
        };
        assert!(validate_new_user(&user).is_ok());

        let user = NewUser {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = validate_new_user(&user).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[1].field, "password");
    }
}
