//! Errors - エラー型と分類
//!
//! 満席による入店拒否はエラーではなく `AdmitOutcome::Rejected` で表す。

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    /// Construction-time rejection of a zero-sized shop.
    #[error("invalid configuration: {field} must be at least 1 (got {value})")]
    InvalidConfiguration { field: &'static str, value: usize },

    /// Shutdown was signalled while waiting for a client.
    #[error("cancelled while waiting for a client")]
    Cancelled,

    #[error("shop is already open")]
    AlreadyOpen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_names_the_field() {
        let err = ShopError::InvalidConfiguration {
            field: "chairs",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: chairs must be at least 1 (got 0)"
        );
    }
}
