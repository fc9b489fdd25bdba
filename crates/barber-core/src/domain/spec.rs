//! Shop configuration (barbers / chairs).

use serde::{Deserialize, Serialize};

use super::errors::ShopError;

/// Sizing of a shop. Fixed for the shop's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSpec {
    /// Number of workers serving clients.
    pub barbers: usize,

    /// Capacity of the waiting room.
    pub chairs: usize,
}

impl ShopSpec {
    pub fn new(barbers: usize, chairs: usize) -> Self {
        Self { barbers, chairs }
    }

    /// Fail-fast check used by the builder before anything is spawned.
    pub fn validate(&self) -> Result<(), ShopError> {
        if self.barbers == 0 {
            return Err(ShopError::InvalidConfiguration {
                field: "barbers",
                value: self.barbers,
            });
        }
        if self.chairs == 0 {
            return Err(ShopError::InvalidConfiguration {
                field: "chairs",
                value: self.chairs,
            });
        }
        Ok(())
    }
}

impl Default for ShopSpec {
    fn default() -> Self {
        Self {
            barbers: 2,
            chairs: 3,
        }
    }
}
