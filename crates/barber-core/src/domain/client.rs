//! Client - 来店した顧客

use serde::{Deserialize, Serialize};

use super::ids::ClientId;

/// An arriving unit of demand for service.
///
/// Carries only its identity. Ownership moves into the waiting room on
/// admission and on to the barber that takes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
}

impl Client {
    pub fn new(id: u64) -> Self {
        Self {
            id: ClientId::new(id),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_its_id() {
        let client = Client::new(42);
        assert_eq!(client.id(), ClientId::new(42));
    }
}
