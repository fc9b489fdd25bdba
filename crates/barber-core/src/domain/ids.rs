//! Domain identifiers (strongly-typed IDs).
//!
//! 顧客と理容師の ID はどちらも 1 から始まる連番です。
//! `Id<T>` の Phantom type パターンで、`ClientId` と `BarberId` を
//! コンパイル時に区別します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うラベル（"Customer", "Barber"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn label() -> &'static str;
}

/// ジェネリック連番 ID
#[repr(transparent)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: u64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn get(&self) -> u64 {
        self.value
    }
}

// derive だと `T: Clone` などの境界が付いてしまうので手で実装する
impl<T: IdMarker> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: IdMarker> Copy for Id<T> {}

impl<T: IdMarker> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: IdMarker> Eq for Id<T> {}

impl<T: IdMarker> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: IdMarker> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: IdMarker> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", T::label(), self.value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", T::label(), self.value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Customer のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Customer {}

impl IdMarker for Customer {
    fn label() -> &'static str {
        "Customer"
    }
}

/// Barber のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Barber {}

impl IdMarker for Barber {
    fn label() -> &'static str {
        "Barber"
    }
}

/// Identifier of an arriving client, assigned sequentially by the driver.
pub type ClientId = Id<Customer>;

/// Identifier of a worker, 1..=N within its shop.
pub type BarberId = Id<Barber>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_actor_label() {
        assert_eq!(ClientId::new(3).to_string(), "Customer (3)");
        assert_eq!(BarberId::new(1).to_string(), "Barber (1)");
    }

    #[test]
    fn ids_order_by_value() {
        assert!(ClientId::new(1) < ClientId::new(2));
    }

    #[test]
    fn serializes_as_plain_number() {
        let s = serde_json::to_string(&BarberId::new(7)).unwrap();
        assert_eq!(s, "7");
        let de: BarberId = serde_json::from_str(&s).unwrap();
        assert_eq!(de, BarberId::new(7));
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;
        assert_eq!(size_of::<ClientId>(), size_of::<u64>());
        assert_eq!(size_of::<BarberId>(), size_of::<u64>());
    }
}
