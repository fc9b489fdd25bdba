//! Events - ショップで発生したイベント
//!
//! コアは整形済みの文字列ではなく構造化レコードを `EventSink` に渡す。
//! 表示形式は sink 側の責務。

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BarberId, ClientId};
use super::state::Occupancy;

/// Who an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Actor {
    Customer(ClientId),
    Barber(BarberId),
    Room,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A client reached the door.
    Arrived,
    /// The client was admitted and took the `chair`-th seat (1-based).
    Seated { chair: usize },
    /// The client found no empty chair and left.
    Left,
    /// Waiting room occupancy after an admission or a withdrawal.
    OccupancyChanged(Occupancy),
    /// Worker loop entered.
    Started,
    /// Worker is idle and waiting for a client.
    Sleeping,
    /// The client was taken from the waiting room by `barber`.
    WokeUp { barber: BarberId },
    /// Worker withdrew `client` from the waiting room.
    TookForService { client: ClientId },
    ServiceCompleted { client: ClientId, duration_ms: u64 },
    /// Worker observed cancellation and left its loop.
    Stopped,
}

/// One structured record sent to the event sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEvent {
    pub at: DateTime<Utc>,
    pub actor: Actor,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ShopEvent {
    pub fn new(at: DateTime<Utc>, actor: Actor, kind: EventKind) -> Self {
        Self { at, actor, kind }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Customer(id) => write!(f, "{id}"),
            Actor::Barber(id) => write!(f, "{id}"),
            Actor::Room => f.write_str("Room"),
        }
    }
}

/// Console wording of an event, without the timestamp.
impl fmt::Display for ShopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor = &self.actor;
        match &self.kind {
            EventKind::Arrived => write!(f, "{actor} arrived."),
            EventKind::Seated { chair } => write!(f, "{actor} sat on the {chair}. chair."),
            EventKind::Left => write!(f, "{actor} left (no empty chair)."),
            EventKind::OccupancyChanged(occ) => {
                let empty = occ.empty();
                let verb = if empty == 1 { "chair is" } else { "chairs are" };
                write!(f, "{empty} {verb} empty out of {}.", occ.capacity)
            }
            EventKind::Started => write!(f, "{actor} has started working."),
            EventKind::Sleeping => write!(f, "{actor} is sleeping."),
            EventKind::WokeUp { barber } => write!(f, "{actor} woke {barber} up."),
            EventKind::TookForService { client } => {
                write!(f, "{actor} has started shaving {client}.")
            }
            EventKind::ServiceCompleted {
                client,
                duration_ms,
            } => write!(f, "{client} is shaved by {actor} ({duration_ms}ms)."),
            EventKind::Stopped => write!(f, "{actor} has stopped working."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_serializes_with_flat_kind() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let event = ShopEvent::new(
            at,
            Actor::Barber(BarberId::new(2)),
            EventKind::ServiceCompleted {
                client: ClientId::new(5),
                duration_ms: 250,
            },
        );

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "service_completed");
        assert_eq!(value["client"], 5);
        assert_eq!(value["duration_ms"], 250);
        assert_eq!(value["actor"]["kind"], "barber");
        assert_eq!(value["actor"]["id"], 2);
    }

    #[test]
    fn display_matches_console_wording() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let customer = Actor::Customer(ClientId::new(3));
        let barber = Actor::Barber(BarberId::new(1));

        let seated = ShopEvent::new(at, customer, EventKind::Seated { chair: 2 });
        assert_eq!(seated.to_string(), "Customer (3) sat on the 2. chair.");

        let took = ShopEvent::new(
            at,
            barber,
            EventKind::TookForService {
                client: ClientId::new(3),
            },
        );
        assert_eq!(took.to_string(), "Barber (1) has started shaving Customer (3).");

        let woke = ShopEvent::new(
            at,
            customer,
            EventKind::WokeUp {
                barber: BarberId::new(1),
            },
        );
        assert_eq!(woke.to_string(), "Customer (3) woke Barber (1) up.");

        let one_left = ShopEvent::new(
            at,
            Actor::Room,
            EventKind::OccupancyChanged(Occupancy {
                occupied: 2,
                capacity: 3,
            }),
        );
        assert_eq!(one_left.to_string(), "1 chair is empty out of 3.");

        let all_free = ShopEvent::new(
            at,
            Actor::Room,
            EventKind::OccupancyChanged(Occupancy {
                occupied: 0,
                capacity: 3,
            }),
        );
        assert_eq!(all_free.to_string(), "3 chairs are empty out of 3.");
    }
}
