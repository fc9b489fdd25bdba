//! Queue module: the shop's waiting room.

mod waiting_room;

pub use waiting_room::{AdmitOutcome, WaitingRoom};
