//! Domain model (ids, client, spec, state, events, errors).

pub mod client;
pub mod errors;
pub mod events;
pub mod ids;
pub mod spec;
pub mod state;

pub use client::Client;
pub use errors::ShopError;
pub use events::{Actor, EventKind, ShopEvent};
pub use ids::{BarberId, ClientId};
pub use spec::ShopSpec;
pub use state::{Occupancy, RunState};
