//! Per-session FFT plan caching.
//!
//! A session ([`SessionState`]) owns two [`PlanCache`]s, one per
//! [`PlanFamily`](backend::PlanFamily). Each cache maps a transform length to
//! a [`PlanSlot`] holding at most one forward and one inverse
//! [`Plan`](backend::Plan). Ownership is a strict tree: dropping the session
//! releases every plan under it.
//!
//! [`Transformer`] is the caller-owned session object; [`Bridge`] serves
//! host objects that keep their session in a field and expect a missing
//! result instead of an error.

pub mod bridge;
mod config;
mod error;
mod ops;
mod plan_cache;
mod session;
mod slot;
pub mod store;
mod transformer;

pub use bridge::{Bridge, ObjectId};
pub use config::*;
pub use error::*;
pub use ops::TransformOps;
pub use plan_cache::PlanCache;
pub use session::SessionState;
pub use slot::PlanSlot;
pub use store::{SessionSlot, SessionStore, fetch_or_create, release};
pub use transformer::Transformer;

pub use backend::{Backend, Complex64, Counting, DftRef, Direction, PlanFamily, RustFft};
