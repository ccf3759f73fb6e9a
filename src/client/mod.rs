//! Client side of the support desk.
//!
//! A single [`Store`] owns the whole client state tree. The tree only changes
//! by dispatching an [`Action`] through the pure reducers in [`auth`],
//! [`tickets`] and [`notes`]. Network calls are wrapped as thunks that
//! dispatch a `*Pending` action, await the [`api::ApiClient`] call and then
//! dispatch either `*Fulfilled` or `*Rejected`, so every request settles into
//! the store in a fixed order.
//!
//! The session user is mirrored into a [`storage::Storage`] under the `user`
//! key so a restarted client comes back logged in.

pub mod api;
pub mod auth;
pub mod notes;
pub mod storage;
pub mod store;
pub mod tickets;

pub use store::{Action, RootState, Store};
