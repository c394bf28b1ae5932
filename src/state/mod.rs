//! Authorization state: stored statuses, their classification, and the
//! decisions guards take from them.
//!
//! DESIGN
//! ======
//! State is split by concern (`store`, `status`, `session`, `access`) so the
//! policy stays pure and testable against an in-memory store.

pub mod access;
pub mod session;
pub mod status;
pub mod store;
