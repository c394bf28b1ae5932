//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (landing, onboarding steps, not-found) are reachable without
//! any guard. Dashboard pages render inside a guard's outlet and delegate
//! sign-out to `components::sign_out`.

pub mod consumer;
pub mod landing;
pub mod not_found;
pub mod onboarding;
pub mod restaurant;
pub mod shipper;
