//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards wrap protected route subtrees and read the status store from Leptos
//! context; the sign-out control is the collaborator that clears it.

pub mod role_guard;
pub mod session_guard;
pub mod sign_out;
