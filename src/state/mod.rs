//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) so individual components can
//! depend on small focused models. Each lives in an `RwSignal` provided via
//! context from `App`; consumers read reactively and mutate only through the
//! operations each module exposes.

pub mod session;
pub mod toast;
