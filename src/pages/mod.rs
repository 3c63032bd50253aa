//! Page components, one per routed screen.

pub mod dashboard;
pub mod login;
pub mod register;
