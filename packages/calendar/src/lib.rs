//! The calendar single page app.
//!
//! [`router::router`] declares the routes, [`host::Host`] mounts them, and the `calendar` binary
//! wires both to the environment.

pub mod host;
pub mod router;
pub mod views;
