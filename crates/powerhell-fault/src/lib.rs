//! Transport faults and the errors callers see instead of them
//!
//! A remote shell transport raises [`TransportFault`]s. [`classify`] turns every
//! fault into exactly one [`PowerHellError`] kind before it reaches the caller;
//! no fault escapes in its raw form.

pub mod classify;
pub mod error;
pub mod fault;

pub use classify::{AUTHORIZATION_LOOP_MARKER, classify};
pub use error::PowerHellError;
pub use fault::TransportFault;
