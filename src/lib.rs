#![warn(rust_2018_idioms)]
#![allow(dead_code)]

// re-export sub-crates
pub use rtcp;
pub use rtp;
pub use srtp;
pub use util;

pub mod api;
pub mod error;
pub mod rtp_transceiver;
pub mod srtp_transport;
pub mod track;
pub mod utilities;

pub use error::{Error, Result};

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";

/// Equal to UDP MTU
pub(crate) const RECEIVE_MTU: usize = 1460;

/// Number of packets a lossy read stream retains before it starts
/// overwriting the oldest unread ones.
pub(crate) const RECEIVE_BUFFER_PACKETS: usize = 128;
