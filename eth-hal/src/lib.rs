//! Data structures of the descriptor-ring Ethernet HAL.
//!
//! The handle, its receive descriptors and the buffer record are laid out with `#[repr(C)]`
//! so that C network drivers can share them with Rust code.
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(clippy::pedantic, clippy::nursery)]

mod config {
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

pub mod descriptors;
pub mod handle;

pub use config::ETH_RX_DESC_CNT;
pub use descriptors::RxDescriptor;
pub use handle::{EthBuffer, EthHandle, EthInit, RxDescList};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Generic status returned by HAL functions.
pub enum HalStatus {
    Ok = 0x00,
    Error = 0x01,
    Busy = 0x02,
    Timeout = 0x03,
}

impl HalStatus {
    #[must_use]
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}
