//! Old-generation Ethernet HAL receive API on top of the descriptor-ring HAL.
//!
//! Network drivers written against the old HAL call a handful of receive functions
//! (`HAL_ETH_DescAssignMemory`, `HAL_ETH_GetRxDataBuffer`, ...) that the new HAL no longer
//! provides. This crate maps each of them onto the new handle: the receive descriptor
//! array and its ring cursor.
//!
//! The Rust API lives in [`rx`]. With the `ffi` feature, [`ffi`] exports the same operations
//! under their old C names.
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_safety_doc)]

pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod rx;

pub use error::{CompatError, CompatResult, IntoHalStatus};
pub use eth_hal::{
    ETH_RX_DESC_CNT, EthBuffer, EthHandle, EthInit, HalStatus, RxDescList, RxDescriptor,
};
