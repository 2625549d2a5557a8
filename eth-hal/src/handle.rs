//! Ethernet handle and the records it shares with network drivers.

use crate::{ETH_RX_DESC_CNT, descriptors::RxDescriptor};
use core::ptr;

/// Receive-side bookkeeping of the descriptor ring.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RxDescList {
    /// Index of the descriptor currently being consumed.
    pub rx_desc_idx: u32,
}

/// Static configuration of the controller.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthInit<const N: usize> {
    pub rx_desc: [RxDescriptor; N],
}

/// Ethernet controller handle.
///
/// The handle is owned by the network interface initialization code.
/// It provides no synchronization: callers serialize access themselves.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthHandle<const N: usize = ETH_RX_DESC_CNT> {
    pub init: EthInit<N>,
    pub rx_desc_list: RxDescList,
}

impl<const N: usize> EthHandle<N> {
    #[must_use]
    #[inline]
    /// Create a handle with empty descriptors and the cursor at slot 0.
    pub const fn new() -> Self {
        Self {
            init: EthInit {
                rx_desc: [RxDescriptor::new(); N],
            },
            rx_desc_list: RxDescList { rx_desc_idx: 0 },
        }
    }

    #[must_use]
    #[inline]
    /// Number of receive descriptors in the ring.
    pub const fn rx_desc_count(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for EthHandle<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffer record filled in for network drivers.
///
/// Buffers may be chained through `next`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthBuffer {
    pub buffer: *mut u8,
    pub len: u32,
    pub next: *mut Self,
}

impl EthBuffer {
    #[must_use]
    #[inline]
    pub const fn empty() -> Self {
        Self {
            buffer: ptr::null_mut(),
            len: 0,
            next: ptr::null_mut(),
        }
    }
}

impl Default for EthBuffer {
    fn default() -> Self {
        Self::empty()
    }
}
