//! Receive path of the old HAL, expressed over the descriptor ring of the new handle.
//!
//! All functions are synchronous and run in constant time. None of them lock anything:
//! the caller serializes access to the handle, usually by only touching it from the
//! polling loop or from the Ethernet interrupt.
//!
//! Every array access is preceded by a bound check, so a rejected call never mutates
//! the handle.

use crate::error::{CompatError, CompatResult};
use core::ptr::NonNull;
use eth_hal::{EthBuffer, EthHandle, RxDescriptor};

/// Frame information read from the current descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxFrame {
    pub buffer: *mut u8,
    pub len: u32,
}

impl RxFrame {
    /// Copy the frame into a driver buffer record.
    ///
    /// The `next` link of the record is left as is.
    #[inline]
    pub const fn write_to(&self, out: &mut EthBuffer) {
        out.buffer = self.buffer;
        out.len = self.len;
    }
}

/// Resolve `index` to a slot of a ring of `count` descriptors.
fn slot(index: u32, count: usize) -> CompatResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&slot| slot < count)
        .ok_or_else(|| {
            log::trace!("eth-compat: descriptor index {index} rejected, ring has {count} slots");
            CompatError::OutOfRange { index, count }
        })
}

/// Descriptor under the ring cursor.
fn current<const N: usize>(heth: &EthHandle<N>) -> CompatResult<&RxDescriptor> {
    let idx = slot(heth.rx_desc_list.rx_desc_idx, N)?;
    Ok(&heth.init.rx_desc[idx])
}

/// Attach buffers to the receive descriptor at `index`.
///
/// `buffer1` is stored unconditionally. `buffer2` only replaces the second address when
/// present; otherwise the previous second address is kept.
///
/// The buffers must stay valid for as long as the DMA engine may write into them.
pub fn desc_assign_memory<const N: usize>(
    heth: &mut EthHandle<N>,
    index: u32,
    buffer1: *mut u8,
    buffer2: Option<NonNull<u8>>,
) -> CompatResult<()> {
    let idx = slot(index, N)?;
    let desc = &mut heth.init.rx_desc[idx];

    desc.set_buffer1(buffer1);
    if let Some(buffer2) = buffer2 {
        desc.set_buffer2(buffer2.as_ptr());
    }

    Ok(())
}

#[must_use]
#[inline]
#[cfg(not(feature = "strict-rx-available"))]
/// Check whether received data may be available.
///
/// This always returns `true`, whatever the state of the ring. A `true` answer is not a
/// promise of a non-empty frame: callers find out through [`rx_data_length`] or
/// [`rx_data_buffer`], where a zero length means nothing was received.
pub const fn is_rx_data_available<const N: usize>(_heth: &EthHandle<N>) -> bool {
    true
}

#[must_use]
#[inline]
#[cfg(feature = "strict-rx-available")]
/// Check whether the descriptor under the ring cursor has been handed back by the DMA engine.
///
/// Returns `false` when the cursor is out of range.
pub fn is_rx_data_available<const N: usize>(heth: &EthHandle<N>) -> bool {
    current(heth).is_ok_and(|desc| !desc.is_owned_by_dma())
}

/// Read the buffer address and frame length of the descriptor under the ring cursor.
pub fn rx_data_buffer<const N: usize>(heth: &EthHandle<N>) -> CompatResult<RxFrame> {
    let desc = current(heth)?;
    Ok(RxFrame {
        buffer: desc.buffer1(),
        len: desc.frame_length(),
    })
}

/// Read the frame length of the descriptor under the ring cursor.
pub fn rx_data_length<const N: usize>(heth: &EthHandle<N>) -> CompatResult<u32> {
    current(heth).map(RxDescriptor::frame_length)
}

/// Release the current descriptor by moving the ring cursor to the next slot.
///
/// The cursor wraps to 0 after the last descriptor. Fails only if the cursor was already
/// out of range, in which case it is left untouched.
pub fn build_rx_descriptors<const N: usize>(heth: &mut EthHandle<N>) -> CompatResult<()> {
    let idx = heth.rx_desc_list.rx_desc_idx;
    slot(idx, N)?;

    heth.rx_desc_list.rx_desc_idx = idx
        .checked_add(1)
        .filter(|&next| usize::try_from(next).is_ok_and(|next| next < N))
        .unwrap_or(0);

    Ok(())
}
