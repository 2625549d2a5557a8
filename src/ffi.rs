//! C entry points carrying the old HAL names.
//!
//! Drivers keep calling `HAL_ETH_*` with a pointer to the shared [`EthHandle`]; each entry
//! point checks its pointers and forwards to [`crate::rx`]. Any failure, including a null
//! pointer, is reported as [`HalStatus::Error`].
#![allow(non_snake_case)]

use crate::{error::IntoHalStatus, rx};
use core::{ffi::c_void, ptr::NonNull};
use eth_hal::{EthBuffer, EthHandle, HalStatus};

/// Availability reported when the handle cannot be inspected.
const AVAILABLE_WITHOUT_HANDLE: bool = cfg!(not(feature = "strict-rx-available"));

#[unsafe(no_mangle)]
/// Assign memory buffers to a receive descriptor.
///
/// `pBuffer2` may be null, in which case the second address of the slot is kept.
///
/// # Safety
///
/// `heth` must be null or point to a valid handle that is not accessed concurrently.
pub unsafe extern "C" fn HAL_ETH_DescAssignMemory(
    heth: *mut EthHandle,
    Index: u32,
    pBuffer1: *mut u8,
    pBuffer2: *mut u8,
) -> HalStatus {
    // SAFETY: The caller guarantees that `heth` is either null or valid and unaliased.
    let Some(heth) = (unsafe { heth.as_mut() }) else {
        return HalStatus::Error;
    };
    rx::desc_assign_memory(heth, Index, pBuffer1, NonNull::new(pBuffer2)).into_hal_status()
}

#[unsafe(no_mangle)]
/// Returns 1 if received data may be available, 0 otherwise.
///
/// See [`rx::is_rx_data_available`]: the default build always returns 1.
///
/// # Safety
///
/// `heth` must be null or point to a valid handle.
pub unsafe extern "C" fn HAL_ETH_IsRxDataAvailable(heth: *mut EthHandle) -> u8 {
    // SAFETY: The caller guarantees that `heth` is either null or valid.
    let available = unsafe { heth.as_ref() }
        .map_or(AVAILABLE_WITHOUT_HANDLE, rx::is_rx_data_available);
    u8::from(available)
}

#[unsafe(no_mangle)]
/// Fill `RxBuffer` with the buffer address and frame length of the current descriptor.
///
/// `RxBuffer` is left untouched on error.
///
/// # Safety
///
/// `heth` must be null or point to a valid handle.
/// `RxBuffer` must be null or point to a writable `EthBuffer`.
pub unsafe extern "C" fn HAL_ETH_GetRxDataBuffer(
    heth: *mut EthHandle,
    RxBuffer: *mut c_void,
) -> HalStatus {
    // SAFETY: The caller guarantees that both pointers are either null or valid.
    let (Some(heth), Some(out)) = (unsafe { heth.as_ref() }, unsafe {
        RxBuffer.cast::<EthBuffer>().as_mut()
    }) else {
        return HalStatus::Error;
    };
    rx::rx_data_buffer(heth)
        .map(|frame| frame.write_to(out))
        .into_hal_status()
}

#[unsafe(no_mangle)]
/// Store the frame length of the current descriptor into `Length`.
///
/// `Length` is left untouched on error.
///
/// # Safety
///
/// `heth` must be null or point to a valid handle.
/// `Length` must be null or point to a writable `u32`.
pub unsafe extern "C" fn HAL_ETH_GetRxDataLength(heth: *mut EthHandle, Length: *mut u32) -> HalStatus {
    // SAFETY: The caller guarantees that both pointers are either null or valid.
    let (Some(heth), Some(out)) = (unsafe { heth.as_ref() }, unsafe { Length.as_mut() }) else {
        return HalStatus::Error;
    };
    rx::rx_data_length(heth)
        .map(|len| *out = len)
        .into_hal_status()
}

#[unsafe(no_mangle)]
/// Release the current receive descriptor and move on to the next one.
///
/// # Safety
///
/// `heth` must be null or point to a valid handle that is not accessed concurrently.
pub unsafe extern "C" fn HAL_ETH_BuildRxDescriptors(heth: *mut EthHandle) -> HalStatus {
    // SAFETY: The caller guarantees that `heth` is either null or valid and unaliased.
    let Some(heth) = (unsafe { heth.as_mut() }) else {
        return HalStatus::Error;
    };
    rx::build_rx_descriptors(heth).into_hal_status()
}
