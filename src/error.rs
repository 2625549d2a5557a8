use eth_hal::HalStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors reported by the receive compatibility layer.
///
/// Every variant maps to [`HalStatus::Error`] at the HAL boundary.
pub enum CompatError {
    #[error("Descriptor index {index} is out of range for a ring of {count} descriptors")]
    /// A descriptor index or the ring cursor is outside of the descriptor array
    OutOfRange { index: u32, count: usize },
}

pub type CompatResult<T> = Result<T, CompatError>;

impl From<CompatError> for HalStatus {
    fn from(_: CompatError) -> Self {
        Self::Error
    }
}

/// Collapse a result into the two-valued HAL status.
pub trait IntoHalStatus {
    fn into_hal_status(self) -> HalStatus;
}

impl<T> IntoHalStatus for CompatResult<T> {
    #[inline]
    fn into_hal_status(self) -> HalStatus {
        match self {
            Ok(_) => HalStatus::Ok,
            Err(err) => err.into(),
        }
    }
}
