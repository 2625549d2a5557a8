//! DMA receive descriptor structure and bitfield accessors.

/// Receive descriptor of the Ethernet DMA.
///
/// `desc0..desc3` are the words the DMA engine reads and writes back.
/// The two backup words are software-only and remember the buffers handed to the slot,
/// since the engine overwrites the buffer address words on write-back.
///
/// Backup addresses are address-sized, which is 32 bits on the target MCU.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RxDescriptor {
    pub desc0: u32,
    pub desc1: u32,
    pub desc2: u32,
    pub desc3: u32,
    backup_addr0: usize,
    backup_addr1: usize,
}

impl RxDescriptor {
    /// Received frame length, in bytes
    pub const DESC1_LENGTH_MASK: u32 = 0x3FFF;
    /// Descriptor is owned by the DMA engine (write-back format)
    pub const DESC3_OWN: u32 = 1 << 31;

    #[must_use]
    #[inline]
    /// Create an empty descriptor with no buffers attached.
    pub const fn new() -> Self {
        Self {
            desc0: 0,
            desc1: 0,
            desc2: 0,
            desc3: 0,
            backup_addr0: 0,
            backup_addr1: 0,
        }
    }

    #[must_use]
    #[inline]
    /// Length of the frame received in this slot.
    ///
    /// Only the low 14 bits of `desc1` carry the length; the other bits are ignored.
    pub const fn frame_length(&self) -> u32 {
        self.desc1 & Self::DESC1_LENGTH_MASK
    }

    #[must_use]
    #[inline]
    /// Check if the DMA engine still owns this descriptor.
    pub const fn is_owned_by_dma(&self) -> bool {
        self.desc3 & Self::DESC3_OWN != 0
    }

    #[must_use]
    #[inline]
    /// Address of the first buffer attached to this slot.
    pub fn buffer1(&self) -> *mut u8 {
        self.backup_addr0 as *mut u8
    }

    #[must_use]
    #[inline]
    /// Address of the second buffer attached to this slot.
    pub fn buffer2(&self) -> *mut u8 {
        self.backup_addr1 as *mut u8
    }

    #[inline]
    pub fn set_buffer1(&mut self, buffer: *mut u8) {
        self.backup_addr0 = buffer as usize;
    }

    #[inline]
    pub fn set_buffer2(&mut self, buffer: *mut u8) {
        self.backup_addr1 = buffer as usize;
    }
}
