use core::ptr::NonNull;

use eth_compat::{
    CompatError, EthBuffer, EthHandle, HalStatus, IntoHalStatus, RxDescriptor,
    rx::{
        build_rx_descriptors, desc_assign_memory, is_rx_data_available, rx_data_buffer,
        rx_data_length,
    },
};

const RING: usize = 4;
const MTU: usize = 1536;

/// A driver-side receive pool, as the network interface initialization code would set it up.
struct MockInterface {
    heth: EthHandle<RING>,
    buffers: Vec<[u8; MTU]>,
}

impl MockInterface {
    fn new() -> Self {
        let mut iface = Self {
            heth: EthHandle::new(),
            buffers: vec![[0; MTU]; RING],
        };
        for (index, buffer) in iface.buffers.iter_mut().enumerate() {
            desc_assign_memory(
                &mut iface.heth,
                u32::try_from(index).unwrap(),
                buffer.as_mut_ptr(),
                None,
            )
            .unwrap();
        }
        iface
    }

    /// Simulate the DMA engine writing a frame back into `slot`.
    fn dma_receive(&mut self, slot: usize, payload: &[u8]) {
        self.buffers[slot][..payload.len()].copy_from_slice(payload);
        let desc = &mut self.heth.init.rx_desc[slot];
        // Status bits above the length field must not leak into the length.
        desc.desc1 = 0xC000 | u32::try_from(payload.len()).unwrap();
        desc.desc3 = 0;
    }

    /// Poll loop of an old-style driver: returns the next frame, if any.
    fn poll(&mut self) -> Option<Vec<u8>> {
        if !is_rx_data_available(&self.heth) {
            return None;
        }
        let mut out = EthBuffer::empty();
        rx_data_buffer(&self.heth).ok()?.write_to(&mut out);
        let frame = if out.len == 0 {
            None
        } else {
            // SAFETY: `out.buffer` points into `self.buffers`, which outlives this call.
            let data = unsafe { core::slice::from_raw_parts(out.buffer, out.len as usize) };
            Some(data.to_vec())
        };
        build_rx_descriptors(&mut self.heth).ok()?;
        frame
    }
}

#[test]
fn test_assigned_buffers_are_read_back() {
    let mut first = [0_u8; 64];
    let mut second = [0_u8; 64];
    let mut heth = EthHandle::<RING>::new();

    for index in 0..u32::try_from(RING).unwrap() {
        assert_eq!(
            desc_assign_memory(
                &mut heth,
                index,
                first.as_mut_ptr(),
                NonNull::new(second.as_mut_ptr())
            )
            .into_hal_status(),
            HalStatus::Ok
        );
        let desc = &heth.init.rx_desc[index as usize];
        assert_eq!(desc.buffer1(), first.as_mut_ptr());
        assert_eq!(desc.buffer2(), second.as_mut_ptr());
    }
}

#[test]
fn test_assign_past_the_ring_is_rejected() {
    let mut first = [0_u8; 64];
    let mut heth = EthHandle::<RING>::new();
    let before = heth.init.rx_desc;

    let res = desc_assign_memory(&mut heth, 4, first.as_mut_ptr(), None);
    assert_eq!(res, Err(CompatError::OutOfRange { index: 4, count: RING }));
    assert_eq!(res.into_hal_status(), HalStatus::Error);
    assert_eq!(heth.init.rx_desc, before);
}

#[test]
fn test_length_and_buffer_agree() {
    let mut iface = MockInterface::new();
    iface.dma_receive(0, &[0xAB; 60]);

    let len = rx_data_length(&iface.heth).unwrap();
    let frame = rx_data_buffer(&iface.heth).unwrap();
    assert_eq!(len, 60);
    assert_eq!(frame.len, len);
    assert_eq!(frame.buffer, iface.buffers[0].as_mut_ptr());
}

#[test]
fn test_masked_length() {
    let mut heth = EthHandle::<RING>::new();
    heth.init.rx_desc[0].desc1 = 0x0000_5678;
    assert_eq!(rx_data_length(&heth), Ok(0x1678));
    assert_eq!(rx_data_length(&heth), Ok(5752));
}

#[test]
fn test_ring_returns_to_start() {
    let mut heth = EthHandle::<RING>::new();
    for step in 1..=RING {
        build_rx_descriptors(&mut heth).unwrap();
        assert_eq!(heth.rx_desc_list.rx_desc_idx as usize, step % RING);
    }
    assert_eq!(heth.rx_desc_list.rx_desc_idx, 0);
}

#[test]
fn test_driver_poll_loop() {
    let mut iface = MockInterface::new();
    iface.dma_receive(0, b"first frame");
    iface.dma_receive(1, b"second");

    assert_eq!(iface.poll().as_deref(), Some(&b"first frame"[..]));
    assert_eq!(iface.poll().as_deref(), Some(&b"second"[..]));
    // Slot 2 never received anything: a zero length stands for "no data".
    assert_eq!(iface.poll(), None);
    assert_eq!(iface.heth.rx_desc_list.rx_desc_idx, 3);

    iface.dma_receive(3, &[0x55; 1514]);
    assert_eq!(iface.poll().map(|frame| frame.len()), Some(1514));
    assert_eq!(iface.heth.rx_desc_list.rx_desc_idx, 0);
}

#[test]
fn test_corrupted_cursor_reads_as_no_data() {
    let mut iface = MockInterface::new();
    iface.dma_receive(0, b"frame");
    iface.heth.rx_desc_list.rx_desc_idx = 42;

    assert_eq!(iface.poll(), None);
    assert_eq!(iface.heth.rx_desc_list.rx_desc_idx, 42);
    assert_eq!(iface.heth.init.rx_desc[0].frame_length(), 5);
    assert_eq!(
        iface.heth.init.rx_desc[0].desc1 & !RxDescriptor::DESC1_LENGTH_MASK,
        0xC000
    );
}
