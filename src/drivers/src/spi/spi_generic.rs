use bitfield::bitfield;
use device::ErrorKind;
use log::debug;

/// Bus speed used when a slave does not ask for one
pub const SPI_DEFAULT_SPEED_HZ: u32 = 100_000;

bitfield! {
    /// Clock and bit-order mode of a SPI slave
    #[derive(Clone, Copy, Default, Eq, PartialEq)]
    pub struct SpiMode(u32);
    impl Debug;
    /// Sample on the trailing edge
    pub cpha, set_cpha: 0;
    /// Clock idles high
    pub cpol, set_cpol: 1;
    pub cs_high, set_cs_high: 2;
    pub lsb_first, set_lsb_first: 3;
}

impl SpiMode {
    pub const MODE_0: Self = Self(0);
    pub const MODE_1: Self = Self(1 << 0);
    pub const MODE_2: Self = Self(1 << 1);
    pub const MODE_3: Self = Self((1 << 1) | (1 << 0));
}

bitfield! {
    /// Chip select handling around a single transfer
    #[derive(Clone, Copy, Default, Eq, PartialEq)]
    pub struct SpiXferFlags(u32);
    impl Debug;
    /// Assert chip select before the transfer
    pub begin, set_begin: 0;
    /// Deassert chip select after the transfer
    pub end, set_end: 1;
}

impl SpiXferFlags {
    pub const NONE: Self = Self(0);
    pub const BEGIN: Self = Self(1 << 0);
    pub const END: Self = Self(1 << 1);
    /// A transfer that is a whole transaction by itself
    pub const ONCE: Self = Self((1 << 0) | (1 << 1));
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The controller only moves whole bytes
    NonByteAligned,
    /// A data buffer is shorter than the transfer
    ShortBuffer,
    /// The controller has no such chip select
    InvalidChipSelect,
    Clock(ErrorKind),
    Reset(ErrorKind),
    Device(ErrorKind),
}

impl device::Error for Error {
    fn kind(&self) -> ErrorKind {
        match *self {
            Self::NonByteAligned | Self::ShortBuffer | Self::InvalidChipSelect => {
                ErrorKind::InvalidArgument
            }
            Self::Clock(kind) | Self::Reset(kind) | Self::Device(kind) => kind,
        }
    }
}

/// Operations of a SPI controller
///
/// `xfer` processes full duplex transactions: `dout` is shifted out while
/// `din` is filled. Either may be absent, in which case zeroes are sent or
/// received data is discarded.
pub trait SpiOps {
    /// Claim SPI bus and prepare for communication.
    fn claim_bus(&self) -> Result<(), Error>;
    /// Release SPI bus.
    fn release_bus(&self) -> Result<(), Error>;
    /// Perform one SPI transfer of `bitlen` bits on chip select `cs`.
    fn xfer(
        &self,
        cs: u32,
        bitlen: usize,
        dout: Option<&[u8]>,
        din: Option<&mut [u8]>,
        flags: SpiXferFlags,
    ) -> Result<(), Error>;
    fn set_speed(&self, hz: u32) -> Result<(), Error>;
    fn set_mode(&self, mode: SpiMode) -> Result<(), Error>;
}

/// Representation of a SPI slave, i.e. what we're communicating with.
///
///   bus:	ID of the bus that the slave is attached to.
///   cs:	ID of the chip select connected to the slave.
///   max_hz:	Maximum bus speed of the slave, 0 for the default.
///   mode:	Clock and bit-order mode.
pub struct SpiSlave<'a, C: SpiOps> {
    bus: u32,
    cs: u32,
    max_hz: u32,
    mode: SpiMode,
    ctrlr: &'a C,
}

impl<'a, C: SpiOps> SpiSlave<'a, C> {
    pub const fn new(ctrlr: &'a C, bus: u32, cs: u32) -> Self {
        Self {
            bus,
            cs,
            max_hz: 0,
            mode: SpiMode::MODE_0,
            ctrlr,
        }
    }

    pub const fn with_max_hz(mut self, max_hz: u32) -> Self {
        self.max_hz = max_hz;
        self
    }

    pub const fn with_mode(mut self, mode: SpiMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn bus(&self) -> u32 {
        self.bus
    }

    pub fn cs(&self) -> u32 {
        self.cs
    }

    pub fn max_hz(&self) -> u32 {
        self.max_hz
    }

    pub fn mode(&self) -> SpiMode {
        self.mode
    }

    /// Apply the slave's speed and mode, then claim the bus
    pub fn claim_bus(&self) -> Result<(), Error> {
        let speed = if self.max_hz == 0 {
            SPI_DEFAULT_SPEED_HZ
        } else {
            self.max_hz
        };
        debug!("spi{}.{}: claim at {} Hz, {:?}", self.bus, self.cs, speed, self.mode);

        self.ctrlr.set_speed(speed)?;
        self.ctrlr.set_mode(self.mode)?;
        self.ctrlr.claim_bus()
    }

    pub fn release_bus(&self) -> Result<(), Error> {
        self.ctrlr.release_bus()
    }

    pub fn xfer(
        &self,
        bitlen: usize,
        dout: Option<&[u8]>,
        din: Option<&mut [u8]>,
        flags: SpiXferFlags,
    ) -> Result<(), Error> {
        self.ctrlr.xfer(self.cs, bitlen, dout, din, flags)
    }

    /// Send `opcode`, then either send `tx` or receive into `rx`, as one
    /// chip-select transaction
    pub fn write_then_read(
        &self,
        opcode: &[u8],
        tx: Option<&[u8]>,
        rx: Option<&mut [u8]>,
    ) -> Result<(), Error> {
        let len = match (&tx, &rx) {
            (Some(tx), _) => tx.len(),
            (None, Some(rx)) => rx.len(),
            (None, None) => 0,
        };

        let flags = if len == 0 {
            SpiXferFlags::ONCE
        } else {
            SpiXferFlags::BEGIN
        };
        self.xfer(opcode.len() * 8, Some(opcode), None, flags)?;

        if len != 0 {
            self.xfer(len * 8, tx, rx, SpiXferFlags::END)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Op {
        Claim,
        Release,
        Speed(u32),
        Mode(u32),
        Xfer(u32, usize, u32),
    }

    #[derive(Default)]
    struct Recorder {
        ops: RefCell<Vec<Op>>,
    }

    impl SpiOps for Recorder {
        fn claim_bus(&self) -> Result<(), Error> {
            self.ops.borrow_mut().push(Op::Claim);
            Ok(())
        }

        fn release_bus(&self) -> Result<(), Error> {
            self.ops.borrow_mut().push(Op::Release);
            Ok(())
        }

        fn xfer(
            &self,
            cs: u32,
            bitlen: usize,
            _dout: Option<&[u8]>,
            din: Option<&mut [u8]>,
            flags: SpiXferFlags,
        ) -> Result<(), Error> {
            if let Some(din) = din {
                din.fill(0x5a);
            }
            self.ops.borrow_mut().push(Op::Xfer(cs, bitlen, flags.0));
            Ok(())
        }

        fn set_speed(&self, hz: u32) -> Result<(), Error> {
            self.ops.borrow_mut().push(Op::Speed(hz));
            Ok(())
        }

        fn set_mode(&self, mode: SpiMode) -> Result<(), Error> {
            self.ops.borrow_mut().push(Op::Mode(mode.0));
            Ok(())
        }
    }

    #[test]
    fn claim_applies_speed_and_mode_first() {
        let ctrlr = Recorder::default();
        let slave = SpiSlave::new(&ctrlr, 0, 1).with_mode(SpiMode::MODE_3);
        slave.claim_bus().unwrap();
        slave.release_bus().unwrap();

        let slave = SpiSlave::new(&ctrlr, 0, 1).with_max_hz(1_000_000);
        slave.claim_bus().unwrap();

        assert_eq!(
            *ctrlr.ops.borrow(),
            [
                Op::Speed(SPI_DEFAULT_SPEED_HZ),
                Op::Mode(3),
                Op::Claim,
                Op::Release,
                Op::Speed(1_000_000),
                Op::Mode(0),
                Op::Claim,
            ]
        );
    }

    #[test]
    fn write_then_read_frames_one_transaction() {
        let ctrlr = Recorder::default();
        let slave = SpiSlave::new(&ctrlr, 0, 2);

        let mut id = [0u8; 3];
        slave.write_then_read(&[0x9f], None, Some(&mut id)).unwrap();
        slave.write_then_read(&[0x06], None, None).unwrap();

        assert_eq!(id, [0x5a; 3]);
        assert_eq!(
            *ctrlr.ops.borrow(),
            [Op::Xfer(2, 8, 1), Op::Xfer(2, 24, 2), Op::Xfer(2, 8, 3)]
        );
    }

    #[test]
    fn mode_bits() {
        let mut mode = SpiMode::MODE_2;
        assert!(mode.cpol() && !mode.cpha());
        mode.set_lsb_first(true);
        assert_eq!(mode.0, 0b1010);
        assert!(SpiXferFlags::ONCE.begin() && SpiXferFlags::ONCE.end());
    }

    #[test]
    fn errors_map_to_kinds() {
        use device::Error as _;
        assert_eq!(Error::NonByteAligned.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::Reset(ErrorKind::NotFound).kind(), ErrorKind::NotFound);
    }
}
