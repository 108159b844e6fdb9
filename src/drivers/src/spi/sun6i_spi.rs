//! Allwinner sun6i (and later) SPI controller
//!
//! Ported from u-boot: drivers/spi/sun6i_spi.c. Transfers are polled through
//! the FIFOs; pin muxing is left to board code.

use super::spi_generic::{Error, SpiMode, SpiOps, SpiXferFlags};
use device::{
    ClassId, ClkId, ClockController, Device, DeviceId, Driver, Error as _, ErrorKind,
    ResetController, ResetId,
};
use log::{debug, error};
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const SUN8I_FIFO_DEPTH: usize = 64;

pub const SUN6I_SPI_MAX_RATE: u32 = 24 * 1000 * 1000;
pub const SUN6I_SPI_MIN_RATE: u32 = 3 * 1000;

pub const SUN6I_MAX_XFER_SIZE: u32 = 0xff_ffff;

const CDR2_MAX: u32 = 0xff;

register_structs! {
    pub Sun6iSpiRegisters {
        (0x000 => _reserved0),
        (0x004 => gblctl: ReadWrite<u32, GBL_CTL::Register>),
        (0x008 => tfrctl: ReadWrite<u32, TFR_CTL::Register>),
        (0x00c => _reserved1),
        (0x018 => fifoctl: ReadWrite<u32, FIFO_CTL::Register>),
        (0x01c => fifosta: ReadOnly<u32, FIFO_STA::Register>),
        (0x020 => _reserved2),
        (0x024 => clkctl: ReadWrite<u32, CLK_CTL::Register>),
        (0x028 => _reserved3),
        (0x030 => burstcnt: ReadWrite<u32, COUNT::Register>),
        (0x034 => xmitcnt: ReadWrite<u32, COUNT::Register>),
        (0x038 => burstctl: ReadWrite<u32, COUNT::Register>),
        (0x03c => _reserved4),
        (0x200 => txdata: WriteOnly<u8>),
        (0x201 => _reserved5),
        (0x300 => rxdata: ReadOnly<u8>),
        (0x301 => _reserved6),
        (0x304 => @END),
    }
}

register_bitfields![u32,
    GBL_CTL [
        BUS_ENABLE OFFSET(0) NUMBITS(1) [],
        MASTER OFFSET(1) NUMBITS(1) [],
        /// Stop transmitting when the RX FIFO is full
        TP OFFSET(7) NUMBITS(1) [],
        /// Soft reset, self-clearing
        RST OFFSET(31) NUMBITS(1) []
    ],
    TFR_CTL [
        CPHA OFFSET(0) NUMBITS(1) [],
        CPOL OFFSET(1) NUMBITS(1) [],
        SPOL OFFSET(2) NUMBITS(1) [],
        CS OFFSET(4) NUMBITS(2) [],
        CS_MANUAL OFFSET(6) NUMBITS(1) [],
        /// Level driven on the chip select line in manual mode
        CS_LEVEL OFFSET(7) NUMBITS(1) [],
        DHB OFFSET(8) NUMBITS(1) [],
        /// LSB first
        FBS OFFSET(12) NUMBITS(1) [],
        /// Start the exchange, cleared by hardware when done
        XCH OFFSET(31) NUMBITS(1) []
    ],
    FIFO_CTL [
        RF_RST OFFSET(15) NUMBITS(1) [],
        TF_RST OFFSET(31) NUMBITS(1) []
    ],
    FIFO_STA [
        RF_CNT OFFSET(0) NUMBITS(8) [],
        TF_CNT OFFSET(16) NUMBITS(8) []
    ],
    CLK_CTL [
        /// SPI_CLK = MOD_CLK / (2 * (CDR2 + 1))
        CDR2 OFFSET(0) NUMBITS(8) [],
        /// SPI_CLK = MOD_CLK / 2 ^ CDR1
        CDR1 OFFSET(8) NUMBITS(4) [],
        /// Divide rate select: set for CDR2
        DRS OFFSET(12) NUMBITS(1) []
    ],
    COUNT [
        CNT OFFSET(0) NUMBITS(24) []
    ]
];

pub static SUN6I_SPI_IDS: [DeviceId<usize>; 1] =
    [DeviceId::new("allwinner,sun8i-h3-spi", &SUN8I_FIFO_DEPTH)];

pub static SUN6I_SPI_DRIVER: Driver<usize> =
    Driver::new("sun6i_spi", ClassId::Spi, &SUN6I_SPI_IDS);

fn ilog2(v: u32) -> u32 {
    31 - v.leading_zeros()
}

/// A clock or reset line of the controller, with the controller serving it
pub struct Line<'a, T: ?Sized, I> {
    ctrl: &'a T,
    id: I,
}

impl<'a, T: ?Sized, I> Line<'a, T, I> {
    pub const fn new(ctrl: &'a T, id: I) -> Self {
        Self { ctrl, id }
    }
}

pub struct Sun6iSpi<'a, C: ClockController, R: ResetController> {
    regs: &'a Sun6iSpiRegisters,
    fifo_depth: usize,
    clk_ahb: Line<'a, C, ClkId>,
    clk_mod: Line<'a, C, ClkId>,
    reset: Line<'a, R, ResetId>,
}

impl<'a, C: ClockController, R: ResetController> Sun6iSpi<'a, C, R> {
    pub fn new(
        regs: &'a Sun6iSpiRegisters,
        fifo_depth: usize,
        clk_ahb: Line<'a, C, ClkId>,
        clk_mod: Line<'a, C, ClkId>,
        reset: Line<'a, R, ResetId>,
    ) -> Self {
        Self {
            regs,
            fifo_depth,
            clk_ahb,
            clk_mod,
            reset,
        }
    }

    /// Set up the controller described by `dev`
    ///
    /// The reset line is requested here; the clocks are only touched when
    /// the bus is claimed.
    pub fn probe(
        dev: &Device,
        clk_ahb: Line<'a, C, ClkId>,
        clk_mod: Line<'a, C, ClkId>,
        reset: Line<'a, R, ResetId>,
    ) -> Result<Self, Error> {
        let id = SUN6I_SPI_DRIVER
            .of_match_device(dev)
            .ok_or(Error::Device(ErrorKind::NotFound))?;
        let base = dev.base().ok_or(Error::Device(ErrorKind::NoMemory))?;
        let fifo_depth = *id.data().ok_or(Error::Device(ErrorKind::InvalidArgument))?;

        if let Err(e) = reset.ctrl.request(reset.id) {
            error!("{}: failed to get reset", dev.name());
            return Err(Error::Reset(e.kind()));
        }

        debug!("{}: sun6i spi at {:#x}, fifo {}", dev.name(), base, fifo_depth);
        // The devicetree hands out the controller's own register window.
        let regs = unsafe { &*(base as *const Sun6iSpiRegisters) };
        Ok(Self::new(regs, fifo_depth, clk_ahb, clk_mod, reset))
    }

    fn rx_fifo_count(&self) -> usize {
        self.regs.fifosta.read(FIFO_STA::RF_CNT) as usize
    }

    fn fill_fifo(&self, tx: Option<&[u8]>, len: usize) {
        match tx {
            Some(tx) => tx.iter().for_each(|b| self.regs.txdata.set(*b)),
            None => (0..len).for_each(|_| self.regs.txdata.set(0)),
        }
    }

    fn drain_fifo(&self, rx: Option<&mut [u8]>, len: usize) {
        match rx {
            Some(rx) => rx.iter_mut().for_each(|b| *b = self.regs.rxdata.get()),
            None => (0..len).for_each(|_| {
                self.regs.rxdata.get();
            }),
        }
    }

    pub fn set_cs(&self, cs: u32, enable: bool) {
        if enable {
            self.regs
                .tfrctl
                .modify(TFR_CTL::CS.val(cs) + TFR_CTL::CS_LEVEL::CLEAR);
        } else {
            self.regs
                .tfrctl
                .modify(TFR_CTL::CS.val(0) + TFR_CTL::CS_LEVEL::SET);
        }
    }
}

impl<'a, C: ClockController, R: ResetController> SpiOps for Sun6iSpi<'a, C, R> {
    fn claim_bus(&self) -> Result<(), Error> {
        let ahb = &self.clk_ahb;
        let module = &self.clk_mod;

        if let Err(e) = ahb.ctrl.enable(ahb.id) {
            error!("sun6i_spi: failed to enable ahb clock");
            return Err(Error::Clock(e.kind()));
        }
        if let Err(e) = module.ctrl.enable(module.id) {
            error!("sun6i_spi: failed to enable mod clock");
            let _ = ahb.ctrl.disable(ahb.id);
            return Err(Error::Clock(e.kind()));
        }
        if let Err(e) = self.reset.ctrl.rst_deassert(self.reset.id) {
            error!("sun6i_spi: failed to deassert reset");
            let _ = module.ctrl.disable(module.id);
            let _ = ahb.ctrl.disable(ahb.id);
            return Err(Error::Reset(e.kind()));
        }

        self.regs.gblctl.modify(
            GBL_CTL::MASTER::SET + GBL_CTL::BUS_ENABLE::SET + GBL_CTL::TP::SET + GBL_CTL::RST::SET,
        );
        self.regs
            .tfrctl
            .modify(TFR_CTL::CS_MANUAL::SET + TFR_CTL::CS_LEVEL::SET);

        Ok(())
    }

    fn release_bus(&self) -> Result<(), Error> {
        self.regs.gblctl.modify(GBL_CTL::BUS_ENABLE::CLEAR);

        let ahb = self.clk_ahb.ctrl.disable(self.clk_ahb.id);
        let module = self.clk_mod.ctrl.disable(self.clk_mod.id);
        let reset = self.reset.ctrl.rst_assert(self.reset.id);

        ahb.map_err(|e| Error::Clock(e.kind()))?;
        module.map_err(|e| Error::Clock(e.kind()))?;
        reset.map_err(|e| Error::Reset(e.kind()))
    }

    fn xfer(
        &self,
        cs: u32,
        bitlen: usize,
        dout: Option<&[u8]>,
        mut din: Option<&mut [u8]>,
        flags: SpiXferFlags,
    ) -> Result<(), Error> {
        if bitlen % 8 != 0 {
            debug!("sun6i_spi: non byte-aligned SPI transfer");
            return Err(Error::NonByteAligned);
        }
        if cs > TFR_CTL::CS.mask {
            return Err(Error::InvalidChipSelect);
        }

        let len = bitlen / 8;
        if dout.map_or(false, |d| d.len() < len) || din.as_deref().map_or(false, |d| d.len() < len)
        {
            return Err(Error::ShortBuffer);
        }

        if flags.begin() {
            self.set_cs(cs, true);
        }

        self.regs
            .fifoctl
            .modify(FIFO_CTL::RF_RST::SET + FIFO_CTL::TF_RST::SET);

        let chunk = self.fifo_depth - 1;
        let mut done = 0;
        while done < len {
            let nbytes = chunk.min(len - done);
            let cnt = nbytes as u32 & SUN6I_MAX_XFER_SIZE;

            self.regs.burstcnt.write(COUNT::CNT.val(cnt));
            self.regs.xmitcnt.write(COUNT::CNT.val(cnt));
            self.regs.burstctl.write(COUNT::CNT.val(cnt));

            self.fill_fifo(dout.map(|tx| &tx[done..done + nbytes]), nbytes);

            self.regs.tfrctl.modify(TFR_CTL::XCH::SET);

            while self.rx_fifo_count() < nbytes {}

            let rx = din.as_deref_mut().map(|rx| &mut rx[done..done + nbytes]);
            self.drain_fifo(rx, nbytes);

            done += nbytes;
        }

        if flags.end() {
            self.set_cs(cs, false);
        }

        Ok(())
    }

    fn set_speed(&self, hz: u32) -> Result<(), Error> {
        let hz = hz.clamp(SUN6I_SPI_MIN_RATE, SUN6I_SPI_MAX_RATE);

        // Prefer CDR2 and fall back to CDR1 when the divider gets too large.
        let div = SUN6I_SPI_MAX_RATE / (2 * hz);
        if div <= CDR2_MAX + 1 {
            let div = div.saturating_sub(1);
            self.regs
                .clkctl
                .write(CLK_CTL::CDR2.val(div) + CLK_CTL::DRS::SET);
        } else {
            let div = ilog2(SUN6I_SPI_MAX_RATE) - ilog2(hz);
            self.regs.clkctl.write(CLK_CTL::CDR1.val(div));
        }
        debug!("sun6i_spi: {} Hz, clkctl {:#x}", hz, self.regs.clkctl.get());

        Ok(())
    }

    fn set_mode(&self, mode: SpiMode) -> Result<(), Error> {
        self.regs.tfrctl.modify(
            TFR_CTL::CPOL.val(mode.cpol() as u32)
                + TFR_CTL::CPHA.val(mode.cpha() as u32)
                + TFR_CTL::FBS.val(mode.lsb_first() as u32),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use device::ErrorType;

    const AHB: ClkId = 30;
    const MOD: ClkId = 82;
    const RST: ResetId = 15;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Event {
        Enable(ClkId),
        Disable(ClkId),
        Request(ResetId),
        Assert(ResetId),
        Deassert(ResetId),
    }

    type Log = RefCell<Vec<Event>>;

    struct Clocks<'l> {
        log: &'l Log,
        broken: Option<ClkId>,
    }

    impl ErrorType for Clocks<'_> {
        type Error = ErrorKind;
    }

    impl ClockController for Clocks<'_> {
        fn enable(&self, id: ClkId) -> Result<(), ErrorKind> {
            self.log.borrow_mut().push(Event::Enable(id));
            match self.broken {
                Some(broken) if broken == id => Err(ErrorKind::Unimplemented),
                _ => Ok(()),
            }
        }

        fn disable(&self, id: ClkId) -> Result<(), ErrorKind> {
            self.log.borrow_mut().push(Event::Disable(id));
            Ok(())
        }

        fn get_rate(&self, _id: ClkId) -> u64 {
            24_000_000
        }

        fn set_rate(&self, _id: ClkId, _rate: u64) -> Result<u64, ErrorKind> {
            Ok(0)
        }
    }

    struct Resets<'l> {
        log: &'l Log,
        broken: bool,
    }

    impl ErrorType for Resets<'_> {
        type Error = ErrorKind;
    }

    impl ResetController for Resets<'_> {
        fn request(&self, id: ResetId) -> Result<(), ErrorKind> {
            self.log.borrow_mut().push(Event::Request(id));
            if self.broken {
                return Err(ErrorKind::InvalidArgument);
            }
            Ok(())
        }

        fn free(&self, _id: ResetId) -> Result<(), ErrorKind> {
            Ok(())
        }

        fn rst_assert(&self, id: ResetId) -> Result<(), ErrorKind> {
            self.log.borrow_mut().push(Event::Assert(id));
            Ok(())
        }

        fn rst_deassert(&self, id: ResetId) -> Result<(), ErrorKind> {
            self.log.borrow_mut().push(Event::Deassert(id));
            if self.broken {
                return Err(ErrorKind::InvalidArgument);
            }
            Ok(())
        }
    }

    /// Zeroed register block with a permanently full RX FIFO reading 0xa5
    fn memory() -> Vec<u32> {
        let mut mem = vec![0u32; 0x304 / 4];
        mem[0x1c / 4] = 0xff;
        mem[0x300 / 4] = 0xa5;
        mem
    }

    fn controller<'a>(
        mem: &'a mut [u32],
        clocks: &'a Clocks<'a>,
        resets: &'a Resets<'a>,
    ) -> Sun6iSpi<'a, Clocks<'a>, Resets<'a>> {
        let regs = unsafe { &*(mem.as_mut_ptr() as *const Sun6iSpiRegisters) };
        Sun6iSpi::new(
            regs,
            SUN8I_FIFO_DEPTH,
            Line::new(clocks, AHB),
            Line::new(clocks, MOD),
            Line::new(resets, RST),
        )
    }

    #[test]
    fn claim_and_release_sequence() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        spi.claim_bus().unwrap();
        assert_eq!(spi.regs.gblctl.get(), 0x8000_0083);
        assert_eq!(spi.regs.tfrctl.get(), 0x0000_00c0);

        spi.release_bus().unwrap();
        assert_eq!(spi.regs.gblctl.get(), 0x8000_0082);
        assert_eq!(
            *log.borrow(),
            [
                Event::Enable(AHB),
                Event::Enable(MOD),
                Event::Deassert(RST),
                Event::Disable(AHB),
                Event::Disable(MOD),
                Event::Assert(RST),
            ]
        );
    }

    #[test]
    fn claim_unwinds_clocks() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: true };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        assert_eq!(
            spi.claim_bus(),
            Err(Error::Reset(ErrorKind::InvalidArgument))
        );
        assert_eq!(spi.regs.gblctl.get(), 0);
        assert_eq!(
            *log.borrow(),
            [
                Event::Enable(AHB),
                Event::Enable(MOD),
                Event::Deassert(RST),
                Event::Disable(MOD),
                Event::Disable(AHB),
            ]
        );

        let log = Log::default();
        let clocks = Clocks { log: &log, broken: Some(MOD) };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        assert_eq!(spi.claim_bus(), Err(Error::Clock(ErrorKind::Unimplemented)));
        assert_eq!(
            *log.borrow(),
            [Event::Enable(AHB), Event::Enable(MOD), Event::Disable(AHB)]
        );
    }

    #[test]
    fn speed_selects_divider() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        let cases = [
            (1_000_000, 0x1000 | 11),
            (100_000, 0x1000 | 119),
            (24_000_000, 0x1000),
            (50_000_000, 0x1000),
            (40_000, 9 << 8),
            (1_000, 13 << 8),
        ];
        for (hz, clkctl) in cases {
            spi.set_speed(hz).unwrap();
            assert_eq!(spi.regs.clkctl.get(), clkctl, "{} Hz", hz);
        }
    }

    #[test]
    fn mode_bits() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        let mut mode = SpiMode::MODE_3;
        mode.set_lsb_first(true);
        spi.set_mode(mode).unwrap();
        assert_eq!(spi.regs.tfrctl.get(), 0x1003);

        spi.set_mode(SpiMode::MODE_1).unwrap();
        assert_eq!(spi.regs.tfrctl.get(), 0x0001);
    }

    #[test]
    fn xfer_in_fifo_sized_chunks() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        let dout: Vec<u8> = (0..100).collect();
        let mut din = [0u8; 100];

        spi.xfer(1, 800, Some(&dout), Some(&mut din), SpiXferFlags::BEGIN)
            .unwrap();
        // last chunk after 63 bytes
        assert_eq!(spi.regs.burstcnt.get(), 37);
        assert_eq!(spi.regs.xmitcnt.get(), 37);
        assert_eq!(spi.regs.burstctl.get(), 37);
        assert_eq!(spi.regs.fifoctl.get(), 0x8000_8000);
        assert_eq!(spi.regs.tfrctl.get(), 0x8000_0010);
        assert_eq!(din, [0xa5; 100]);

        spi.xfer(1, 8, None, None, SpiXferFlags::END).unwrap();
        assert_eq!(spi.regs.tfrctl.get(), 0x8000_0080);
        assert_eq!(spi.regs.burstcnt.get(), 1);

        drop(spi);
        assert_eq!(mem[0x200 / 4] & 0xff, 0);
    }

    #[test]
    fn xfer_rejects_bad_requests() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let spi = controller(&mut mem, &clocks, &resets);

        let buf = [0u8; 4];
        assert_eq!(
            spi.xfer(0, 12, Some(&buf), None, SpiXferFlags::ONCE),
            Err(Error::NonByteAligned)
        );
        assert_eq!(
            spi.xfer(0, 64, Some(&buf), None, SpiXferFlags::ONCE),
            Err(Error::ShortBuffer)
        );
        assert_eq!(
            spi.xfer(4, 8, Some(&buf), None, SpiXferFlags::ONCE),
            Err(Error::InvalidChipSelect)
        );
        assert_eq!(spi.regs.tfrctl.get(), 0);
        assert_eq!(spi.regs.fifoctl.get(), 0);
    }

    #[test]
    fn probe_requests_reset() {
        let log = Log::default();
        let clocks = Clocks { log: &log, broken: None };
        let resets = Resets { log: &log, broken: false };
        let mut mem = memory();
        let base = mem.as_mut_ptr() as usize;

        let dev = Device::new("spi@1c68000", "allwinner,sun8i-h3-spi").with_base(base);
        let spi = Sun6iSpi::probe(
            &dev,
            Line::new(&clocks, AHB),
            Line::new(&clocks, MOD),
            Line::new(&resets, RST),
        )
        .unwrap();
        assert_eq!(spi.fifo_depth, SUN8I_FIFO_DEPTH);
        assert_eq!(*log.borrow(), [Event::Request(RST)]);

        let dev = Device::new("spi@1c68000", "allwinner,sun8i-h3-spi");
        let err = Sun6iSpi::probe(
            &dev,
            Line::new(&clocks, AHB),
            Line::new(&clocks, MOD),
            Line::new(&resets, RST),
        )
        .err();
        assert_eq!(err, Some(Error::Device(ErrorKind::NoMemory)));

        let dev = Device::new("spi@1c68000", "allwinner,sun4i-a10-spi").with_base(base);
        let err = Sun6iSpi::probe(
            &dev,
            Line::new(&clocks, AHB),
            Line::new(&clocks, MOD),
            Line::new(&resets, RST),
        )
        .err();
        assert_eq!(err, Some(Error::Device(ErrorKind::NotFound)));

        let resets = Resets { log: &log, broken: true };
        let dev = Device::new("spi@1c68000", "allwinner,sun8i-h3-spi").with_base(base);
        let err = Sun6iSpi::probe(
            &dev,
            Line::new(&clocks, AHB),
            Line::new(&clocks, MOD),
            Line::new(&resets, RST),
        )
        .err();
        assert_eq!(err, Some(Error::Reset(ErrorKind::InvalidArgument)));
    }
}
