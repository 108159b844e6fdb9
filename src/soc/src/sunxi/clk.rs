//! sunxi clock controller
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_sunxi.c and the per-chip probe
//! routines. One controller type per table shape; [`SunxiClk`] picks the
//! right one for the chip that matched.

use super::ccu::{
    a10, a10s, a23, a31, a64, a83t, gate::set_gate, h3, h6, r40, tree::resolve_rate, v3s,
    CcuData, CcuDesc, LegacyCcuDesc, TreeCcuDesc,
};
use device::{
    ClassId, ClkId, ClockController, Device, DeviceId, Driver, DriverOps, ErrorKind, ErrorType,
};
use log::debug;
use oreboot_asm::io::{Mmio, RegisterSpace};

/// Every compatible string of the family, with its chip data
pub static SUNXI_CCU_IDS: [DeviceId<CcuData>; 13] = [
    DeviceId::new(a10::COMPATIBLES[0], &a10::CCU),
    DeviceId::new(a10::COMPATIBLES[1], &a10::CCU),
    DeviceId::new(a10s::COMPATIBLES[0], &a10s::CCU),
    DeviceId::new(a10s::COMPATIBLES[1], &a10s::CCU),
    DeviceId::new(a23::COMPATIBLES[0], &a23::CCU),
    DeviceId::new(a31::COMPATIBLES[0], &a31::CCU),
    DeviceId::new(a64::COMPATIBLES[0], &a64::CCU),
    DeviceId::new(a83t::COMPATIBLES[0], &a83t::CCU),
    DeviceId::new(h3::COMPATIBLES[0], &h3::CCU),
    DeviceId::new(h3::COMPATIBLES[1], &h3::CCU),
    DeviceId::new(h6::COMPATIBLES[0], &h6::CCU),
    DeviceId::new(r40::COMPATIBLES[0], &r40::CCU),
    DeviceId::new(v3s::COMPATIBLES[0], &v3s::CCU),
];

pub static SUNXI_CLK_DRIVER: Driver<CcuData> =
    Driver::new("sunxi_ccu", ClassId::Clk, &SUNXI_CCU_IDS);

/// Clock controller for chips described by flat `(offset, bit)` maps
pub struct LegacyClk<R> {
    regs: R,
    desc: &'static LegacyCcuDesc,
}

impl<R: RegisterSpace> LegacyClk<R> {
    pub fn new(regs: R, desc: &'static LegacyCcuDesc) -> Self {
        Self { regs, desc }
    }
}

impl<R> ErrorType for LegacyClk<R> {
    type Error = ErrorKind;
}

impl<R: RegisterSpace> ClockController for LegacyClk<R> {
    fn enable(&self, id: ClkId) -> Result<(), ErrorKind> {
        set_gate(&self.regs, self.desc.clks, id, true);
        Ok(())
    }

    fn disable(&self, id: ClkId) -> Result<(), ErrorKind> {
        set_gate(&self.regs, self.desc.clks, id, false);
        Ok(())
    }

    fn get_rate(&self, id: ClkId) -> u64 {
        debug!("clk: {}: no clock tree", id);
        0
    }

    fn set_rate(&self, id: ClkId, rate: u64) -> Result<u64, ErrorKind> {
        let Some(map) = self.desc.clks.get(id) else {
            debug!("clk: {}: unhandled", id);
            return Ok(0);
        };
        let Some(setter) = map.set_rate() else {
            debug!("clk: {}: cannot set rate", id);
            return Ok(0);
        };

        let (off, bit) = map.location();
        setter.set_rate(&self.regs, off, bit, rate)
    }
}

/// Clock controller for chips described by typed gates and an optional tree
pub struct TreeClk<R> {
    regs: R,
    desc: &'static TreeCcuDesc,
}

impl<R: RegisterSpace> TreeClk<R> {
    pub fn new(regs: R, desc: &'static TreeCcuDesc) -> Self {
        Self { regs, desc }
    }
}

impl<R> ErrorType for TreeClk<R> {
    type Error = ErrorKind;
}

impl<R: RegisterSpace> ClockController for TreeClk<R> {
    fn enable(&self, id: ClkId) -> Result<(), ErrorKind> {
        set_gate(&self.regs, self.desc.gates, id, true);
        Ok(())
    }

    fn disable(&self, id: ClkId) -> Result<(), ErrorKind> {
        set_gate(&self.regs, self.desc.gates, id, false);
        Ok(())
    }

    fn get_rate(&self, id: ClkId) -> u64 {
        match self.desc.tree {
            Some(tree) => resolve_rate(tree, &self.regs, id),
            None => {
                debug!("clk: {}: no clock tree", id);
                0
            }
        }
    }

    fn set_rate(&self, id: ClkId, _rate: u64) -> Result<u64, ErrorKind> {
        debug!("clk: {}: cannot set rate", id);
        Ok(0)
    }
}

pub enum SunxiClk<R> {
    Legacy(LegacyClk<R>),
    Tree(TreeClk<R>),
}

impl<R: RegisterSpace> SunxiClk<R> {
    pub fn new(regs: R, data: &'static CcuData) -> Self {
        match data.desc {
            CcuDesc::Legacy(desc) => Self::Legacy(LegacyClk::new(regs, desc)),
            CcuDesc::Tree(desc) => Self::Tree(TreeClk::new(regs, desc)),
        }
    }
}

impl<R> ErrorType for SunxiClk<R> {
    type Error = ErrorKind;
}

impl<R: RegisterSpace> ClockController for SunxiClk<R> {
    fn enable(&self, id: ClkId) -> Result<(), ErrorKind> {
        match self {
            Self::Legacy(clk) => clk.enable(id),
            Self::Tree(clk) => clk.enable(id),
        }
    }

    fn disable(&self, id: ClkId) -> Result<(), ErrorKind> {
        match self {
            Self::Legacy(clk) => clk.disable(id),
            Self::Tree(clk) => clk.disable(id),
        }
    }

    fn get_rate(&self, id: ClkId) -> u64 {
        match self {
            Self::Legacy(clk) => clk.get_rate(id),
            Self::Tree(clk) => clk.get_rate(id),
        }
    }

    fn set_rate(&self, id: ClkId, rate: u64) -> Result<u64, ErrorKind> {
        match self {
            Self::Legacy(clk) => clk.set_rate(id, rate),
            Self::Tree(clk) => clk.set_rate(id, rate),
        }
    }
}

impl DriverOps for SunxiClk<Mmio> {
    type Data = CcuData;

    fn probe(dev: &Device, id: &'static DeviceId<CcuData>) -> Result<Self, ErrorKind> {
        let base = dev.base().ok_or(ErrorKind::NoMemory)?;
        let data = id.data().ok_or(ErrorKind::InvalidArgument)?;

        // The window comes from the devicetree node of the CCU itself.
        let regs = unsafe { Mmio::new(base) };
        Ok(Self::new(regs, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sunxi::ccu::MHz;
    use core::cell::RefCell;

    struct Regs {
        values: RefCell<Vec<u32>>,
        writes: RefCell<Vec<(usize, u32)>>,
    }

    impl Regs {
        fn new() -> Self {
            Self {
                values: RefCell::new(vec![0; 0x900 / 4]),
                writes: RefCell::new(Vec::new()),
            }
        }
    }

    impl RegisterSpace for Regs {
        fn read32(&self, offset: usize) -> u32 {
            self.values.borrow()[offset / 4]
        }

        fn write32(&self, offset: usize, value: u32) {
            self.writes.borrow_mut().push((offset, value));
            self.values.borrow_mut()[offset / 4] = value;
        }
    }

    #[test]
    fn compatibles_resolve_to_chip_data() {
        let dev = Device::new("clock@1c20000", "allwinner,sun50i-h5-ccu");
        let id = SUNXI_CLK_DRIVER.of_match_device(&dev).unwrap();
        assert!(core::ptr::eq(id.data().unwrap(), &h3::CCU));

        let dev = Device::new("clock@1c20000", "allwinner,sun5i-a13-ccu");
        let id = SUNXI_CLK_DRIVER.of_match_device(&dev).unwrap();
        assert!(core::ptr::eq(id.data().unwrap(), &a10s::CCU));
    }

    #[test]
    fn probe_error_paths() {
        let dev = Device::new("clock", "allwinner,sun9i-a80-ccu").with_base(0x1c2_0000);
        assert_eq!(
            SUNXI_CLK_DRIVER.probe::<SunxiClk<Mmio>>(&dev).err(),
            Some(ErrorKind::NotFound)
        );

        let dev = Device::new("clock", "allwinner,sun8i-h3-ccu");
        assert_eq!(
            SUNXI_CLK_DRIVER.probe::<SunxiClk<Mmio>>(&dev).err(),
            Some(ErrorKind::NoMemory)
        );

        let dev = Device::new("clock", "allwinner,sun8i-h3-ccu").with_base(0x1c2_0000);
        let clk = SUNXI_CLK_DRIVER.probe::<SunxiClk<Mmio>>(&dev).unwrap();
        assert!(matches!(clk, SunxiClk::Legacy(_)));
    }

    #[test]
    fn legacy_gates() {
        let clk = SunxiClk::new(Regs::new(), &h3::CCU);
        clk.enable(h3::CLK_BUS_SPI0).unwrap();
        clk.enable(h3::CLK_SPI0).unwrap();
        // hole in the table and an ID past its end
        clk.enable(25).unwrap();
        clk.enable(1000).unwrap();
        clk.disable(h3::CLK_BUS_SPI0).unwrap();

        let SunxiClk::Legacy(clk) = clk else {
            panic!("h3 uses flat maps");
        };
        assert_eq!(
            *clk.regs.writes.borrow(),
            [(0x060, 1 << 20), (0x0a0, 1 << 31), (0x060, 0)]
        );
    }

    #[test]
    fn legacy_set_rate() {
        let regs = Regs::new();
        // PLL_PERIPH0 at 600 MHz
        regs.values.borrow_mut()[0x028 / 4] = (24 << 8) | (1 << 4);
        let clk = SunxiClk::new(regs, &h3::CCU);

        assert_eq!(clk.set_rate(h3::CLK_MMC1, 50 * MHz), Ok(50 * MHz));
        assert_eq!(clk.set_rate(h3::CLK_SPI0, 50 * MHz), Ok(0));
        assert_eq!(clk.set_rate(500, 50 * MHz), Ok(0));
        assert_eq!(clk.get_rate(h3::CLK_MMC1), 0);

        let SunxiClk::Legacy(clk) = clk else {
            panic!("h3 uses flat maps");
        };
        assert_eq!(clk.regs.writes.borrow().len(), 1);
        assert_eq!(clk.regs.read32(0x08c) >> 31, 1);
    }

    #[test]
    fn h6_mmc2_has_its_own_register() {
        let clk = SunxiClk::new(Regs::new(), &h6::CCU);
        clk.set_rate(h6::CLK_MMC2, 400_000).unwrap();
        clk.set_rate(h6::CLK_MMC1, 400_000).unwrap();

        let SunxiClk::Legacy(clk) = clk else {
            panic!("h6 uses flat maps");
        };
        let writes = clk.regs.writes.borrow();
        assert_eq!(writes[0].0, 0x838);
        assert_eq!(writes[1].0, 0x834);
    }

    #[test]
    fn typed_gates_and_rates() {
        let regs = Regs::new();
        regs.values.borrow_mut()[0x028 / 4] = (24 << 8) | (1 << 4);
        regs.values.borrow_mut()[0x0a4 / 4] = (1 << 24) | 5;
        let clk = SunxiClk::new(regs, &r40::CCU);

        clk.enable(r40::CLK_SPI1).unwrap();
        assert_eq!(clk.get_rate(r40::CLK_SPI1), 100 * MHz);
        assert_eq!(clk.set_rate(r40::CLK_SPI1, 50 * MHz), Ok(0));

        // internal clocks have no gate
        clk.enable(r40::CLK_AHB1).unwrap();

        let SunxiClk::Tree(clk) = clk else {
            panic!("r40 uses typed tables");
        };
        assert_eq!(*clk.regs.writes.borrow(), [(0x0a4, (1 << 31) | (1 << 24) | 5)]);
    }

    #[test]
    fn typed_without_tree() {
        let clk = SunxiClk::new(Regs::new(), &a10s::CCU);
        assert_eq!(clk.get_rate(a10s::CLK_USB_PHY0), 0);
        clk.enable(a10s::CLK_USB_PHY0).unwrap();
        clk.enable(75).unwrap();

        let SunxiClk::Tree(clk) = clk else {
            panic!("a10s uses typed tables");
        };
        assert_eq!(*clk.regs.writes.borrow(), [(0x0cc, 1 << 8)]);
    }
}
