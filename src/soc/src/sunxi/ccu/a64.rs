//! Allwinner A64 CCU gates
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_a64.c. The A64 exposes no
//! reset lines and binds no reset controller.

use super::{CcuClkMap, CcuData, CcuDesc, LegacyCcuDesc};
use crate::sunxi::bit;
use device::ClkId;

pub const CLK_BUS_OTG: ClkId = 42;
pub const CLK_BUS_EHCI0: ClkId = 43;
pub const CLK_BUS_EHCI1: ClkId = 44;
pub const CLK_BUS_OHCI0: ClkId = 45;
pub const CLK_BUS_OHCI1: ClkId = 46;
pub const CLK_USB_PHY0: ClkId = 86;
pub const CLK_USB_PHY1: ClkId = 87;
pub const CLK_USB_HSIC: ClkId = 88;
pub const CLK_USB_HSIC_12M: ClkId = 89;
pub const CLK_USB_OHCI0: ClkId = 91;
pub const CLK_USB_OHCI1: ClkId = 93;

static CLKS: [CcuClkMap; CLK_USB_OHCI1 + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_OHCI1 + 1];
    t[CLK_BUS_OTG] = CcuClkMap::new(0x060, bit(23));
    t[CLK_BUS_EHCI0] = CcuClkMap::new(0x060, bit(24));
    t[CLK_BUS_EHCI1] = CcuClkMap::new(0x060, bit(25));
    t[CLK_BUS_OHCI0] = CcuClkMap::new(0x060, bit(28));
    t[CLK_BUS_OHCI1] = CcuClkMap::new(0x060, bit(29));
    t[CLK_USB_PHY0] = CcuClkMap::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuClkMap::new(0x0cc, bit(9));
    t[CLK_USB_HSIC] = CcuClkMap::new(0x0cc, bit(10));
    t[CLK_USB_HSIC_12M] = CcuClkMap::new(0x0cc, bit(11));
    t[CLK_USB_OHCI0] = CcuClkMap::new(0x0cc, bit(16));
    t[CLK_USB_OHCI1] = CcuClkMap::new(0x0cc, bit(17));
    t
};

static DESC: LegacyCcuDesc = LegacyCcuDesc {
    clks: &CLKS,
    resets: &[],
};

pub static CCU: CcuData = CcuData {
    desc: CcuDesc::Legacy(&DESC),
    num_resets: 0,
};

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun50i-a64-ccu"];
