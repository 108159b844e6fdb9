//! Allwinner A23 CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_a23.c

use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_BUS_OTG: ClkId = 36;
pub const CLK_BUS_EHCI: ClkId = 37;
pub const CLK_BUS_OHCI: ClkId = 38;
pub const CLK_USB_PHY0: ClkId = 70;
pub const CLK_USB_PHY1: ClkId = 71;
pub const CLK_USB_HSIC: ClkId = 72;
pub const CLK_USB_HSIC_12M: ClkId = 73;
pub const CLK_USB_OHCI: ClkId = 74;

pub const RST_USB_PHY0: ResetId = 0;
pub const RST_USB_PHY1: ResetId = 1;
pub const RST_USB_HSIC: ResetId = 2;
pub const RST_BUS_OTG: ResetId = 7;
pub const RST_BUS_EHCI: ResetId = 8;
pub const RST_BUS_OHCI: ResetId = 9;

pub const NUM_RESETS: usize = 39;

static CLKS: [CcuClkMap; CLK_USB_OHCI + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_OHCI + 1];
    t[CLK_BUS_OTG] = CcuClkMap::new(0x060, bit(24));
    t[CLK_BUS_EHCI] = CcuClkMap::new(0x060, bit(26));
    t[CLK_BUS_OHCI] = CcuClkMap::new(0x060, bit(29));
    t[CLK_USB_PHY0] = CcuClkMap::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuClkMap::new(0x0cc, bit(9));
    t[CLK_USB_HSIC] = CcuClkMap::new(0x0cc, bit(10));
    t[CLK_USB_HSIC_12M] = CcuClkMap::new(0x0cc, bit(11));
    t[CLK_USB_OHCI] = CcuClkMap::new(0x0cc, bit(16));
    t
};

static RESETS: [CcuResetMap; RST_BUS_OHCI + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_BUS_OHCI + 1];
    t[RST_USB_PHY0] = CcuResetMap::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuResetMap::new(0x0cc, bit(1));
    t[RST_USB_HSIC] = CcuResetMap::new(0x0cc, bit(2));
    t[RST_BUS_OTG] = CcuResetMap::new(0x2c0, bit(24));
    t[RST_BUS_EHCI] = CcuResetMap::new(0x2c0, bit(26));
    t[RST_BUS_OHCI] = CcuResetMap::new(0x2c0, bit(29));
    t
};

static DESC: LegacyCcuDesc = LegacyCcuDesc {
    clks: &CLKS,
    resets: &RESETS,
};

pub static CCU: CcuData = CcuData {
    desc: CcuDesc::Legacy(&DESC),
    num_resets: NUM_RESETS,
};

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun8i-a23-ccu"];
