//! Allwinner A31 CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_a31.c

use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_AHB1_MMC0: ClkId = 22;
pub const CLK_AHB1_MMC1: ClkId = 23;
pub const CLK_AHB1_MMC2: ClkId = 24;
pub const CLK_AHB1_MMC3: ClkId = 25;
pub const CLK_AHB1_OTG: ClkId = 34;
pub const CLK_AHB1_EHCI0: ClkId = 35;
pub const CLK_AHB1_EHCI1: ClkId = 36;
pub const CLK_AHB1_OHCI0: ClkId = 37;
pub const CLK_AHB1_OHCI1: ClkId = 38;
pub const CLK_AHB1_OHCI2: ClkId = 39;
pub const CLK_USB_PHY0: ClkId = 86;
pub const CLK_USB_PHY1: ClkId = 87;
pub const CLK_USB_PHY2: ClkId = 88;
pub const CLK_USB_OHCI0: ClkId = 89;
pub const CLK_USB_OHCI1: ClkId = 90;
pub const CLK_USB_OHCI2: ClkId = 91;

pub const RST_USB_PHY0: ResetId = 0;
pub const RST_USB_PHY1: ResetId = 1;
pub const RST_USB_PHY2: ResetId = 2;
pub const RST_AHB1_OTG: ResetId = 11;
pub const RST_AHB1_EHCI0: ResetId = 12;
pub const RST_AHB1_EHCI1: ResetId = 13;
pub const RST_AHB1_OHCI0: ResetId = 14;
pub const RST_AHB1_OHCI1: ResetId = 15;
pub const RST_AHB1_OHCI2: ResetId = 16;

pub const NUM_RESETS: usize = 56;

static CLKS: [CcuClkMap; CLK_USB_OHCI2 + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_OHCI2 + 1];
    t[CLK_AHB1_MMC0] = CcuClkMap::new(0x060, bit(8));
    t[CLK_AHB1_MMC1] = CcuClkMap::new(0x060, bit(9));
    t[CLK_AHB1_MMC2] = CcuClkMap::new(0x060, bit(10));
    t[CLK_AHB1_MMC3] = CcuClkMap::new(0x060, bit(12));
    t[CLK_AHB1_OTG] = CcuClkMap::new(0x060, bit(24));
    t[CLK_AHB1_EHCI0] = CcuClkMap::new(0x060, bit(26));
    t[CLK_AHB1_EHCI1] = CcuClkMap::new(0x060, bit(27));
    t[CLK_AHB1_OHCI0] = CcuClkMap::new(0x060, bit(29));
    t[CLK_AHB1_OHCI1] = CcuClkMap::new(0x060, bit(30));
    t[CLK_AHB1_OHCI2] = CcuClkMap::new(0x060, bit(31));
    t[CLK_USB_PHY0] = CcuClkMap::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuClkMap::new(0x0cc, bit(9));
    t[CLK_USB_PHY2] = CcuClkMap::new(0x0cc, bit(10));
    t[CLK_USB_OHCI0] = CcuClkMap::new(0x0cc, bit(16));
    t[CLK_USB_OHCI1] = CcuClkMap::new(0x0cc, bit(17));
    t[CLK_USB_OHCI2] = CcuClkMap::new(0x0cc, bit(18));
    t
};

static RESETS: [CcuResetMap; RST_AHB1_OHCI2 + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_AHB1_OHCI2 + 1];
    t[RST_USB_PHY0] = CcuResetMap::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuResetMap::new(0x0cc, bit(1));
    t[RST_USB_PHY2] = CcuResetMap::new(0x0cc, bit(2));
    t[RST_AHB1_OTG] = CcuResetMap::new(0x2c0, bit(24));
    t[RST_AHB1_EHCI0] = CcuResetMap::new(0x2c0, bit(26));
    t[RST_AHB1_EHCI1] = CcuResetMap::new(0x2c0, bit(27));
    t[RST_AHB1_OHCI0] = CcuResetMap::new(0x2c0, bit(29));
    t[RST_AHB1_OHCI1] = CcuResetMap::new(0x2c0, bit(30));
    t[RST_AHB1_OHCI2] = CcuResetMap::new(0x2c0, bit(31));
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

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun6i-a31-ccu"];
