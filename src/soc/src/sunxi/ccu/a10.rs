//! Allwinner A10 / A20 CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_a10.c

use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_AHB_OTG: ClkId = 26;
pub const CLK_AHB_EHCI0: ClkId = 27;
pub const CLK_AHB_OHCI0: ClkId = 28;
pub const CLK_AHB_EHCI1: ClkId = 29;
pub const CLK_AHB_OHCI1: ClkId = 30;
pub const CLK_AHB_MMC0: ClkId = 34;
pub const CLK_AHB_MMC1: ClkId = 35;
pub const CLK_AHB_MMC2: ClkId = 36;
pub const CLK_AHB_MMC3: ClkId = 37;
pub const CLK_USB_OHCI0: ClkId = 103;
pub const CLK_USB_OHCI1: ClkId = 104;
pub const CLK_USB_PHY: ClkId = 105;

pub const RST_USB_PHY0: ResetId = 1;
pub const RST_USB_PHY1: ResetId = 2;
pub const RST_USB_PHY2: ResetId = 3;

pub const NUM_RESETS: usize = 22;

static CLKS: [CcuClkMap; CLK_USB_PHY + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_PHY + 1];
    t[CLK_AHB_OTG] = CcuClkMap::new(0x060, bit(0));
    t[CLK_AHB_EHCI0] = CcuClkMap::new(0x060, bit(1));
    t[CLK_AHB_OHCI0] = CcuClkMap::new(0x060, bit(2));
    t[CLK_AHB_EHCI1] = CcuClkMap::new(0x060, bit(3));
    t[CLK_AHB_OHCI1] = CcuClkMap::new(0x060, bit(4));
    t[CLK_AHB_MMC0] = CcuClkMap::new(0x060, bit(8));
    t[CLK_AHB_MMC1] = CcuClkMap::new(0x060, bit(9));
    t[CLK_AHB_MMC2] = CcuClkMap::new(0x060, bit(10));
    t[CLK_AHB_MMC3] = CcuClkMap::new(0x060, bit(11));
    t[CLK_USB_OHCI0] = CcuClkMap::new(0x0cc, bit(6));
    t[CLK_USB_OHCI1] = CcuClkMap::new(0x0cc, bit(7));
    t[CLK_USB_PHY] = CcuClkMap::new(0x0cc, bit(8));
    t
};

static RESETS: [CcuResetMap; RST_USB_PHY2 + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_USB_PHY2 + 1];
    t[RST_USB_PHY0] = CcuResetMap::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuResetMap::new(0x0cc, bit(1));
    t[RST_USB_PHY2] = CcuResetMap::new(0x0cc, bit(2));
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

pub const COMPATIBLES: [&str; 2] = ["allwinner,sun4i-a10-ccu", "allwinner,sun7i-a20-ccu"];
