//! Allwinner H3 / H5 CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_h3.c, with the SPI bus resets
//! that the sun6i SPI controller needs.

use super::mmc::SUN6I_MMC_CLK;
use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_BUS_MMC0: ClkId = 22;
pub const CLK_BUS_MMC1: ClkId = 23;
pub const CLK_BUS_MMC2: ClkId = 24;
pub const CLK_BUS_SPI0: ClkId = 30;
pub const CLK_BUS_SPI1: ClkId = 31;
pub const CLK_BUS_OTG: ClkId = 32;
pub const CLK_BUS_EHCI0: ClkId = 33;
pub const CLK_BUS_EHCI1: ClkId = 34;
pub const CLK_BUS_EHCI2: ClkId = 35;
pub const CLK_BUS_EHCI3: ClkId = 36;
pub const CLK_BUS_OHCI0: ClkId = 37;
pub const CLK_BUS_OHCI1: ClkId = 38;
pub const CLK_BUS_OHCI2: ClkId = 39;
pub const CLK_BUS_OHCI3: ClkId = 40;
pub const CLK_MMC0: ClkId = 71;
pub const CLK_MMC1: ClkId = 74;
pub const CLK_MMC2: ClkId = 77;
pub const CLK_SPI0: ClkId = 82;
pub const CLK_SPI1: ClkId = 83;
pub const CLK_USB_PHY0: ClkId = 88;
pub const CLK_USB_PHY1: ClkId = 89;
pub const CLK_USB_PHY2: ClkId = 90;
pub const CLK_USB_PHY3: ClkId = 91;
pub const CLK_USB_OHCI0: ClkId = 92;
pub const CLK_USB_OHCI1: ClkId = 93;
pub const CLK_USB_OHCI2: ClkId = 94;
pub const CLK_USB_OHCI3: ClkId = 95;

pub const RST_USB_PHY0: ResetId = 0;
pub const RST_USB_PHY1: ResetId = 1;
pub const RST_USB_PHY2: ResetId = 2;
pub const RST_USB_PHY3: ResetId = 3;
pub const RST_BUS_MMC0: ResetId = 7;
pub const RST_BUS_MMC1: ResetId = 8;
pub const RST_BUS_MMC2: ResetId = 9;
pub const RST_BUS_SPI0: ResetId = 15;
pub const RST_BUS_SPI1: ResetId = 16;
pub const RST_BUS_OTG: ResetId = 17;
pub const RST_BUS_EHCI0: ResetId = 18;
pub const RST_BUS_EHCI1: ResetId = 19;
pub const RST_BUS_EHCI2: ResetId = 20;
pub const RST_BUS_EHCI3: ResetId = 21;
pub const RST_BUS_OHCI0: ResetId = 22;
pub const RST_BUS_OHCI1: ResetId = 23;
pub const RST_BUS_OHCI2: ResetId = 24;
pub const RST_BUS_OHCI3: ResetId = 25;

pub const NUM_RESETS: usize = 53;

static CLKS: [CcuClkMap; CLK_USB_OHCI3 + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_OHCI3 + 1];
    t[CLK_BUS_MMC0] = CcuClkMap::new(0x060, bit(8));
    t[CLK_BUS_MMC1] = CcuClkMap::new(0x060, bit(9));
    t[CLK_BUS_MMC2] = CcuClkMap::new(0x060, bit(10));
    t[CLK_BUS_SPI0] = CcuClkMap::new(0x060, bit(20));
    t[CLK_BUS_SPI1] = CcuClkMap::new(0x060, bit(21));
    t[CLK_BUS_OTG] = CcuClkMap::new(0x060, bit(23));
    t[CLK_BUS_EHCI0] = CcuClkMap::new(0x060, bit(24));
    t[CLK_BUS_EHCI1] = CcuClkMap::new(0x060, bit(25));
    t[CLK_BUS_EHCI2] = CcuClkMap::new(0x060, bit(26));
    t[CLK_BUS_EHCI3] = CcuClkMap::new(0x060, bit(27));
    t[CLK_BUS_OHCI0] = CcuClkMap::new(0x060, bit(28));
    t[CLK_BUS_OHCI1] = CcuClkMap::new(0x060, bit(29));
    t[CLK_BUS_OHCI2] = CcuClkMap::new(0x060, bit(30));
    t[CLK_BUS_OHCI3] = CcuClkMap::new(0x060, bit(31));
    t[CLK_MMC0] = CcuClkMap::new(0x088, bit(31)).with_set_rate(&SUN6I_MMC_CLK);
    t[CLK_MMC1] = CcuClkMap::new(0x08c, bit(31)).with_set_rate(&SUN6I_MMC_CLK);
    t[CLK_MMC2] = CcuClkMap::new(0x090, bit(31)).with_set_rate(&SUN6I_MMC_CLK);
    t[CLK_SPI0] = CcuClkMap::new(0x0a0, bit(31));
    t[CLK_SPI1] = CcuClkMap::new(0x0a4, bit(31));
    t[CLK_USB_PHY0] = CcuClkMap::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuClkMap::new(0x0cc, bit(9));
    t[CLK_USB_PHY2] = CcuClkMap::new(0x0cc, bit(10));
    t[CLK_USB_PHY3] = CcuClkMap::new(0x0cc, bit(11));
    t[CLK_USB_OHCI0] = CcuClkMap::new(0x0cc, bit(16));
    t[CLK_USB_OHCI1] = CcuClkMap::new(0x0cc, bit(17));
    t[CLK_USB_OHCI2] = CcuClkMap::new(0x0cc, bit(18));
    t[CLK_USB_OHCI3] = CcuClkMap::new(0x0cc, bit(19));
    t
};

static RESETS: [CcuResetMap; RST_BUS_OHCI3 + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_BUS_OHCI3 + 1];
    t[RST_USB_PHY0] = CcuResetMap::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuResetMap::new(0x0cc, bit(1));
    t[RST_USB_PHY2] = CcuResetMap::new(0x0cc, bit(2));
    t[RST_USB_PHY3] = CcuResetMap::new(0x0cc, bit(3));
    t[RST_BUS_MMC0] = CcuResetMap::new(0x2c0, bit(8));
    t[RST_BUS_MMC1] = CcuResetMap::new(0x2c0, bit(9));
    t[RST_BUS_MMC2] = CcuResetMap::new(0x2c0, bit(10));
    t[RST_BUS_SPI0] = CcuResetMap::new(0x2c0, bit(20));
    t[RST_BUS_SPI1] = CcuResetMap::new(0x2c0, bit(21));
    t[RST_BUS_OTG] = CcuResetMap::new(0x2c0, bit(23));
    t[RST_BUS_EHCI0] = CcuResetMap::new(0x2c0, bit(24));
    t[RST_BUS_EHCI1] = CcuResetMap::new(0x2c0, bit(25));
    t[RST_BUS_EHCI2] = CcuResetMap::new(0x2c0, bit(26));
    t[RST_BUS_EHCI3] = CcuResetMap::new(0x2c0, bit(27));
    t[RST_BUS_OHCI0] = CcuResetMap::new(0x2c0, bit(28));
    t[RST_BUS_OHCI1] = CcuResetMap::new(0x2c0, bit(29));
    t[RST_BUS_OHCI2] = CcuResetMap::new(0x2c0, bit(30));
    t[RST_BUS_OHCI3] = CcuResetMap::new(0x2c0, bit(31));
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

pub const COMPATIBLES: [&str; 2] = ["allwinner,sun8i-h3-ccu", "allwinner,sun50i-h5-ccu"];
