//! Allwinner V3s CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_v3s.c

use super::mmc::SUN6I_MMC_CLK;
use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_BUS_MMC0: ClkId = 18;
pub const CLK_BUS_MMC1: ClkId = 19;
pub const CLK_BUS_MMC2: ClkId = 20;
pub const CLK_BUS_SPI0: ClkId = 23;
pub const CLK_BUS_OTG: ClkId = 24;
pub const CLK_MMC0: ClkId = 42;
pub const CLK_MMC1: ClkId = 45;
pub const CLK_MMC2: ClkId = 48;
pub const CLK_SPI0: ClkId = 51;
pub const CLK_USB_PHY0: ClkId = 52;

pub const RST_USB_PHY0: ResetId = 0;
pub const RST_BUS_MMC0: ResetId = 7;
pub const RST_BUS_MMC1: ResetId = 8;
pub const RST_BUS_MMC2: ResetId = 9;
pub const RST_BUS_SPI0: ResetId = 12;
pub const RST_BUS_OTG: ResetId = 13;

pub const NUM_RESETS: usize = 53;

static CLKS: [CcuClkMap; CLK_USB_PHY0 + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_PHY0 + 1];
    t[CLK_BUS_MMC0] = CcuClkMap::new(0x060, bit(8));
    t[CLK_BUS_MMC1] = CcuClkMap::new(0x060, bit(9));
    t[CLK_BUS_MMC2] = CcuClkMap::new(0x060, bit(10));
    t[CLK_BUS_SPI0] = CcuClkMap::new(0x060, bit(20));
    t[CLK_BUS_OTG] = CcuClkMap::new(0x060, bit(24));
    t[CLK_MMC0] = CcuClkMap::new(0x088, bit(31)).with_set_rate(&SUN6I_MMC_CLK);
    t[CLK_MMC1] = CcuClkMap::new(0x08c, bit(31)).with_set_rate(&SUN6I_MMC_CLK);
    t[CLK_MMC2] = CcuClkMap::new(0x090, bit(31)).with_set_rate(&SUN6I_MMC_CLK);
    t[CLK_SPI0] = CcuClkMap::new(0x0a0, bit(31));
    t[CLK_USB_PHY0] = CcuClkMap::new(0x0cc, bit(8));
    t
};

static RESETS: [CcuResetMap; RST_BUS_OTG + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_BUS_OTG + 1];
    t[RST_USB_PHY0] = CcuResetMap::new(0x0cc, bit(0));
    t[RST_BUS_MMC0] = CcuResetMap::new(0x2c0, bit(8));
    t[RST_BUS_MMC1] = CcuResetMap::new(0x2c0, bit(9));
    t[RST_BUS_MMC2] = CcuResetMap::new(0x2c0, bit(10));
    t[RST_BUS_SPI0] = CcuResetMap::new(0x2c0, bit(20));
    t[RST_BUS_OTG] = CcuResetMap::new(0x2c0, bit(24));
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

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun8i-v3s-ccu"];
