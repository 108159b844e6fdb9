//! Allwinner H6 CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_h6.c. MMC2 lives at 0x838 and
//! the reset table is indexed by reset IDs.

use super::mmc::SUN50I_H6_MMC_CLK;
use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_MMC0: ClkId = 64;
pub const CLK_MMC1: ClkId = 65;
pub const CLK_MMC2: ClkId = 66;
pub const CLK_BUS_MMC0: ClkId = 67;
pub const CLK_BUS_MMC1: ClkId = 68;
pub const CLK_BUS_MMC2: ClkId = 69;

pub const RST_BUS_MMC0: ResetId = 18;
pub const RST_BUS_MMC1: ResetId = 19;
pub const RST_BUS_MMC2: ResetId = 20;

pub const NUM_RESETS: usize = 62;

static CLKS: [CcuClkMap; CLK_BUS_MMC2 + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_BUS_MMC2 + 1];
    t[CLK_MMC0] = CcuClkMap::new(0x830, bit(31)).with_set_rate(&SUN50I_H6_MMC_CLK);
    t[CLK_MMC1] = CcuClkMap::new(0x834, bit(31)).with_set_rate(&SUN50I_H6_MMC_CLK);
    t[CLK_MMC2] = CcuClkMap::new(0x838, bit(31)).with_set_rate(&SUN50I_H6_MMC_CLK);
    t[CLK_BUS_MMC0] = CcuClkMap::new(0x84c, bit(0));
    t[CLK_BUS_MMC1] = CcuClkMap::new(0x84c, bit(1));
    t[CLK_BUS_MMC2] = CcuClkMap::new(0x84c, bit(2));
    t
};

static RESETS: [CcuResetMap; RST_BUS_MMC2 + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_BUS_MMC2 + 1];
    t[RST_BUS_MMC0] = CcuResetMap::new(0x84c, bit(16));
    t[RST_BUS_MMC1] = CcuResetMap::new(0x84c, bit(17));
    t[RST_BUS_MMC2] = CcuResetMap::new(0x84c, bit(18));
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

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun50i-h6-ccu"];
