//! Allwinner A83T CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_a83t.c

use super::mmc::SUN8I_A83T_MMC_CLK;
use super::{CcuClkMap, CcuData, CcuDesc, CcuResetMap, LegacyCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_BUS_MMC0: ClkId = 19;
pub const CLK_BUS_MMC1: ClkId = 20;
pub const CLK_BUS_MMC2: ClkId = 21;
pub const CLK_BUS_EMAC: ClkId = 27;
pub const CLK_BUS_OTG: ClkId = 30;
pub const CLK_BUS_EHCI0: ClkId = 31;
pub const CLK_BUS_EHCI1: ClkId = 32;
pub const CLK_BUS_OHCI0: ClkId = 33;
pub const CLK_BUS_UART0: ClkId = 56;
pub const CLK_BUS_UART1: ClkId = 57;
pub const CLK_BUS_UART2: ClkId = 58;
pub const CLK_BUS_UART3: ClkId = 59;
pub const CLK_BUS_UART4: ClkId = 60;
pub const CLK_MMC0: ClkId = 71;
pub const CLK_MMC1: ClkId = 74;
pub const CLK_MMC2: ClkId = 77;
pub const CLK_USB_PHY0: ClkId = 80;
pub const CLK_USB_PHY1: ClkId = 81;
pub const CLK_USB_HSIC: ClkId = 82;
pub const CLK_USB_HSIC_12M: ClkId = 83;
pub const CLK_USB_OHCI0: ClkId = 84;

pub const RST_USB_PHY0: ResetId = 0;
pub const RST_USB_PHY1: ResetId = 1;
pub const RST_USB_HSIC: ResetId = 2;
pub const RST_BUS_MMC0: ResetId = 7;
pub const RST_BUS_MMC1: ResetId = 8;
pub const RST_BUS_MMC2: ResetId = 9;
pub const RST_BUS_OTG: ResetId = 17;
pub const RST_BUS_EHCI0: ResetId = 18;
pub const RST_BUS_EHCI1: ResetId = 19;
pub const RST_BUS_OHCI0: ResetId = 20;
pub const RST_BUS_UART0: ResetId = 33;
pub const RST_BUS_UART1: ResetId = 34;
pub const RST_BUS_UART2: ResetId = 35;
pub const RST_BUS_UART3: ResetId = 36;
pub const RST_BUS_UART4: ResetId = 37;

pub const NUM_RESETS: usize = 44;

static CLKS: [CcuClkMap; CLK_USB_OHCI0 + 1] = {
    let mut t = [CcuClkMap::EMPTY; CLK_USB_OHCI0 + 1];
    t[CLK_BUS_MMC0] = CcuClkMap::new(0x060, bit(8));
    t[CLK_BUS_MMC1] = CcuClkMap::new(0x060, bit(9));
    t[CLK_BUS_MMC2] = CcuClkMap::new(0x060, bit(10));
    t[CLK_BUS_EMAC] = CcuClkMap::new(0x060, bit(17));
    t[CLK_BUS_OTG] = CcuClkMap::new(0x060, bit(24));
    t[CLK_BUS_EHCI0] = CcuClkMap::new(0x060, bit(26));
    t[CLK_BUS_EHCI1] = CcuClkMap::new(0x060, bit(27));
    t[CLK_BUS_OHCI0] = CcuClkMap::new(0x060, bit(29));
    t[CLK_BUS_UART0] = CcuClkMap::new(0x06c, bit(16));
    t[CLK_BUS_UART1] = CcuClkMap::new(0x06c, bit(17));
    t[CLK_BUS_UART2] = CcuClkMap::new(0x06c, bit(18));
    t[CLK_BUS_UART3] = CcuClkMap::new(0x06c, bit(19));
    t[CLK_BUS_UART4] = CcuClkMap::new(0x06c, bit(20));
    t[CLK_MMC0] = CcuClkMap::new(0x088, bit(31)).with_set_rate(&SUN8I_A83T_MMC_CLK);
    t[CLK_MMC1] = CcuClkMap::new(0x08c, bit(31)).with_set_rate(&SUN8I_A83T_MMC_CLK);
    t[CLK_MMC2] = CcuClkMap::new(0x090, bit(31)).with_set_rate(&SUN8I_A83T_MMC_CLK);
    t[CLK_USB_PHY0] = CcuClkMap::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuClkMap::new(0x0cc, bit(9));
    t[CLK_USB_HSIC] = CcuClkMap::new(0x0cc, bit(10));
    t[CLK_USB_HSIC_12M] = CcuClkMap::new(0x0cc, bit(11));
    t[CLK_USB_OHCI0] = CcuClkMap::new(0x0cc, bit(16));
    t
};

static RESETS: [CcuResetMap; RST_BUS_UART4 + 1] = {
    let mut t = [CcuResetMap::EMPTY; RST_BUS_UART4 + 1];
    t[RST_USB_PHY0] = CcuResetMap::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuResetMap::new(0x0cc, bit(1));
    t[RST_USB_HSIC] = CcuResetMap::new(0x0cc, bit(2));
    t[RST_BUS_MMC0] = CcuResetMap::new(0x2c0, bit(8));
    t[RST_BUS_MMC1] = CcuResetMap::new(0x2c0, bit(9));
    t[RST_BUS_MMC2] = CcuResetMap::new(0x2c0, bit(10));
    t[RST_BUS_OTG] = CcuResetMap::new(0x2c0, bit(24));
    t[RST_BUS_EHCI0] = CcuResetMap::new(0x2c0, bit(26));
    t[RST_BUS_EHCI1] = CcuResetMap::new(0x2c0, bit(27));
    t[RST_BUS_OHCI0] = CcuResetMap::new(0x2c0, bit(29));
    t[RST_BUS_UART0] = CcuResetMap::new(0x2d8, bit(16));
    t[RST_BUS_UART1] = CcuResetMap::new(0x2d8, bit(17));
    t[RST_BUS_UART2] = CcuResetMap::new(0x2d8, bit(18));
    t[RST_BUS_UART3] = CcuResetMap::new(0x2d8, bit(19));
    t[RST_BUS_UART4] = CcuResetMap::new(0x2d8, bit(20));
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

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun8i-a83t-ccu"];
