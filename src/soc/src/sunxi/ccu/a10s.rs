//! Allwinner A10s / A13 CCU gates and resets
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_a10s.c

use super::{CcuData, CcuDesc, CcuGate, CcuReset, TreeCcuDesc};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

pub const CLK_AHB_OTG: ClkId = 20;
pub const CLK_AHB_EHCI: ClkId = 21;
pub const CLK_AHB_OHCI: ClkId = 22;
pub const CLK_USB_OHCI: ClkId = 84;
pub const CLK_USB_PHY0: ClkId = 85;
pub const CLK_USB_PHY1: ClkId = 86;

pub const RST_USB_PHY0: ResetId = 1;
pub const RST_USB_PHY1: ResetId = 2;

pub const NUM_RESETS: usize = 10;

static GATES: [CcuGate; CLK_USB_PHY1 + 1] = {
    let mut t = [CcuGate::EMPTY; CLK_USB_PHY1 + 1];
    t[CLK_AHB_OTG] = CcuGate::new(0x060, bit(0));
    t[CLK_AHB_EHCI] = CcuGate::new(0x060, bit(1));
    t[CLK_AHB_OHCI] = CcuGate::new(0x060, bit(2));
    t[CLK_USB_OHCI] = CcuGate::new(0x0cc, bit(6));
    t[CLK_USB_PHY0] = CcuGate::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuGate::new(0x0cc, bit(9));
    t
};

static RESETS: [CcuReset; RST_USB_PHY1 + 1] = {
    let mut t = [CcuReset::EMPTY; RST_USB_PHY1 + 1];
    t[RST_USB_PHY0] = CcuReset::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuReset::new(0x0cc, bit(1));
    t
};

static DESC: TreeCcuDesc = TreeCcuDesc {
    tree: None,
    gates: &GATES,
    resets: &RESETS,
};

pub static CCU: CcuData = CcuData {
    desc: CcuDesc::Tree(&DESC),
    num_resets: NUM_RESETS,
};

pub const COMPATIBLES: [&str; 2] = ["allwinner,sun5i-a10s-ccu", "allwinner,sun5i-a13-ccu"];
