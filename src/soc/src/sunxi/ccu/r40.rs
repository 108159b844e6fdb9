//! Allwinner R40 CCU gates, resets and clock tree
//!
//! Ported from u-boot: drivers/clk/sunxi/clk_r40.c. The tree covers the
//! peripheral PLLs, the AHB1/APB2 buses and the MMC and SPI module clocks;
//! bus gates are re-rooted onto the bus that feeds them.

use super::{
    CcuBitField, CcuClkTree, CcuData, CcuDesc, CcuDivField, CcuGate, CcuReset, TreeCcuDesc,
    OSC24M_HZ, OSC32K_HZ,
};
use crate::sunxi::bit;
use device::{ClkId, ResetId};

// Internal clocks, not exported through the bindings
pub const CLK_PLL_PERIPH0: ClkId = 11;
pub const CLK_PLL_PERIPH1: ClkId = 13;
pub const CLK_AXI: ClkId = 25;
pub const CLK_AHB1: ClkId = 26;
pub const CLK_APB1: ClkId = 27;
pub const CLK_APB2: ClkId = 28;

pub const CLK_BUS_MMC0: ClkId = 39;
pub const CLK_BUS_MMC1: ClkId = 40;
pub const CLK_BUS_MMC2: ClkId = 41;
pub const CLK_BUS_MMC3: ClkId = 42;
pub const CLK_BUS_SPI0: ClkId = 47;
pub const CLK_BUS_SPI1: ClkId = 48;
pub const CLK_BUS_SPI2: ClkId = 49;
pub const CLK_BUS_SPI3: ClkId = 50;
pub const CLK_BUS_OTG: ClkId = 52;
pub const CLK_BUS_EHCI0: ClkId = 53;
pub const CLK_BUS_EHCI1: ClkId = 54;
pub const CLK_BUS_EHCI2: ClkId = 55;
pub const CLK_BUS_OHCI0: ClkId = 56;
pub const CLK_BUS_OHCI1: ClkId = 57;
pub const CLK_BUS_OHCI2: ClkId = 58;
pub const CLK_BUS_UART0: ClkId = 97;
pub const CLK_MMC0: ClkId = 127;
pub const CLK_MMC1: ClkId = 128;
pub const CLK_MMC2: ClkId = 129;
pub const CLK_MMC3: ClkId = 130;
pub const CLK_SPI0: ClkId = 133;
pub const CLK_SPI1: ClkId = 134;
pub const CLK_SPI2: ClkId = 135;
pub const CLK_SPI3: ClkId = 136;
pub const CLK_USB_PHY0: ClkId = 140;
pub const CLK_USB_PHY1: ClkId = 141;
pub const CLK_USB_PHY2: ClkId = 142;
pub const CLK_USB_OHCI0: ClkId = 143;
pub const CLK_USB_OHCI1: ClkId = 144;
pub const CLK_USB_OHCI2: ClkId = 145;

/// Number of clocks handed out through the bindings
pub const CLK_NUMBER: ClkId = 155;
pub const CLK_OSC24M: ClkId = CLK_NUMBER;
pub const CLK_OSC32K: ClkId = CLK_NUMBER + 1;
/// PLL_PERIPH0 through the AHB1 pre-divider
pub const CLK_AHB1_PLL_PERIPH0: ClkId = CLK_NUMBER + 2;

pub const RST_USB_PHY0: ResetId = 0;
pub const RST_USB_PHY1: ResetId = 1;
pub const RST_USB_PHY2: ResetId = 2;
pub const RST_BUS_MMC0: ResetId = 14;
pub const RST_BUS_MMC1: ResetId = 15;
pub const RST_BUS_MMC2: ResetId = 16;
pub const RST_BUS_MMC3: ResetId = 17;
pub const RST_BUS_SPI0: ResetId = 23;
pub const RST_BUS_SPI1: ResetId = 24;
pub const RST_BUS_SPI2: ResetId = 25;
pub const RST_BUS_SPI3: ResetId = 26;
pub const RST_BUS_OTG: ResetId = 28;
pub const RST_BUS_EHCI0: ResetId = 29;
pub const RST_BUS_EHCI1: ResetId = 30;
pub const RST_BUS_EHCI2: ResetId = 31;
pub const RST_BUS_OHCI0: ResetId = 32;
pub const RST_BUS_OHCI1: ResetId = 33;
pub const RST_BUS_OHCI2: ResetId = 34;
pub const RST_BUS_UART0: ResetId = 68;

pub const NUM_RESETS: usize = 80;

static AHB1_PARENTS: [ClkId; 4] = [CLK_OSC32K, CLK_OSC24M, CLK_AXI, CLK_AHB1_PLL_PERIPH0];
static AHB1_PREDIV_PARENTS: [ClkId; 1] = [CLK_PLL_PERIPH0];
static APB1_PARENTS: [ClkId; 1] = [CLK_AHB1];
static APB2_PARENTS: [ClkId; 4] = [CLK_OSC32K, CLK_OSC24M, CLK_PLL_PERIPH0, CLK_PLL_PERIPH0];
static MOD_PARENTS: [ClkId; 3] = [CLK_OSC24M, CLK_PLL_PERIPH0, CLK_PLL_PERIPH1];

const PLL_PERIPH_N: CcuBitField = CcuBitField::new(8, 5).with_offset(1);
const PLL_PERIPH_K: CcuBitField = CcuBitField::new(4, 2).with_offset(1).with_min(2);

const MOD_M: CcuDivField = CcuDivField::new(0, 4).with_offset(1);
const MOD_P: CcuDivField = CcuDivField::new(16, 2);
const MOD_MUX: CcuBitField = CcuBitField::new(24, 2);

static TREE: [CcuClkTree; CLK_AHB1_PLL_PERIPH0 + 1] = {
    let mut t = [CcuClkTree::EMPTY; CLK_AHB1_PLL_PERIPH0 + 1];
    t[CLK_OSC24M] = CcuClkTree::fixed(OSC24M_HZ);
    t[CLK_OSC32K] = CcuClkTree::fixed(OSC32K_HZ);

    t[CLK_PLL_PERIPH0] =
        CcuClkTree::nk_postdiv(0x028, PLL_PERIPH_N, PLL_PERIPH_K, 2, CLK_OSC24M);
    t[CLK_PLL_PERIPH1] =
        CcuClkTree::nk_postdiv(0x02c, PLL_PERIPH_N, PLL_PERIPH_K, 2, CLK_OSC24M);

    // AHB1_PRE_DIV only applies to the PLL_PERIPH0 input of the mux
    t[CLK_AHB1_PLL_PERIPH0] = CcuClkTree::mp(
        0x054,
        CcuDivField::new(6, 2).with_offset(1),
        CcuDivField::EMPTY,
        CcuBitField::EMPTY,
        &AHB1_PREDIV_PARENTS,
    );
    t[CLK_AHB1] = CcuClkTree::mp(
        0x054,
        CcuDivField::EMPTY,
        CcuDivField::new(4, 2),
        CcuBitField::new(12, 2),
        &AHB1_PARENTS,
    );
    // APB1 divides by 2 for both raw 0 and 1, which P cannot express
    t[CLK_APB1] = CcuClkTree::mp(
        0x054,
        CcuDivField::EMPTY,
        CcuDivField::new(8, 2),
        CcuBitField::EMPTY,
        &APB1_PARENTS,
    )
    .pending();
    t[CLK_APB2] = CcuClkTree::mp(
        0x058,
        CcuDivField::new(0, 5).with_offset(1),
        CcuDivField::new(16, 2),
        CcuBitField::new(24, 2),
        &APB2_PARENTS,
    );

    t[CLK_BUS_MMC0] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_MMC1] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_MMC2] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_MMC3] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_SPI0] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_SPI1] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_SPI2] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_SPI3] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_OTG] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_EHCI0] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_EHCI1] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_EHCI2] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_OHCI0] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_OHCI1] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_OHCI2] = CcuClkTree::misc(CLK_AHB1);
    t[CLK_BUS_UART0] = CcuClkTree::misc(CLK_APB2);

    t[CLK_MMC0] = CcuClkTree::mp(0x088, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_MMC1] = CcuClkTree::mp(0x08c, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_MMC2] = CcuClkTree::mp(0x090, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_MMC3] = CcuClkTree::mp(0x094, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_SPI0] = CcuClkTree::mp(0x0a0, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_SPI1] = CcuClkTree::mp(0x0a4, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_SPI2] = CcuClkTree::mp(0x0a8, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);
    t[CLK_SPI3] = CcuClkTree::mp(0x0ac, MOD_M, MOD_P, MOD_MUX, &MOD_PARENTS);

    t[CLK_USB_PHY0] = CcuClkTree::misc(CLK_OSC24M);
    t[CLK_USB_PHY1] = CcuClkTree::misc(CLK_OSC24M);
    t[CLK_USB_PHY2] = CcuClkTree::misc(CLK_OSC24M);
    t[CLK_USB_OHCI0] = CcuClkTree::misc(CLK_OSC24M);
    t[CLK_USB_OHCI1] = CcuClkTree::misc(CLK_OSC24M);
    t[CLK_USB_OHCI2] = CcuClkTree::misc(CLK_OSC24M);
    t
};

static GATES: [CcuGate; CLK_USB_OHCI2 + 1] = {
    let mut t = [CcuGate::EMPTY; CLK_USB_OHCI2 + 1];
    t[CLK_BUS_MMC0] = CcuGate::new(0x060, bit(8));
    t[CLK_BUS_MMC1] = CcuGate::new(0x060, bit(9));
    t[CLK_BUS_MMC2] = CcuGate::new(0x060, bit(10));
    t[CLK_BUS_MMC3] = CcuGate::new(0x060, bit(11));
    t[CLK_BUS_SPI0] = CcuGate::new(0x060, bit(20));
    t[CLK_BUS_SPI1] = CcuGate::new(0x060, bit(21));
    t[CLK_BUS_SPI2] = CcuGate::new(0x060, bit(22));
    t[CLK_BUS_SPI3] = CcuGate::new(0x060, bit(23));
    t[CLK_BUS_OTG] = CcuGate::new(0x060, bit(25));
    t[CLK_BUS_EHCI0] = CcuGate::new(0x060, bit(26));
    t[CLK_BUS_EHCI1] = CcuGate::new(0x060, bit(27));
    t[CLK_BUS_EHCI2] = CcuGate::new(0x060, bit(28));
    t[CLK_BUS_OHCI0] = CcuGate::new(0x060, bit(29));
    t[CLK_BUS_OHCI1] = CcuGate::new(0x060, bit(30));
    t[CLK_BUS_OHCI2] = CcuGate::new(0x060, bit(31));
    t[CLK_BUS_UART0] = CcuGate::new(0x06c, bit(16));
    t[CLK_MMC0] = CcuGate::new(0x088, bit(31));
    t[CLK_MMC1] = CcuGate::new(0x08c, bit(31));
    t[CLK_MMC2] = CcuGate::new(0x090, bit(31));
    t[CLK_MMC3] = CcuGate::new(0x094, bit(31));
    t[CLK_SPI0] = CcuGate::new(0x0a0, bit(31));
    t[CLK_SPI1] = CcuGate::new(0x0a4, bit(31));
    t[CLK_SPI2] = CcuGate::new(0x0a8, bit(31));
    t[CLK_SPI3] = CcuGate::new(0x0ac, bit(31));
    t[CLK_USB_PHY0] = CcuGate::new(0x0cc, bit(8));
    t[CLK_USB_PHY1] = CcuGate::new(0x0cc, bit(9));
    t[CLK_USB_PHY2] = CcuGate::new(0x0cc, bit(10));
    t[CLK_USB_OHCI0] = CcuGate::new(0x0cc, bit(16));
    t[CLK_USB_OHCI1] = CcuGate::new(0x0cc, bit(17));
    t[CLK_USB_OHCI2] = CcuGate::new(0x0cc, bit(18));
    t
};

static RESETS: [CcuReset; RST_BUS_UART0 + 1] = {
    let mut t = [CcuReset::EMPTY; RST_BUS_UART0 + 1];
    t[RST_USB_PHY0] = CcuReset::new(0x0cc, bit(0));
    t[RST_USB_PHY1] = CcuReset::new(0x0cc, bit(1));
    t[RST_USB_PHY2] = CcuReset::new(0x0cc, bit(2));
    t[RST_BUS_MMC0] = CcuReset::new(0x2c0, bit(8));
    t[RST_BUS_MMC1] = CcuReset::new(0x2c0, bit(9));
    t[RST_BUS_MMC2] = CcuReset::new(0x2c0, bit(10));
    t[RST_BUS_MMC3] = CcuReset::new(0x2c0, bit(11));
    t[RST_BUS_SPI0] = CcuReset::new(0x2c0, bit(20));
    t[RST_BUS_SPI1] = CcuReset::new(0x2c0, bit(21));
    t[RST_BUS_SPI2] = CcuReset::new(0x2c0, bit(22));
    t[RST_BUS_SPI3] = CcuReset::new(0x2c0, bit(23));
    t[RST_BUS_OTG] = CcuReset::new(0x2c0, bit(25));
    t[RST_BUS_EHCI0] = CcuReset::new(0x2c0, bit(26));
    t[RST_BUS_EHCI1] = CcuReset::new(0x2c0, bit(27));
    t[RST_BUS_EHCI2] = CcuReset::new(0x2c0, bit(28));
    t[RST_BUS_OHCI0] = CcuReset::new(0x2c0, bit(29));
    t[RST_BUS_OHCI1] = CcuReset::new(0x2c0, bit(30));
    t[RST_BUS_OHCI2] = CcuReset::new(0x2c0, bit(31));
    t[RST_BUS_UART0] = CcuReset::new(0x2d8, bit(16));
    t
};

static DESC: TreeCcuDesc = TreeCcuDesc {
    tree: Some(&TREE),
    gates: &GATES,
    resets: &RESETS,
};

pub static CCU: CcuData = CcuData {
    desc: CcuDesc::Tree(&DESC),
    num_resets: NUM_RESETS,
};

pub const COMPATIBLES: [&str; 1] = ["allwinner,sun8i-r40-ccu"];
