//! MMC module clock rate setter
//!
//! Ported from u-boot: drivers/mmc/sunxi_mmc.c (mmc_set_mod_clk). The module
//! clock is fed either by the 24 MHz oscillator or by PLL_PERIPH0, whose rate
//! is read back from the PLL control register of the same CCU.

use super::{CcuBitField, CcuDivField, ClkSetRate, KHz, MHz, OSC24M_HZ};
use bitfield::bitfield;
use device::ErrorKind;
use log::{debug, error};
use oreboot_asm::io::RegisterSpace;

bitfield! {
    /// MMC module clock control register
    ///
    /// The N pre-divider moves between generations, see [`MmcClk::n`].
    #[derive(Clone, Copy, Default, Eq, PartialEq)]
    pub struct MmcClkReg(u32);
    impl Debug;
    pub m, set_m: 3, 0;
    pub oclk_dly, set_oclk_dly: 10, 8;
    pub sclk_dly, set_sclk_dly: 22, 20;
    pub src, set_src: 25, 24;
    pub enable, set_enable: 31;
}

pub const MMC_SRC_OSC24M: u32 = 0;
pub const MMC_SRC_PLL_PERIPH0: u32 = 1;

/// N pre-divider up to the H6, bits 17:16
pub const MMC_N_SUN6I: CcuBitField = CcuBitField::new(16, 2);
/// N pre-divider on the H6, bits 9:8 (no phase delay fields there)
pub const MMC_N_SUN50I_H6: CcuBitField = CcuBitField::new(8, 2);

const MAX_M: u64 = 16;
const MAX_N: u32 = 3;

/// Register layout of PLL_PERIPH0 on one chip generation
///
/// `rate = 24 MHz * N * K / div1 / div2 / postdiv * mult`
#[derive(Clone, Copy, Debug)]
pub struct PllPeriph {
    off: u16,
    n: CcuBitField,
    k: CcuBitField,
    div1: CcuDivField,
    div2: CcuDivField,
    postdiv: u64,
    mult: u64,
}

impl PllPeriph {
    /// sun6i and later: A31, A23, H3, V3s
    pub const SUN6I: Self = Self {
        off: 0x028,
        n: CcuBitField::new(8, 5).with_offset(1),
        k: CcuBitField::new(4, 2).with_offset(1),
        div1: CcuDivField::EMPTY,
        div2: CcuDivField::EMPTY,
        postdiv: 2,
        mult: 1,
    };

    pub const SUN8I_A83T: Self = Self {
        off: 0x028,
        n: CcuBitField::new(8, 8),
        k: CcuBitField::EMPTY,
        div1: CcuDivField::new(16, 1).with_offset(1),
        div2: CcuDivField::new(18, 1).with_offset(1),
        postdiv: 1,
        mult: 1,
    };

    /// H6: MMC is fed from the 2x output
    pub const SUN50I_H6: Self = Self {
        off: 0x020,
        n: CcuBitField::new(8, 8).with_offset(1),
        k: CcuBitField::EMPTY,
        div1: CcuDivField::new(0, 1).with_offset(1),
        div2: CcuDivField::new(1, 1).with_offset(1),
        postdiv: 4,
        mult: 2,
    };

    pub fn rate(&self, regs: &dyn RegisterSpace) -> u64 {
        let reg = regs.read32(self.off as usize);
        let n = self.n.value(reg) as u64;
        let k = self.k.value(reg) as u64;
        let div1 = self.div1.value(reg) as u64;
        let div2 = self.div2.value(reg) as u64;

        OSC24M_HZ.saturating_mul(n * k) / div1 / div2 / self.postdiv * self.mult
    }
}

/// MMC module clock setter for one chip generation
#[derive(Debug)]
pub struct MmcClk {
    pll: PllPeriph,
    /// Location of the N pre-divider in the module clock register
    n: CcuBitField,
    /// Controllers run in the new timing mode, phase delays are unused
    new_timing: bool,
}

impl MmcClk {
    pub const fn new(pll: PllPeriph, n: CcuBitField, new_timing: bool) -> Self {
        Self { pll, n, new_timing }
    }

    /// N pre-divider exponent programmed in `reg`
    pub fn n(&self, reg: MmcClkReg) -> u32 {
        self.n.raw(reg.0)
    }

    /// Compute the register value for `hz` given the current PLL rate
    ///
    /// Returns the value and the rate it produces.
    pub fn encode(&self, pll_periph: u64, hz: u64) -> Result<(MmcClkReg, u64), ErrorKind> {
        if hz == 0 {
            error!("mmc: cannot run at 0 Hz");
            return Err(ErrorKind::InvalidArgument);
        }

        let (src, pll_hz) = if hz <= OSC24M_HZ {
            (MMC_SRC_OSC24M, OSC24M_HZ)
        } else {
            (MMC_SRC_PLL_PERIPH0, pll_periph)
        };

        let mut div = (pll_hz + hz - 1) / hz;
        let mut n = 0;
        while div > MAX_M {
            n += 1;
            div = (div + 1) / 2;
        }
        if n > MAX_N {
            error!("mmc: cannot reach {} Hz from {} Hz", hz, pll_hz);
            return Err(ErrorKind::InvalidArgument);
        }
        // pll_hz may be 0 when the PLL is unconfigured
        let div = div.max(1);

        let (oclk_dly, sclk_dly) = if hz <= 400 * KHz {
            (0, 0)
        } else if hz <= 25 * MHz {
            (0, 5)
        } else if hz <= 52 * MHz {
            (3, 4)
        } else {
            (1, 4)
        };

        let mut reg = MmcClkReg(0);
        reg.set_enable(true);
        reg.set_src(src);
        reg.0 = (reg.0 & !self.n.mask()) | (n << self.n.shift());
        reg.set_m(div as u32 - 1);
        if !self.new_timing {
            reg.set_oclk_dly(oclk_dly);
            reg.set_sclk_dly(sclk_dly);
        }

        Ok((reg, (pll_hz >> n) / div))
    }
}

impl ClkSetRate for MmcClk {
    fn set_rate(
        &self,
        regs: &dyn RegisterSpace,
        off: u16,
        _bit: u32,
        rate: u64,
    ) -> Result<u64, ErrorKind> {
        let pll_periph = if rate > OSC24M_HZ {
            self.pll.rate(regs)
        } else {
            OSC24M_HZ
        };
        let (reg, actual) = self.encode(pll_periph, rate)?;

        debug!(
            "mmc: off#0x{:x} set {} Hz, got {} Hz ({:?})",
            off, rate, actual, reg
        );
        regs.write32(off as usize, reg.0);

        Ok(actual)
    }
}

pub static SUN6I_MMC_CLK: MmcClk = MmcClk::new(PllPeriph::SUN6I, MMC_N_SUN6I, false);
pub static SUN8I_A83T_MMC_CLK: MmcClk =
    MmcClk::new(PllPeriph::SUN8I_A83T, MMC_N_SUN6I, false);
pub static SUN50I_H6_MMC_CLK: MmcClk =
    MmcClk::new(PllPeriph::SUN50I_H6, MMC_N_SUN50I_H6, true);
