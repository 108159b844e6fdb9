//! Allwinner (sunxi) SoC support: clock control unit and reset lines

pub mod ccu;
pub mod clk;
pub mod reset;

pub use clk::{SunxiClk, SUNXI_CCU_IDS, SUNXI_CLK_DRIVER};
pub use reset::{SunxiReset, SUNXI_RESET_DRIVER};

pub const fn bit(nr: u32) -> u32 {
    1u32 << nr
}
