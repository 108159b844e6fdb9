//! sunxi reset controller
//!
//! Ported from u-boot: drivers/reset/reset-sunxi.c. The reset lines live in
//! the CCU register window and are bound alongside the clock controller.

use super::ccu::{gate::set_reset, CcuData, CcuDesc, CcuReset, CcuResetMap};
use super::clk::SUNXI_CCU_IDS;
use device::{
    ClassId, Device, DeviceId, Driver, DriverOps, ErrorKind, ErrorType, ResetController, ResetId,
};
use log::debug;
use oreboot_asm::io::{Mmio, RegisterSpace};

pub static SUNXI_RESET_DRIVER: Driver<CcuData> =
    Driver::new("sunxi_reset", ClassId::Reset, &SUNXI_CCU_IDS);

#[derive(Clone, Copy, Debug)]
enum ResetLines {
    Legacy(&'static [CcuResetMap]),
    Tree(&'static [CcuReset]),
}

pub struct SunxiReset<R> {
    regs: R,
    lines: ResetLines,
    /// Number of lines declared by the chip's bindings
    count: usize,
}

impl<R: RegisterSpace> SunxiReset<R> {
    /// Bind the reset lines of a CCU
    pub fn bind(regs: R, data: &'static CcuData) -> Self {
        let lines = match data.desc {
            CcuDesc::Legacy(desc) => ResetLines::Legacy(desc.resets),
            CcuDesc::Tree(desc) => ResetLines::Tree(desc.resets),
        };
        debug!("reset: binding {} lines", data.num_resets);

        Self {
            regs,
            lines,
            count: data.num_resets,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn set(&self, id: ResetId, deassert: bool) {
        match self.lines {
            ResetLines::Legacy(lines) => set_reset(&self.regs, lines, id, deassert),
            ResetLines::Tree(lines) => set_reset(&self.regs, lines, id, deassert),
        }
    }
}

impl<R> ErrorType for SunxiReset<R> {
    type Error = ErrorKind;
}

impl<R: RegisterSpace> ResetController for SunxiReset<R> {
    fn request(&self, id: ResetId) -> Result<(), ErrorKind> {
        debug!("reset: request {}", id);
        if id >= self.count {
            return Err(ErrorKind::InvalidArgument);
        }
        Ok(())
    }

    fn free(&self, id: ResetId) -> Result<(), ErrorKind> {
        debug!("reset: free {}", id);
        Ok(())
    }

    fn rst_assert(&self, id: ResetId) -> Result<(), ErrorKind> {
        self.set(id, false);
        Ok(())
    }

    fn rst_deassert(&self, id: ResetId) -> Result<(), ErrorKind> {
        self.set(id, true);
        Ok(())
    }
}

impl DriverOps for SunxiReset<Mmio> {
    type Data = CcuData;

    fn probe(dev: &Device, id: &'static DeviceId<CcuData>) -> Result<Self, ErrorKind> {
        let base = dev.base().ok_or(ErrorKind::NoMemory)?;
        let data = id.data().ok_or(ErrorKind::InvalidArgument)?;

        // Shares the window of the CCU node it is bound to.
        let regs = unsafe { Mmio::new(base) };
        Ok(Self::bind(regs, data))
    }
}
