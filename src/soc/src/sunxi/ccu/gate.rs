//! Gate and reset line toggling, shared by both table shapes

use super::{CcuClkMap, CcuFlags, CcuGate, CcuReset, CcuResetMap};
use log::debug;
use oreboot_asm::io::RegisterSpace;

/// A table entry naming a single bit in a CCU register
pub trait CcuLine {
    /// Register offset and bit mask, or `None` if the entry is not wired up
    fn line(&self) -> Option<(u16, u32)>;
}

// Legacy entries have no populated flag; a zero mask marks a missing line.
impl CcuLine for CcuClkMap {
    fn line(&self) -> Option<(u16, u32)> {
        (self.bit != 0).then_some((self.off, self.bit))
    }
}

impl CcuLine for CcuResetMap {
    fn line(&self) -> Option<(u16, u32)> {
        (self.bit != 0).then_some((self.off, self.bit))
    }
}

impl CcuLine for CcuGate {
    fn line(&self) -> Option<(u16, u32)> {
        self.flags
            .contains(CcuFlags::INIT_DONE)
            .then_some((self.off, self.bit))
    }
}

impl CcuLine for CcuReset {
    fn line(&self) -> Option<(u16, u32)> {
        self.flags
            .contains(CcuFlags::INIT_DONE)
            .then_some((self.off, self.bit))
    }
}

fn find_line<L: CcuLine>(lines: &[L], id: usize) -> Option<(u16, u32)> {
    lines.get(id).and_then(CcuLine::line)
}

/// Set (`on`) or clear the gate bit of clock `id`
///
/// Unhandled clocks are logged and otherwise ignored.
pub fn set_gate<R, L>(regs: &R, lines: &[L], id: usize, on: bool)
where
    R: RegisterSpace + ?Sized,
    L: CcuLine,
{
    let Some((off, bit)) = find_line(lines, id) else {
        debug!("gate: clk {} unhandled", id);
        return;
    };

    debug!(
        "gate: clk {}, off#0x{:x}, BIT({}), {}",
        id,
        off,
        bit.trailing_zeros(),
        if on { "on" } else { "off" }
    );
    if on {
        regs.setbits32(off as usize, bit);
    } else {
        regs.clrbits32(off as usize, bit);
    }
}

/// Release (`deassert`) or hold reset line `id`
///
/// The hardware holds a block in reset while its bit is clear.
pub fn set_reset<R, L>(regs: &R, lines: &[L], id: usize, deassert: bool)
where
    R: RegisterSpace + ?Sized,
    L: CcuLine,
{
    let Some((off, bit)) = find_line(lines, id) else {
        debug!("reset: line {} unhandled", id);
        return;
    };

    debug!(
        "reset: {} line {}, off#0x{:x}, BIT({})",
        if deassert { "deassert" } else { "assert" },
        id,
        off,
        bit.trailing_zeros()
    );
    if deassert {
        regs.setbits32(off as usize, bit);
    } else {
        regs.clrbits32(off as usize, bit);
    }
}

#[cfg(test)]
mod tests {
    use crate::sunxi::bit;
    use super::*;
    use core::cell::RefCell;

    #[derive(Default)]
    struct Regs {
        values: RefCell<[u32; 8]>,
        writes: RefCell<Vec<(usize, u32)>>,
    }

    impl RegisterSpace for Regs {
        fn read32(&self, offset: usize) -> u32 {
            self.values.borrow()[offset / 4]
        }

        fn write32(&self, offset: usize, value: u32) {
            self.writes.borrow_mut().push((offset, value));
            self.values.borrow_mut()[offset / 4] = value;
        }
    }

    static CLKS: [CcuClkMap; 4] = {
        let mut t = [CcuClkMap::EMPTY; 4];
        t[0] = CcuClkMap::new(0x08, bit(5));
        t[1] = CcuClkMap::new(0x00, bit(0));
        t
    };

    static GATES: [CcuGate; 3] = {
        let mut t = [CcuGate::EMPTY; 3];
        t[2] = CcuGate::new(0x04, bit(31));
        t
    };

    #[test]
    fn enable_then_disable_restores_register() {
        let regs = Regs::default();
        regs.values.borrow_mut()[2] = 0x0000_0101;

        set_gate(&regs, &CLKS, 0, true);
        assert_eq!(regs.read32(0x08), 0x0000_0121);
        set_gate(&regs, &CLKS, 0, true);
        assert_eq!(regs.read32(0x08), 0x0000_0121);
        set_gate(&regs, &CLKS, 0, false);
        assert_eq!(regs.read32(0x08), 0x0000_0101);
    }

    #[test]
    fn offset_zero_with_bit_is_handled() {
        let regs = Regs::default();
        set_gate(&regs, &CLKS, 1, true);
        assert_eq!(*regs.writes.borrow(), [(0x00, 1)]);
    }

    #[test]
    fn unhandled_entries_do_not_touch_registers() {
        let regs = Regs::default();
        set_gate(&regs, &CLKS, 2, true);
        set_gate(&regs, &CLKS, 10, false);
        set_gate(&regs, &GATES, 0, true);
        set_reset(&regs, &[CcuResetMap::EMPTY], 0, true);
        assert!(regs.writes.borrow().is_empty());
    }

    #[test]
    fn typed_gate_uses_init_flag() {
        let regs = Regs::default();
        set_gate(&regs, &GATES, 2, true);
        assert_eq!(*regs.writes.borrow(), [(0x04, 0x8000_0000)]);
    }

    #[test]
    fn assert_clears_and_deassert_sets() {
        let regs = Regs::default();
        let resets = [CcuReset::new(0x1c, bit(3))];
        regs.values.borrow_mut()[7] = 0xff;

        set_reset(&regs, &resets, 0, false);
        assert_eq!(regs.read32(0x1c), 0xf7);
        set_reset(&regs, &resets, 0, true);
        assert_eq!(regs.read32(0x1c), 0xff);
    }
}
