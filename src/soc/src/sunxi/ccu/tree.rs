//! Clock tree rate resolution
//!
//! Rates are never cached: each query walks from the requested node up to a
//! fixed oscillator, reading the control register of every NK and MP node on
//! the way.

use super::{CcuClkTree, CcuClkType, CcuFlags, CcuMp, CcuNk};
use device::ClkId;
use log::{debug, warn};
use oreboot_asm::io::RegisterSpace;

/// Walks are bounded so that a cyclic table cannot hang the caller.
const MAX_DEPTH: usize = 16;

/// Compute the current rate of clock `id` in Hz
///
/// Returns 0 for IDs outside the tree, for unset or not yet validated nodes
/// and for mux selections without a parent.
pub fn resolve_rate<R: RegisterSpace + ?Sized>(tree: &[CcuClkTree], regs: &R, id: ClkId) -> u64 {
    rate_at(tree, regs, id, MAX_DEPTH)
}

fn rate_at<R: RegisterSpace + ?Sized>(
    tree: &[CcuClkTree],
    regs: &R,
    id: ClkId,
    depth: usize,
) -> u64 {
    let Some(node) = tree.get(id) else {
        debug!("ccu: clk {} is outside the tree", id);
        return 0;
    };
    if depth == 0 {
        warn!("ccu: clk {}: tree too deep", id);
        return 0;
    }
    if !node.flags.contains(CcuFlags::INIT_DONE) {
        debug!("ccu: clk {} is not initialized", id);
        return 0;
    }

    match node.kind {
        CcuClkType::Unset => {
            debug!("ccu: clk {} is unset", id);
            0
        }
        CcuClkType::Misc { parent } => rate_at(tree, regs, parent, depth - 1),
        CcuClkType::Fixed { rate } => rate,
        CcuClkType::Nk(ref nk) => nk_rate(tree, regs, nk, node.flags, depth),
        CcuClkType::Mp(ref mp) => mp_rate(tree, regs, id, mp, depth),
    }
}

fn nk_rate<R: RegisterSpace + ?Sized>(
    tree: &[CcuClkTree],
    regs: &R,
    nk: &CcuNk,
    flags: CcuFlags,
    depth: usize,
) -> u64 {
    let parent = rate_at(tree, regs, nk.parent, depth - 1);
    let reg = regs.read32(nk.off as usize);
    let n = nk.n.value(reg) as u64;
    let k = nk.k.value(reg) as u64;

    let rate = parent.saturating_mul(n).saturating_mul(k);
    if flags.contains(CcuFlags::POSTDIV) {
        rate / nk.postdiv.max(1) as u64
    } else {
        rate
    }
}

fn mp_rate<R: RegisterSpace + ?Sized>(
    tree: &[CcuClkTree],
    regs: &R,
    id: ClkId,
    mp: &CcuMp,
    depth: usize,
) -> u64 {
    let reg = regs.read32(mp.off as usize);
    let idx = mp.mux.raw(reg) as usize;
    let Some(&parent) = mp.parents.get(idx) else {
        warn!("ccu: clk {}: no parent at mux index {}", id, idx);
        return 0;
    };

    let parent = rate_at(tree, regs, parent, depth - 1);
    let p = mp.p.raw(reg);
    let m = mp.m.value(reg) as u64;

    parent.checked_shr(p).unwrap_or(0) / m
}

#[cfg(test)]
mod tests {
    use super::super::{CcuBitField, CcuDivField, CcuFlags, OSC24M_HZ};
    use super::*;
    use core::cell::{Cell, RefCell};

    struct Regs {
        values: RefCell<[u32; 64]>,
        reads: Cell<usize>,
    }

    impl Regs {
        fn new() -> Self {
            Self {
                values: RefCell::new([0; 64]),
                reads: Cell::new(0),
            }
        }

        fn set(&self, off: usize, v: u32) {
            self.values.borrow_mut()[off / 4] = v;
        }
    }

    impl RegisterSpace for Regs {
        fn read32(&self, offset: usize) -> u32 {
            self.reads.set(self.reads.get() + 1);
            self.values.borrow()[offset / 4]
        }

        fn write32(&self, offset: usize, value: u32) {
            self.values.borrow_mut()[offset / 4] = value;
        }
    }

    const OSC: ClkId = 0;
    const PLL: ClkId = 1;
    const MOD: ClkId = 2;
    const RTC: ClkId = 3;
    const BUS: ClkId = 4;
    const GATE: ClkId = 5;
    const ALIAS: ClkId = 6;
    const RAW: ClkId = 7;
    const UNSET: ClkId = 8;

    static PARENTS: [ClkId; 3] = [OSC, RTC, PLL];

    static TREE: [CcuClkTree; 9] = {
        let mut t = [CcuClkTree::EMPTY; 9];
        t[OSC] = CcuClkTree::fixed(OSC24M_HZ);
        t[RTC] = CcuClkTree::fixed(32000);
        t[PLL] = CcuClkTree::nk(
            0x10,
            CcuBitField::new(8, 5).with_offset(1),
            CcuBitField::new(4, 2).with_offset(1),
            OSC,
        );
        t[MOD] = CcuClkTree::mp(
            0x20,
            CcuDivField::new(0, 4).with_offset(1),
            CcuDivField::new(16, 2),
            CcuBitField::new(24, 2),
            &PARENTS,
        );
        t[BUS] = CcuClkTree::misc(MOD);
        t[GATE] = CcuClkTree::misc(BUS);
        t[ALIAS] = CcuClkTree::misc(GATE);
        t[RAW] = CcuClkTree::misc(OSC).pending();
        t
    };

    #[test]
    fn nk_multiplies_parent() {
        let regs = Regs::new();
        // N raw 7, K raw 1
        regs.set(0x10, (7 << 8) | (1 << 4));
        assert_eq!(resolve_rate(&TREE, &regs, PLL), 384_000_000);
    }

    #[test]
    fn nk_postdiv_divides() {
        let tree = [
            CcuClkTree::fixed(OSC24M_HZ),
            CcuClkTree::nk_postdiv(
                0x10,
                CcuBitField::new(8, 5).with_offset(1),
                CcuBitField::new(4, 2).with_offset(1),
                2,
                0,
            ),
        ];
        let regs = Regs::new();
        regs.set(0x10, (24 << 8) | (1 << 4));
        assert_eq!(resolve_rate(&tree, &regs, 1), 600_000_000);
    }

    #[test]
    fn mp_selects_parent_and_divides() {
        let regs = Regs::new();
        regs.set(0x10, (7 << 8) | (1 << 4));
        // mux index 2 (PLL), P raw 1, M raw 0
        regs.set(0x20, (2 << 24) | (1 << 16));
        assert_eq!(resolve_rate(&TREE, &regs, MOD), 192_000_000);

        // M raw 2 divides by 3
        regs.set(0x20, (2 << 24) | (1 << 16) | 2);
        assert_eq!(resolve_rate(&TREE, &regs, MOD), 64_000_000);
    }

    #[test]
    fn mp_without_parent_at_index() {
        let regs = Regs::new();
        regs.set(0x20, 3 << 24);
        assert_eq!(resolve_rate(&TREE, &regs, MOD), 0);
    }

    #[test]
    fn fixed_does_not_read_registers() {
        let regs = Regs::new();
        assert_eq!(resolve_rate(&TREE, &regs, RTC), 32000);
        assert_eq!(regs.reads.get(), 0);
    }

    #[test]
    fn misc_chain_follows_parents() {
        let regs = Regs::new();
        regs.set(0x10, (7 << 8) | (1 << 4));
        regs.set(0x20, (2 << 24) | (1 << 16));
        assert_eq!(resolve_rate(&TREE, &regs, ALIAS), 192_000_000);
    }

    #[test]
    fn unresolvable_nodes_yield_zero() {
        let regs = Regs::new();
        assert_eq!(resolve_rate(&TREE, &regs, RAW), 0);
        assert_eq!(resolve_rate(&TREE, &regs, UNSET), 0);
        assert_eq!(resolve_rate(&TREE, &regs, 100), 0);
        assert_eq!(regs.reads.get(), 0);
    }

    #[test]
    fn nk_saturates_instead_of_wrapping() {
        let tree = [
            CcuClkTree::fixed(u64::MAX / 2),
            CcuClkTree::nk(0x10, CcuBitField::new(0, 32).with_offset(1), CcuBitField::EMPTY, 0),
        ];
        let regs = Regs::new();
        regs.set(0x10, u32::MAX);
        assert_eq!(resolve_rate(&tree, &regs, 1), u64::MAX);
    }

    #[test]
    fn cyclic_tree_terminates() {
        let tree = [CcuClkTree::misc(1), CcuClkTree::misc(0)];
        let regs = Regs::new();
        assert_eq!(resolve_rate(&tree, &regs, 0), 0);
    }

    #[test]
    fn flags_compose() {
        let f = CcuFlags::INIT_DONE | CcuFlags::POSTDIV;
        assert!(f.contains(CcuFlags::POSTDIV));
        assert!(!CcuFlags::INIT_DONE.contains(f));
        assert_eq!(TREE[RAW].flags(), CcuFlags::NONE);
    }
}
