//! Allwinner clock control unit (CCU) descriptors
//!
//! Every chip of the family is described by static tables; the generic
//! engines in [`tree`] and [`gate`] interpret them against the live register
//! state. Two table shapes exist: the legacy flat `(offset, bit)` maps of
//! [`LegacyCcuDesc`], optionally carrying a custom rate setter per clock, and
//! the typed [`TreeCcuDesc`] with explicit populated flags and an optional
//! clock tree.
#![allow(non_upper_case_globals)]

use core::ops::BitOr;
use device::{ClkId, ErrorKind};
use oreboot_asm::io::RegisterSpace;

pub mod gate;
pub mod mmc;
pub mod tree;

pub mod a10;
pub mod a10s;
pub mod a23;
pub mod a31;
pub mod a64;
pub mod a83t;
pub mod h3;
pub mod h6;
pub mod r40;
pub mod v3s;

pub const KHz: u64 = 1000;
pub const MHz: u64 = 1000 * KHz;

/// Rate of the main crystal oscillator
pub const OSC24M_HZ: u64 = 24 * MHz;
/// Rate of the low speed oscillator
pub const OSC32K_HZ: u64 = 32768;

/// Flags attached to clock tree nodes and typed gate/reset entries
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuFlags(u32);

impl CcuFlags {
    pub const NONE: Self = Self(0);
    /// The entry is fully specified and safe to use
    pub const INIT_DONE: Self = Self(1 << 0);
    /// Divide the output of an NK node by its post-divider
    pub const POSTDIV: Self = Self(1 << 1);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for CcuFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

const fn field_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Location of a multiplier or multiplexer field inside a register
///
/// `min` and `max` bound the extracted value; 0 leaves that side unbounded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuBitField {
    shift: u32,
    width: u32,
    offset: u32,
    min: u32,
    max: u32,
}

impl CcuBitField {
    /// A field that is not present in the register; its value is always 1
    pub const EMPTY: Self = Self::new(0, 0);

    pub const fn new(shift: u32, width: u32) -> Self {
        assert!(shift < 32 && width <= 32 - shift);
        Self {
            shift,
            width,
            offset: 0,
            min: 0,
            max: 0,
        }
    }

    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub const fn with_min(mut self, min: u32) -> Self {
        self.min = min;
        self
    }

    pub const fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    pub const fn shift(&self) -> u32 {
        self.shift
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Raw field contents, without offset or bounds
    pub const fn raw(&self, reg: u32) -> u32 {
        if self.width == 0 {
            return 0;
        }
        (reg >> self.shift) & field_mask(self.width)
    }

    /// Factor encoded by the field: raw + offset (saturating), where 0
    /// stands for 1, then clamped to the configured bounds
    pub const fn value(&self, reg: u32) -> u32 {
        let mut v = self.raw(reg).saturating_add(self.offset);
        if v == 0 {
            v = 1;
        }
        if self.min != 0 && v < self.min {
            v = self.min;
        }
        if self.max != 0 && v > self.max {
            v = self.max;
        }
        v
    }

    /// Mask of the field in its register
    pub const fn mask(&self) -> u32 {
        if self.width == 0 {
            return 0;
        }
        field_mask(self.width) << self.shift
    }
}

/// Location of an M or P divider field inside a register
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuDivField {
    shift: u32,
    width: u32,
    offset: u32,
    max: u32,
}

impl CcuDivField {
    /// A divider that is not present in the register; divides by 1
    pub const EMPTY: Self = Self::new(0, 0);

    pub const fn new(shift: u32, width: u32) -> Self {
        assert!(shift < 32 && width <= 32 - shift);
        Self {
            shift,
            width,
            offset: 0,
            max: 0,
        }
    }

    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub const fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    pub const fn raw(&self, reg: u32) -> u32 {
        if self.width == 0 {
            return 0;
        }
        (reg >> self.shift) & field_mask(self.width)
    }

    pub const fn value(&self, reg: u32) -> u32 {
        let mut v = self.raw(reg).saturating_add(self.offset);
        if v == 0 {
            v = 1;
        }
        if self.max != 0 && v > self.max {
            v = self.max;
        }
        v
    }
}

/// `parent * N * K`, optionally divided by a post-divider
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuNk {
    pub(crate) off: u16,
    pub(crate) n: CcuBitField,
    pub(crate) k: CcuBitField,
    pub(crate) postdiv: u32,
    pub(crate) parent: ClkId,
}

/// `(parents[mux] >> P) / M`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuMp {
    pub(crate) off: u16,
    pub(crate) m: CcuDivField,
    pub(crate) p: CcuDivField,
    pub(crate) mux: CcuBitField,
    pub(crate) parents: &'static [ClkId],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CcuClkType {
    /// No node at this ID
    Unset,
    /// Alias of another clock, typically a bus gate re-rooted on its bus
    Misc { parent: ClkId },
    /// Oscillator with a known rate
    Fixed { rate: u64 },
    Nk(CcuNk),
    Mp(CcuMp),
}

/// One node of a clock tree, indexed by its clock ID
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuClkTree {
    pub(crate) kind: CcuClkType,
    pub(crate) flags: CcuFlags,
}

impl CcuClkTree {
    pub const EMPTY: Self = Self {
        kind: CcuClkType::Unset,
        flags: CcuFlags::NONE,
    };

    const fn done(kind: CcuClkType) -> Self {
        Self {
            kind,
            flags: CcuFlags::INIT_DONE,
        }
    }

    pub const fn misc(parent: ClkId) -> Self {
        Self::done(CcuClkType::Misc { parent })
    }

    pub const fn fixed(rate: u64) -> Self {
        Self::done(CcuClkType::Fixed { rate })
    }

    pub const fn nk(off: u16, n: CcuBitField, k: CcuBitField, parent: ClkId) -> Self {
        Self::done(CcuClkType::Nk(CcuNk {
            off,
            n,
            k,
            postdiv: 1,
            parent,
        }))
    }

    /// NK node whose output goes through a fixed post-divider
    pub const fn nk_postdiv(
        off: u16,
        n: CcuBitField,
        k: CcuBitField,
        postdiv: u32,
        parent: ClkId,
    ) -> Self {
        Self {
            kind: CcuClkType::Nk(CcuNk {
                off,
                n,
                k,
                postdiv,
                parent,
            }),
            flags: CcuFlags::INIT_DONE.union(CcuFlags::POSTDIV),
        }
    }

    pub const fn mp(
        off: u16,
        m: CcuDivField,
        p: CcuDivField,
        mux: CcuBitField,
        parents: &'static [ClkId],
    ) -> Self {
        Self::done(CcuClkType::Mp(CcuMp {
            off,
            m,
            p,
            mux,
            parents,
        }))
    }

    /// Same node, declared but not yet validated for this chip
    pub const fn pending(self) -> Self {
        Self {
            kind: self.kind,
            flags: self.flags.difference(CcuFlags::INIT_DONE),
        }
    }

    pub const fn kind(&self) -> CcuClkType {
        self.kind
    }

    pub const fn flags(&self) -> CcuFlags {
        self.flags
    }
}

/// Typed clock gate entry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuGate {
    off: u16,
    bit: u32,
    flags: CcuFlags,
}

impl CcuGate {
    pub const EMPTY: Self = Self {
        off: 0,
        bit: 0,
        flags: CcuFlags::NONE,
    };

    pub const fn new(off: u16, bit: u32) -> Self {
        Self {
            off,
            bit,
            flags: CcuFlags::INIT_DONE,
        }
    }
}

/// Typed reset line entry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuReset {
    off: u16,
    bit: u32,
    flags: CcuFlags,
}

impl CcuReset {
    pub const EMPTY: Self = Self {
        off: 0,
        bit: 0,
        flags: CcuFlags::NONE,
    };

    pub const fn new(off: u16, bit: u32) -> Self {
        Self {
            off,
            bit,
            flags: CcuFlags::INIT_DONE,
        }
    }
}

/// Custom rate setter attached to a legacy clock map entry
pub trait ClkSetRate: Sync {
    /// Program the clock whose control register is at `off` to `rate`,
    /// returning the rate actually achieved
    fn set_rate(
        &self,
        regs: &dyn RegisterSpace,
        off: u16,
        bit: u32,
        rate: u64,
    ) -> Result<u64, ErrorKind>;
}

/// Legacy clock map entry; a value-default entry marks an unwired clock
#[derive(Clone, Copy)]
pub struct CcuClkMap {
    off: u16,
    bit: u32,
    set_rate: Option<&'static dyn ClkSetRate>,
}

impl CcuClkMap {
    pub const EMPTY: Self = Self {
        off: 0,
        bit: 0,
        set_rate: None,
    };

    pub const fn new(off: u16, bit: u32) -> Self {
        Self {
            off,
            bit,
            set_rate: None,
        }
    }

    pub const fn with_set_rate(mut self, set_rate: &'static dyn ClkSetRate) -> Self {
        self.set_rate = Some(set_rate);
        self
    }

    pub fn set_rate(&self) -> Option<&'static dyn ClkSetRate> {
        self.set_rate
    }

    /// Register offset and bit mask of the gate
    pub fn location(&self) -> (u16, u32) {
        (self.off, self.bit)
    }
}

impl core::fmt::Debug for CcuClkMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CcuClkMap")
            .field("off", &self.off)
            .field("bit", &self.bit)
            .field("set_rate", &self.set_rate.is_some())
            .finish()
    }
}

/// Legacy reset map entry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CcuResetMap {
    off: u16,
    bit: u32,
}

impl CcuResetMap {
    pub const EMPTY: Self = Self { off: 0, bit: 0 };

    pub const fn new(off: u16, bit: u32) -> Self {
        Self { off, bit }
    }
}

/// Chip descriptor in the legacy flat-map shape
#[derive(Debug)]
pub struct LegacyCcuDesc {
    pub clks: &'static [CcuClkMap],
    pub resets: &'static [CcuResetMap],
}

/// Chip descriptor in the typed shape
#[derive(Debug)]
pub struct TreeCcuDesc {
    pub tree: Option<&'static [CcuClkTree]>,
    pub gates: &'static [CcuGate],
    pub resets: &'static [CcuReset],
}

#[derive(Clone, Copy, Debug)]
pub enum CcuDesc {
    Legacy(&'static LegacyCcuDesc),
    Tree(&'static TreeCcuDesc),
}

/// Driver data attached to each CCU compatible string
#[derive(Debug)]
pub struct CcuData {
    pub desc: CcuDesc,
    /// Number of reset lines declared by the chip's bindings
    pub num_resets: usize,
}
