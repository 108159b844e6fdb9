use core::ptr::{read_volatile, write_volatile};

///! IO functions taken from u-boot headers: <arch/arm/include/asm/io.h>

fn _raw_readb(a: usize) -> u8 {
    unsafe { read_volatile::<u8>(a as *const u8) }
}

fn _raw_readl(a: usize) -> u32 {
    unsafe { read_volatile::<u32>(a as *const u32) }
}

fn _raw_writeb(v: u8, a: usize) {
    unsafe { write_volatile::<u8>(a as *mut u8, v) }
}

fn _raw_writel(v: u32, a: usize) {
    unsafe { write_volatile::<u32>(a as *mut u32, v) }
}

fn readl_relaxed(c: usize) -> u32 {
    u32::from_le(_raw_readl(c))
}

fn writel_relaxed(v: u32, c: usize) {
    _raw_writel(v.to_le(), c);
}

pub fn readb(c: usize) -> u8 {
    _raw_readb(c)
}

pub fn readl(c: usize) -> u32 {
    readl_relaxed(c)
}

pub fn writeb(v: u8, c: usize) {
    _raw_writeb(v, c);
}

pub fn writel(v: u32, c: usize) {
    writel_relaxed(v, c);
}

pub fn setbits_le32(c: usize, set: u32) {
    writel(readl(c) | set, c);
}

pub fn clrbits_le32(c: usize, clear: u32) {
    writel(readl(c) & !clear, c);
}

/// A window of 32-bit registers addressed by byte offset.
///
/// Offsets handed to implementors are naturally aligned by construction of
/// the tables that drive them; no alignment checks are performed.
pub trait RegisterSpace {
    fn read32(&self, offset: usize) -> u32;
    fn write32(&self, offset: usize, value: u32);

    /// Single read-modify-write OR of `set` into the register at `offset`.
    fn setbits32(&self, offset: usize, set: u32) {
        let reg = self.read32(offset);
        self.write32(offset, reg | set);
    }

    /// Single read-modify-write clearing `clear` from the register at `offset`.
    fn clrbits32(&self, offset: usize, clear: u32) {
        let reg = self.read32(offset);
        self.write32(offset, reg & !clear);
    }
}

impl<T: RegisterSpace + ?Sized> RegisterSpace for &T {
    fn read32(&self, offset: usize) -> u32 {
        (**self).read32(offset)
    }

    fn write32(&self, offset: usize, value: u32) {
        (**self).write32(offset, value)
    }
}

/// Memory-mapped register window starting at `base`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `base` must be the start of a device register window that stays mapped
    /// for the lifetime of the returned value, and nothing else may access it
    /// concurrently.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    pub fn base(&self) -> usize {
        self.base
    }
}

impl RegisterSpace for Mmio {
    fn read32(&self, offset: usize) -> u32 {
        readl(self.base + offset)
    }

    fn write32(&self, offset: usize, value: u32) {
        writel(value, self.base + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmio_read_modify_write_on_memory() {
        let mut mem = [0u32; 4];
        mem[2] = 0x0000_00f0;
        let regs = unsafe { Mmio::new(mem.as_mut_ptr() as usize) };

        regs.setbits32(8, 0x1);
        assert_eq!(regs.read32(8), 0xf1);

        regs.clrbits32(8, 0x10);
        assert_eq!(regs.read32(8), 0xe1);
        assert_eq!(regs.read32(0), 0);
    }

    #[test]
    fn byte_and_word_accessors() {
        let mut mem = [0u32; 2];
        let base = mem.as_mut_ptr() as usize;

        writel(0x1234_5678, base + 4);
        assert_eq!(readl(base + 4), 0x1234_5678);

        setbits_le32(base, 0x8000_0000);
        clrbits_le32(base + 4, 0x0000_0078);
        assert_eq!(readl(base), 0x8000_0000);
        assert_eq!(readl(base + 4), 0x1234_5600);

        writeb(0xa5, base);
        assert_eq!(readb(base), 0xa5);
    }
}
