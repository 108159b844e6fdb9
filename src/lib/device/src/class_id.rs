/// Identifies the class a driver belongs to
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassId {
	/* These are used internally by driver model */
	Root = 0,

	/* Driver classes start here - in alphabetical order */
	Clk,		/* Clock source, e.g. used by peripherals */
	Reset,		/* Reset controller device */
	Spi,		/* SPI bus */
}
