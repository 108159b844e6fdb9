pub mod spi_generic;
pub mod sun6i_spi;

pub use spi_generic::{Error, SpiMode, SpiOps, SpiSlave, SpiXferFlags};
