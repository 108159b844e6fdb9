#![cfg_attr(not(test), no_std)]

#[cfg(feature = "sunxi")]
pub mod sunxi;
