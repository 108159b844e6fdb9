#![cfg_attr(not(test), no_std)]

mod class_id;
mod clk;
mod device;
mod error;
mod reset;

pub use self::{
    class_id::ClassId,
    clk::{ClkId, ClockController},
    device::{Device, DeviceId, Driver, DriverOps},
    error::{Error, ErrorKind, ErrorType},
    reset::{ResetController, ResetId},
};
