use crate::ErrorType;

/// Clock ID as defined by the device tree bindings of a chip
///
/// IDs are small integers indexing the tables of the clock controller that
/// handed them out; they carry no meaning across controllers.
pub type ClkId = usize;

/// Operations of a clock controller, used by peripheral drivers
pub trait ClockController: ErrorType {
    /// Ungate the clock. Enabling an enabled clock is a no-op.
    fn enable(&self, id: ClkId) -> Result<(), Self::Error>;
    /// Gate the clock. Disabling a disabled clock is a no-op.
    fn disable(&self, id: ClkId) -> Result<(), Self::Error>;
    /// Current rate in Hz, or 0 when it cannot be determined
    fn get_rate(&self, id: ClkId) -> u64;
    /// Request a new rate, returning the rate actually programmed
    /// (0 if the clock has no way to change its rate)
    fn set_rate(&self, id: ClkId, rate: u64) -> Result<u64, Self::Error>;
}

impl<T: ClockController> ClockController for &T {
    fn enable(&self, id: ClkId) -> Result<(), Self::Error> {
        (**self).enable(id)
    }

    fn disable(&self, id: ClkId) -> Result<(), Self::Error> {
        (**self).disable(id)
    }

    fn get_rate(&self, id: ClkId) -> u64 {
        (**self).get_rate(id)
    }

    fn set_rate(&self, id: ClkId, rate: u64) -> Result<u64, Self::Error> {
        (**self).set_rate(id, rate)
    }
}
