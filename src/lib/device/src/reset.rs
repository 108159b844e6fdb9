use crate::ErrorType;

/// Reset line ID as defined by the device tree bindings of a chip
pub type ResetId = usize;

/// Operations of a reset controller, used by peripheral drivers
pub trait ResetController: ErrorType {
    /// Check that the line exists before using it
    fn request(&self, id: ResetId) -> Result<(), Self::Error>;
    /// Give the line back
    fn free(&self, id: ResetId) -> Result<(), Self::Error>;
    /// Hold the block behind the line in reset
    fn rst_assert(&self, id: ResetId) -> Result<(), Self::Error>;
    /// Release the block behind the line from reset
    fn rst_deassert(&self, id: ResetId) -> Result<(), Self::Error>;
}

impl<T: ResetController> ResetController for &T {
    fn request(&self, id: ResetId) -> Result<(), Self::Error> {
        (**self).request(id)
    }

    fn free(&self, id: ResetId) -> Result<(), Self::Error> {
        (**self).free(id)
    }

    fn rst_assert(&self, id: ResetId) -> Result<(), Self::Error> {
        (**self).rst_assert(id)
    }

    fn rst_deassert(&self, id: ResetId) -> Result<(), Self::Error> {
        (**self).rst_deassert(id)
    }
}
