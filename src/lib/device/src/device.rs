use crate::{ClassId, ErrorKind, ErrorType};
use log::debug;

/// An instance of a driver
///
/// This holds information about a device, which is a driver bound to a
/// particular port or peripheral (essentially a driver instance).
///
/// A device comes into existence either from board code or from a node in
/// the device tree, in which case `compatible` is the first compatible
/// string of the node and `base` its first register window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Device {
    /// Name of device, typically the FDT node name
    name: &'static str,
    /// Compatible string used to match the device with its driver
    compatible: &'static str,
    /// Start of the register window, if the device has one
    base: Option<usize>,
}

impl Device {
    pub const fn new(name: &'static str, compatible: &'static str) -> Self {
        Self {
            name,
            compatible,
            base: None,
        }
    }

    pub const fn with_base(mut self, base: usize) -> Self {
        self.base = Some(base);
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn compatible(&self) -> &str {
        self.compatible
    }

    pub fn base(&self) -> Option<usize> {
        self.base
    }
}

/// Lists the compatible strings supported by a driver
#[derive(Debug)]
pub struct DeviceId<T: 'static> {
    /// Compatible string
    compatible: &'static str,
    /// Data for this compatible string
    data: Option<&'static T>,
}

impl<T> DeviceId<T> {
    pub const fn new(compatible: &'static str, data: &'static T) -> Self {
        Self {
            compatible,
            data: Some(data),
        }
    }

    /// An entry that matches but carries no driver data
    pub const fn without_data(compatible: &'static str) -> Self {
        Self {
            compatible,
            data: None,
        }
    }

    pub fn compatible(&self) -> &str {
        self.compatible
    }

    pub fn data(&self) -> Option<&'static T> {
        self.data
    }
}

/// A driver for a feature or peripheral
///
/// The device needs information to set itself up - this is provided by a
/// device tree node (which we find by looking up matching compatible
/// strings with `of_match`).
#[derive(Debug)]
pub struct Driver<T: 'static> {
    /// Device name
    name: &'static str,
    /// Identifies the class we belong to
    id: ClassId,
    /// List of compatible strings to match, and any identifying data
    /// for each.
    of_match: &'static [DeviceId<T>],
}

impl<T> Driver<T> {
    pub const fn new(name: &'static str, id: ClassId, of_match: &'static [DeviceId<T>]) -> Self {
        Self { name, id, of_match }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn of_match(&self) -> &'static [DeviceId<T>] {
        self.of_match
    }

    /// All compatible strings this driver binds to
    pub fn compatibles(&self) -> impl Iterator<Item = &'static str> {
        self.of_match.iter().map(|id| id.compatible)
    }

    /// Find the entry of `of_match` matching the compatible string of `dev`
    pub fn of_match_device(&self, dev: &Device) -> Option<&'static DeviceId<T>> {
        self.of_match
            .iter()
            .find(|id| id.compatible == dev.compatible())
    }

    /// Match `dev` against this driver and probe it
    pub fn probe<D>(&self, dev: &Device) -> Result<D, ErrorKind>
    where
        D: DriverOps<Data = T> + ErrorType<Error = ErrorKind>,
    {
        let id = self.of_match_device(dev).ok_or(ErrorKind::NotFound)?;
        debug!("{}: probing {} ({})", self.name, dev.name(), id.compatible);
        D::probe(dev, id)
    }
}

pub trait DriverOps: ErrorType + Sized {
    /// Driver data attached to the matching compatible string
    type Data: 'static;

    /// Called to probe a device, i.e. activate it
    fn probe(dev: &Device, id: &'static DeviceId<Self::Data>) -> Result<Self, Self::Error>;
}
