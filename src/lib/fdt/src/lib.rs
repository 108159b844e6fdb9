#![cfg_attr(not(test), no_std)]

use device::Device;
use fdt::Fdt;
use log::debug;

/// Look up the first devicetree node compatible with any of `compatibles`
///
/// The returned [`Device`] carries the matching compatible string, so that it
/// can be handed to the driver owning `compatibles`, and the start of the
/// first `reg` window of the node. A node without `reg` yields a device
/// without a register window; probing it is up to the driver.
pub fn find_device(fdt: &Fdt<'static>, compatibles: &[&str]) -> Option<Device> {
    let node = fdt.find_compatible(compatibles)?;
    let compatible = node
        .compatible()?
        .all()
        .find(|c| compatibles.contains(c))?;

    let dev = Device::new(node.name, compatible);
    match node.reg().and_then(|mut reg| reg.next()) {
        Some(region) => {
            debug!("fdt: {} ({}) at {:p}", node.name, compatible, region.starting_address);
            Some(dev.with_base(region.starting_address as usize))
        }
        None => {
            debug!("fdt: {} ({}) has no reg", node.name, compatible);
            Some(dev)
        }
    }
}
