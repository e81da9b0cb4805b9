//! Molecule Adapters: one capability adapter per release family
//!
//! Each module describes one family's wire layout as a [`WireCodec`]; the
//! shared [`VersionAdapter`] turns capability calls into overlay packets and
//! hands them to the codec.
//!
//! # Release families
//!
//! ```text
//! [1.8.0,  1.8.9]   v1_8   chat 0x02 action bar (inline codes), title 0x45
//! [1.9.0,  1.10.2]  v1_9   chat 0x0F action bar, title 0x45
//! [1.11.0, 1.16.5]  v1_11  action bar as title action, title id per release
//! [1.17.0, 1.18.2]  v1_17  one packet per title action, ids shift in 1.18
//! ```

mod overlay;
pub mod v1_11;
pub mod v1_17;
pub mod v1_8;
pub mod v1_9;

pub use overlay::{VersionAdapter, WireCodec};
pub use v1_11::V1_11Codec;
pub use v1_17::V1_17Codec;
pub use v1_8::V1_8Codec;
pub use v1_9::V1_9Codec;

use molecule_core::{CapabilityAdapter, CapabilityError, TextOptions, VersionId, VersionRange};
use molecule_registry::{AdapterDescriptor, AdapterRegistry};

fn range(min: (u32, u32, u32), max: (u32, u32, u32)) -> Result<VersionRange, CapabilityError> {
    VersionRange::new(
        VersionId::new(min.0, min.1, min.2),
        VersionId::new(max.0, max.1, max.2),
    )
}

fn descriptor<C, F>(
    range: VersionRange,
    options: &TextOptions,
    codec: F,
) -> AdapterDescriptor
where
    C: WireCodec + 'static,
    F: Fn() -> C + Send + Sync + 'static,
{
    let options = options.clone();
    AdapterDescriptor::new(range, move || -> Box<dyn CapabilityAdapter> {
        Box::new(VersionAdapter::new(codec(), options.clone()))
    })
}

/// Descriptors for every shipped release family.
pub fn builtin_descriptors(options: &TextOptions) -> Result<Vec<AdapterDescriptor>, CapabilityError> {
    Ok(vec![
        descriptor(range((1, 8, 0), (1, 8, 9))?, options, V1_8Codec::default),
        descriptor(range((1, 9, 0), (1, 10, 2))?, options, V1_9Codec::default),
        descriptor(range((1, 11, 0), (1, 16, 5))?, options, V1_11Codec::default),
        descriptor(range((1, 17, 0), (1, 18, 2))?, options, V1_17Codec::default),
    ])
}

/// Registry with every shipped release family registered.
pub fn builtin_registry(options: &TextOptions) -> Result<AdapterRegistry, CapabilityError> {
    let mut registry = AdapterRegistry::new();
    for descriptor in builtin_descriptors(options)? {
        registry.register_descriptor(descriptor)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ranges_do_not_overlap() {
        let registry = builtin_registry(&TextOptions::default()).unwrap();
        assert_eq!(registry.ranges().len(), 4);
    }

    #[test]
    fn test_builtin_resolution() {
        let registry = builtin_registry(&TextOptions::default()).unwrap();
        for (raw, name) in [
            ("1.8.8", "v1_8"),
            ("1.9.4", "v1_9"),
            ("1.10.2", "v1_9"),
            ("1.11", "v1_11"),
            ("1.12.2", "v1_11"),
            ("1.16.5", "v1_11"),
            ("1.17.1", "v1_17"),
            ("1.18.2", "v1_17"),
        ] {
            let version: VersionId = raw.parse().unwrap();
            assert_eq!(registry.resolve(&version).unwrap().name(), name, "release {}", raw);
        }
    }

    #[test]
    fn test_builtin_edges() {
        let registry = builtin_registry(&TextOptions::default()).unwrap();
        let unsupported = ["1.7.10", "1.19.0", "2.0.0"];
        for raw in unsupported {
            let version: VersionId = raw.parse().unwrap();
            let err = registry.resolve(&version).err().unwrap();
            assert!(matches!(err, CapabilityError::UnsupportedVersion(_)), "release {}", raw);
        }

        let err = registry.resolve(&VersionId::new(1, 9, 7)).err().unwrap();
        assert!(matches!(err, CapabilityError::AdapterInitialization { .. }));
    }
}
