//! Static Storage - Per-Class Blocks and the Class Registry
//!
//! Class-level (static) reference fields live in one zeroed block per
//! class, owned by a process-wide registry. Registration is idempotent:
//! the first call for a class name allocates the block, later calls
//! return the same one, so re-resolving a static field always yields
//! the same location.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::error::{Result, SlotError};
use crate::object::block::RawBlock;
use crate::object::layout::ClassLayout;

/// Storage block backing one class's static reference fields
///
/// The block address serves as the location `base` for every static
/// field of the class. It is an implementation-defined handle: callers
/// must not interpret it beyond passing it back through a resolved
/// [`SlotLocation`](crate::SlotLocation).
#[derive(Debug)]
pub struct StaticStorage {
    class: String,
    storage: RawBlock,
}

impl StaticStorage {
    fn new(layout: &ClassLayout) -> Self {
        StaticStorage {
            class: layout.name().to_string(),
            storage: RawBlock::new_zeroed(layout.static_size(), layout.config().alignment),
        }
    }

    /// Name of the class this block belongs to
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Base address of the static block
    #[inline]
    pub fn base_address(&self) -> usize {
        self.storage.addr()
    }
}

struct ClassEntry {
    layout: Arc<ClassLayout>,
    statics: Arc<StaticStorage>,
}

lazy_static! {
    static ref CLASS_REGISTRY: RwLock<HashMap<String, ClassEntry>> = RwLock::new(HashMap::new());
}

/// Register a class and allocate its static block
///
/// Idempotent per class name: a second registration returns the block
/// from the first one and ignores the new layout.
pub fn register_class(layout: Arc<ClassLayout>) -> Arc<StaticStorage> {
    let mut registry = CLASS_REGISTRY.write();

    if let Some(entry) = registry.get(layout.name()) {
        log::debug!("class {} already registered, reusing static block", layout.name());
        return Arc::clone(&entry.statics);
    }

    let statics = Arc::new(StaticStorage::new(&layout));
    log::debug!(
        "registered class {} (static block {:#x}, {} bytes)",
        layout.name(),
        statics.base_address(),
        layout.static_size()
    );
    registry.insert(
        layout.name().to_string(),
        ClassEntry {
            layout,
            statics: Arc::clone(&statics),
        },
    );
    statics
}

/// Look up a registered class's layout and static block
pub fn lookup_class(class: &str) -> Result<(Arc<ClassLayout>, Arc<StaticStorage>)> {
    let registry = CLASS_REGISTRY.read();
    match registry.get(class) {
        Some(entry) => Ok((Arc::clone(&entry.layout), Arc::clone(&entry.statics))),
        None => Err(SlotError::UnknownClass {
            class: class.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_is_idempotent() {
        let layout = Arc::new(
            ClassLayout::builder("statics_test_idempotent")
                .static_ref_field("v")
                .build()
                .unwrap(),
        );
        let first = register_class(Arc::clone(&layout));
        let second = register_class(layout);
        assert_eq!(first.base_address(), second.base_address());
    }

    #[test]
    fn test_lookup_unknown_class() {
        assert!(matches!(
            lookup_class("statics_test_never_registered"),
            Err(SlotError::UnknownClass { .. })
        ));
    }

    #[test]
    fn test_lookup_returns_registered_block() {
        let layout = Arc::new(
            ClassLayout::builder("statics_test_lookup")
                .static_ref_field("v")
                .build()
                .unwrap(),
        );
        let registered = register_class(Arc::clone(&layout));
        let (found_layout, found_statics) = lookup_class("statics_test_lookup").unwrap();
        assert_eq!(found_layout.name(), "statics_test_lookup");
        assert_eq!(found_statics.base_address(), registered.base_address());
    }
}
