use core::fmt;
use core::hash::{Hash, Hasher};

use super::Container;

/// Copies every element; the copy has no trace sink attached.
impl Clone for Container {
    fn clone(&self) -> Container {
        Container {
            store: self.store.clone(),
            element_size: self.element_size,
            cursor: self.cursor,
            #[cfg(feature = "std")]
            trace: None,
        }
    }
}

/// Containers are equal when they hold the same element bytes in the same
/// order, whatever their storage strategy.
impl PartialEq for Container {
    fn eq(&self, other: &Container) -> bool {
        self.element_size == other.element_size
            && self.len() == other.len()
            && self.store.elements().eq(other.store.elements())
    }
}

impl Eq for Container {}

impl Hash for Container {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element_size.hash(state);
        self.len().hash(state);
        for element in self.store.elements() {
            state.write(element);
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.store.elements()).finish()
    }
}
