use std::any::Any;
use std::fmt::Debug;
use std::ops::Deref;
use std::sync::Arc;

use crate::containers::HashMap;
#[cfg(doc)]
use crate::propagation::Propagator;
#[cfg(doc)]
use crate::Space;

/// Data which lives outside of the arena of a [`Space`] and which may be referenced by several
/// propagators or branchers, possibly of different spaces.
///
/// Objects holding [`SharedData`] have to declare that they notice copies (e.g.
/// [`Propagator::notice`]) and pass it through [`CopyContext::copy_shared`] when they are copied;
/// this decides whether the copy keeps referring to the same data or receives its own.
///
/// The data is immutable. Anything which is mutated during search belongs in the arena of the
/// space instead.
pub struct SharedData<T>(Arc<T>);

impl<T> SharedData<T> {
    pub fn new(data: T) -> Self {
        SharedData(Arc::new(data))
    }

    /// Whether both handles refer to the same instance of the data.
    pub fn ptr_eq(&self, other: &SharedData<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn identity(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<T> Clone for SharedData<T> {
    fn clone(&self) -> Self {
        SharedData(Arc::clone(&self.0))
    }
}

impl<T> Deref for SharedData<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Debug> Debug for SharedData<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedData").field(&*self.0).finish()
    }
}

/// Threaded through the copy of a [`Space`] to every object which declared it notices copies.
///
/// When the copy is not shared, [`SharedData`] is duplicated, but only once per copy: two objects
/// which referred to the same data in the original refer to the same duplicate in the copy.
pub struct CopyContext {
    shared: bool,
    copies: HashMap<usize, Box<dyn Any>>,
}

impl CopyContext {
    pub(crate) fn new(shared: bool) -> Self {
        CopyContext {
            shared,
            copies: HashMap::default(),
        }
    }

    /// Whether the copy may share immutable data with the space it is copied from.
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// Returns the instance of `data` the copy should refer to.
    pub fn copy_shared<T: Clone + 'static>(&mut self, data: &SharedData<T>) -> SharedData<T> {
        if self.shared {
            return data.clone();
        }

        let identity = data.identity();
        if let Some(copy) = self
            .copies
            .get(&identity)
            .and_then(|copy| copy.downcast_ref::<SharedData<T>>())
        {
            return copy.clone();
        }

        let copy = SharedData::new(T::clone(data));
        let _ = self.copies.insert(identity, Box::new(copy.clone()));
        copy
    }
}

impl Debug for CopyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyContext")
            .field("shared", &self.shared)
            .field("num_copies", &self.copies.len())
            .finish()
    }
}
