//! Materializer trait - puts a dependency's files into the project tree.

use crate::core::{Descriptor, GlueResult};

/// Something that can fetch or update a dependency on disk.
///
/// After a successful call the dependency's tree lives under the deps root
/// in a directory named after its canonical name.
pub trait Materializer {
    /// Fetch the dependency if absent, update it in place otherwise.
    fn materialize(&mut self, desc: &Descriptor) -> GlueResult<()>;
}

impl<M: Materializer + ?Sized> Materializer for &mut M {
    fn materialize(&mut self, desc: &Descriptor) -> GlueResult<()> {
        (**self).materialize(desc)
    }
}

impl<M: Materializer + ?Sized> Materializer for Box<M> {
    fn materialize(&mut self, desc: &Descriptor) -> GlueResult<()> {
        (**self).materialize(desc)
    }
}
