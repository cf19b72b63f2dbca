//! Compile-time dependency injection.
//!
//! A provider owns the leaves of the dependency graph (configuration
//! structs, shared clients). Every other type implements [`Build`], usually
//! via the derive macro, and is assembled recursively from its fields. Built
//! values are cached per provider, so each type is constructed once and
//! cloned afterwards.

extern crate self as intake_di;

pub use intake_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of the values built so far, keyed by type.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
