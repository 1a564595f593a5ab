//! Ambiguity resolution between candidate bindings.
//!
//! When a source method can legally be delegated to two different target
//! methods, an [`AmbiguityResolver`] decides which of the two candidate
//! bindings is preferable. Resolvers never judge legality; both
//! candidates are assumed valid for the same source method.
//!
//! # Resolvers
//!
//! - [`ArgumentTypeResolver`]: compares target parameter types position by
//!   position and merges the per-position verdicts.
//! - [`BindingPriorityResolver`], [`DeclaringTypeResolver`],
//!   [`MethodNameEqualityResolver`], [`ParameterLengthResolver`]: compare
//!   properties of the target methods themselves.
//! - [`Directional`] and [`NoOp`]: constant answers.
//! - [`Compound`]: an ordered chain of the above.

mod argument;
mod compound;
pub mod precedence;
mod resolution;
mod strategies;

pub use argument::{compare, ArgumentTypeResolver};
pub use compound::Compound;
pub use resolution::Resolution;
pub use strategies::{
    BindingPriorityResolver, DeclaringTypeResolver, Directional, MethodNameEqualityResolver,
    NoOp, ParameterLengthResolver,
};

use crate::method::{MethodBinding, MethodDescription};

/// Chooses between two candidate bindings of the same source method.
///
/// Implementations hold no per-call state and may be shared across
/// threads. Swapping `left` and `right` mirrors the verdict for every
/// resolver in this module except the [`Directional`] tie breakers.
pub trait AmbiguityResolver: Send + Sync {
    fn resolve(
        &self,
        source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution;
}

impl<T: AmbiguityResolver + ?Sized> AmbiguityResolver for &T {
    fn resolve(
        &self,
        source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        (**self).resolve(source, left, right)
    }
}
