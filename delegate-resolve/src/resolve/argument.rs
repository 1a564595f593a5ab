//! Argument type resolution.
//!
//! Prefers the candidate whose target parameters are more specific,
//! position by position over the source method's parameters.

use tracing::trace;

use crate::method::{MethodBinding, MethodDescription};
use crate::ty::TypeDescriptor;

use super::{precedence, AmbiguityResolver, Resolution};

/// Compare the target parameter types two candidates chose for the same
/// source parameter.
///
/// - Two primitives are ordered by the [`precedence`] table.
/// - Two reference types: the one assignable to the other is more
///   specific. Equal or unrelated types are ambiguous.
/// - A primitive against a reference type: the side matching the source
///   parameter's kind wins, so an `int` argument prefers `int` over
///   `Integer` and an `Integer` argument prefers `Integer` over `int`.
pub fn compare(
    source: &TypeDescriptor,
    left: &TypeDescriptor,
    right: &TypeDescriptor,
) -> Resolution {
    match (left, right) {
        (TypeDescriptor::Primitive(l), TypeDescriptor::Primitive(r)) => precedence::resolve(*l, *r),
        (TypeDescriptor::Reference(l), TypeDescriptor::Reference(r)) => {
            if l == r {
                Resolution::Ambiguous
            } else if r.is_assignable_from(l) {
                Resolution::Left
            } else if l.is_assignable_from(r) {
                Resolution::Right
            } else {
                Resolution::Ambiguous
            }
        }
        (TypeDescriptor::Primitive(_), TypeDescriptor::Reference(_)) => {
            if source.is_primitive() {
                Resolution::Left
            } else {
                Resolution::Right
            }
        }
        (TypeDescriptor::Reference(_), TypeDescriptor::Primitive(_)) => {
            if source.is_primitive() {
                Resolution::Right
            } else {
                Resolution::Left
            }
        }
    }
}

/// Resolves ambiguity by comparing the types of the target parameters
/// each source parameter is bound to.
///
/// Positions bound by only one of the two candidates, or by neither,
/// contribute nothing. A conflict at any position makes the whole
/// verdict ambiguous. The resolver has no state; share
/// [`ArgumentTypeResolver::INSTANCE`] freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArgumentTypeResolver;

impl ArgumentTypeResolver {
    pub const INSTANCE: ArgumentTypeResolver = ArgumentTypeResolver;
}

impl AmbiguityResolver for ArgumentTypeResolver {
    fn resolve(
        &self,
        source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        let mut resolution = Resolution::Unknown;
        for token in source.parameter_tokens() {
            let left_index = left.target_parameter_index(token);
            let right_index = right.target_parameter_index(token);
            let (Some(left_index), Some(right_index)) = (left_index, right_index) else {
                trace!(position = token.index(), "parameter not bound on both sides");
                continue;
            };

            let left_type = left.target().parameter(left_index);
            let right_type = right.target().parameter(right_index);
            let verdict = compare(source.parameter(token.index()), left_type, right_type);
            trace!(
                position = token.index(),
                left = %left_type,
                right = %right_type,
                %verdict,
                "compared target parameters"
            );
            resolution = resolution.merge(verdict);
        }
        resolution
    }
}
