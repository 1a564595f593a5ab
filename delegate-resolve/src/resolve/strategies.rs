//! Resolvers that look at the target methods rather than their
//! parameter types.

use crate::method::{MethodBinding, MethodDescription};

use super::{AmbiguityResolver, Resolution};

/// Prefers the target with the higher binding priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BindingPriorityResolver;

impl AmbiguityResolver for BindingPriorityResolver {
    fn resolve(
        &self,
        _source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        let left_priority = left.target().priority();
        let right_priority = right.target().priority();
        match left_priority.cmp(&right_priority) {
            std::cmp::Ordering::Greater => Resolution::Left,
            std::cmp::Ordering::Less => Resolution::Right,
            std::cmp::Ordering::Equal => Resolution::Ambiguous,
        }
    }
}

/// Prefers the target declared by the more specific type, so an override
/// in a subclass beats the method it overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DeclaringTypeResolver;

impl AmbiguityResolver for DeclaringTypeResolver {
    fn resolve(
        &self,
        _source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        let left_type = left.target().declaring_type();
        let right_type = right.target().declaring_type();
        if left_type == right_type {
            Resolution::Ambiguous
        } else if left_type.is_assignable_from(right_type) {
            Resolution::Right
        } else if left_type.is_assignable_to(right_type) {
            Resolution::Left
        } else {
            Resolution::Ambiguous
        }
    }
}

/// Prefers the target that has the same name as the source method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MethodNameEqualityResolver;

impl AmbiguityResolver for MethodNameEqualityResolver {
    fn resolve(
        &self,
        source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        let left_matches = left.target().name() == source.name();
        let right_matches = right.target().name() == source.name();
        match (left_matches, right_matches) {
            (true, false) => Resolution::Left,
            (false, true) => Resolution::Right,
            _ => Resolution::Ambiguous,
        }
    }
}

/// Prefers the target with more parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParameterLengthResolver;

impl AmbiguityResolver for ParameterLengthResolver {
    fn resolve(
        &self,
        _source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        let left_length = left.target().parameter_count();
        let right_length = right.target().parameter_count();
        match left_length.cmp(&right_length) {
            std::cmp::Ordering::Greater => Resolution::Left,
            std::cmp::Ordering::Less => Resolution::Right,
            std::cmp::Ordering::Equal => Resolution::Ambiguous,
        }
    }
}

/// Always picks one side. Used last in a chain to force a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directional {
    Left,
    Right,
}

impl AmbiguityResolver for Directional {
    fn resolve(
        &self,
        _source: &MethodDescription,
        _left: &dyn MethodBinding,
        _right: &dyn MethodBinding,
    ) -> Resolution {
        match self {
            Directional::Left => Resolution::Left,
            Directional::Right => Resolution::Right,
        }
    }
}

/// Never has an opinion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoOp;

impl AmbiguityResolver for NoOp {
    fn resolve(
        &self,
        _source: &MethodDescription,
        _left: &dyn MethodBinding,
        _right: &dyn MethodBinding,
    ) -> Resolution {
        Resolution::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Binding;
    use crate::ty::{ReferenceType, TypeDescriptor};

    fn source() -> MethodDescription {
        let owner = ReferenceType::builder("com.example.Source").build();
        MethodDescription::new(&owner, "handle", vec![TypeDescriptor::int()])
    }

    fn binding(owner: &ReferenceType, name: &str, arity: usize, priority: i32) -> Binding {
        let params = vec![TypeDescriptor::int(); arity];
        Binding::builder(MethodDescription::new(owner, name, params).with_priority(priority)).build()
    }

    #[test]
    fn test_binding_priority() {
        let owner = ReferenceType::builder("com.example.Target").build();
        let low = binding(&owner, "a", 1, 1);
        let high = binding(&owner, "b", 1, 5);
        let resolver = BindingPriorityResolver;
        assert_eq!(resolver.resolve(&source(), &high, &low), Resolution::Left);
        assert_eq!(resolver.resolve(&source(), &low, &high), Resolution::Right);
        assert_eq!(resolver.resolve(&source(), &low, &low), Resolution::Ambiguous);
    }

    #[test]
    fn test_declaring_type() {
        let base = ReferenceType::builder("com.example.Base").build();
        let derived = ReferenceType::builder("com.example.Derived").extends(&base).build();
        let other = ReferenceType::builder("com.example.Other").build();

        let on_base = binding(&base, "run", 1, 1);
        let on_derived = binding(&derived, "run", 1, 1);
        let on_other = binding(&other, "run", 1, 1);

        let resolver = DeclaringTypeResolver;
        assert_eq!(resolver.resolve(&source(), &on_derived, &on_base), Resolution::Left);
        assert_eq!(resolver.resolve(&source(), &on_base, &on_derived), Resolution::Right);
        assert_eq!(resolver.resolve(&source(), &on_base, &on_base), Resolution::Ambiguous);
        assert_eq!(resolver.resolve(&source(), &on_base, &on_other), Resolution::Ambiguous);
    }

    #[test]
    fn test_method_name_equality() {
        let owner = ReferenceType::builder("com.example.Target").build();
        let same = binding(&owner, "handle", 1, 1);
        let different = binding(&owner, "process", 1, 1);

        let resolver = MethodNameEqualityResolver;
        assert_eq!(resolver.resolve(&source(), &same, &different), Resolution::Left);
        assert_eq!(resolver.resolve(&source(), &different, &same), Resolution::Right);
        assert_eq!(resolver.resolve(&source(), &same, &same), Resolution::Ambiguous);
        assert_eq!(resolver.resolve(&source(), &different, &different), Resolution::Ambiguous);
    }

    #[test]
    fn test_parameter_length() {
        let owner = ReferenceType::builder("com.example.Target").build();
        let short = binding(&owner, "a", 1, 1);
        let long = binding(&owner, "a", 3, 1);

        let resolver = ParameterLengthResolver;
        assert_eq!(resolver.resolve(&source(), &long, &short), Resolution::Left);
        assert_eq!(resolver.resolve(&source(), &short, &long), Resolution::Right);
        assert_eq!(resolver.resolve(&source(), &short, &short), Resolution::Ambiguous);
    }

    #[test]
    fn test_directional_and_noop() {
        let owner = ReferenceType::builder("com.example.Target").build();
        let a = binding(&owner, "a", 1, 1);
        let b = binding(&owner, "b", 2, 1);
        assert_eq!(Directional::Left.resolve(&source(), &a, &b), Resolution::Left);
        assert_eq!(Directional::Right.resolve(&source(), &a, &b), Resolution::Right);
        assert_eq!(NoOp.resolve(&source(), &a, &b), Resolution::Unknown);
    }
}
