//! Method descriptions and candidate bindings.
//!
//! A [`MethodBinding`] is one proposed routing of a source method's
//! parameters onto the parameters of a specific target method. The outer
//! binder decides which bindings are legal; this crate only reads them.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::ty::{ReferenceType, TypeDescriptor};

/// Binding priority of a target that declares none.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A source or target method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescription {
    name: String,
    declaring_type: ReferenceType,
    parameters: Vec<TypeDescriptor>,
    priority: i32,
}

impl MethodDescription {
    /// Create a method with [`DEFAULT_PRIORITY`].
    pub fn new(
        declaring_type: &ReferenceType,
        name: impl Into<String>,
        parameters: Vec<TypeDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.clone(),
            parameters,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Override the binding priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> &ReferenceType {
        &self.declaring_type
    }

    pub fn parameters(&self) -> &[TypeDescriptor] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// The type of the parameter at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a parameter position of this method.
    pub fn parameter(&self, index: usize) -> &TypeDescriptor {
        match self.parameters.get(index) {
            Some(ty) => ty,
            None => panic!(
                "parameter index {} out of range for {} with {} parameters",
                index,
                self,
                self.parameters.len()
            ),
        }
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// One token per parameter position, in order.
    pub(crate) fn parameter_tokens(&self) -> impl Iterator<Item = ParameterIndexToken> {
        (0..self.parameters.len()).map(ParameterIndexToken::new)
    }
}

impl fmt::Display for MethodDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring_type, self.name)?;
        for (i, ty) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        write!(f, ")")
    }
}

/// Opaque key for one parameter position of a source method.
///
/// Tokens compare and hash by position. They are minted by the resolvers
/// and by [`BindingBuilder::bind`]; a binding only ever receives tokens
/// for positions that exist on the source method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterIndexToken(usize);

impl ParameterIndexToken {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// The source parameter position this token stands for.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Read-only view of a candidate binding.
pub trait MethodBinding {
    /// The method this binding delegates to.
    fn target(&self) -> &MethodDescription;

    /// The target parameter the given source position is bound to, if any.
    fn target_parameter_index(&self, token: ParameterIndexToken) -> Option<usize>;
}

impl<T: MethodBinding + ?Sized> MethodBinding for &T {
    fn target(&self) -> &MethodDescription {
        (**self).target()
    }

    fn target_parameter_index(&self, token: ParameterIndexToken) -> Option<usize> {
        (**self).target_parameter_index(token)
    }
}

/// A concrete binding: a target method plus a source-to-target
/// parameter map.
#[derive(Debug, Clone)]
pub struct Binding {
    target: MethodDescription,
    indices: FxHashMap<ParameterIndexToken, usize>,
}

impl Binding {
    /// Start a binding onto `target` with no parameters bound.
    pub fn builder(target: MethodDescription) -> BindingBuilder {
        BindingBuilder {
            target,
            indices: FxHashMap::default(),
        }
    }

    /// Number of source positions this binding maps.
    pub fn bound_count(&self) -> usize {
        self.indices.len()
    }
}

impl MethodBinding for Binding {
    fn target(&self) -> &MethodDescription {
        &self.target
    }

    fn target_parameter_index(&self, token: ParameterIndexToken) -> Option<usize> {
        self.indices.get(&token).copied()
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.target, f)
    }
}

/// Builder for [`Binding`].
#[derive(Debug)]
pub struct BindingBuilder {
    target: MethodDescription,
    indices: FxHashMap<ParameterIndexToken, usize>,
}

impl BindingBuilder {
    /// Route source position `source_index` to target position
    /// `target_index`.
    ///
    /// # Panics
    ///
    /// Panics if `target_index` is not a parameter of the target, or if
    /// the source position is already bound.
    pub fn bind(mut self, source_index: usize, target_index: usize) -> Self {
        assert!(
            target_index < self.target.parameter_count(),
            "target index {} out of range for {}",
            target_index,
            self.target
        );
        let previous = self
            .indices
            .insert(ParameterIndexToken::new(source_index), target_index);
        assert!(
            previous.is_none(),
            "source parameter {} bound twice onto {}",
            source_index,
            self.target
        );
        self
    }

    pub fn build(self) -> Binding {
        Binding {
            target: self.target,
            indices: self.indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn target(params: Vec<TypeDescriptor>) -> MethodDescription {
        let owner = ReferenceType::builder("com.example.Target").build();
        MethodDescription::new(&owner, "accept", params)
    }

    #[test]
    fn test_token_equality() {
        let a = ParameterIndexToken::new(3);
        let b = ParameterIndexToken::new(3);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, ParameterIndexToken::new(4));
        assert_eq!(a.index(), 3);
    }

    #[test]
    fn test_parameter_tokens_cover_every_position() {
        let method = target(vec![TypeDescriptor::int(), TypeDescriptor::long()]);
        let indices: Vec<_> = method.parameter_tokens().map(|t| t.index()).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_binding_lookup() {
        let binding = Binding::builder(target(vec![TypeDescriptor::int(), TypeDescriptor::long()]))
            .bind(0, 1)
            .bind(2, 0)
            .build();

        assert_eq!(binding.bound_count(), 2);
        assert_eq!(binding.target_parameter_index(ParameterIndexToken::new(0)), Some(1));
        assert_eq!(binding.target_parameter_index(ParameterIndexToken::new(1)), None);
        assert_eq!(binding.target_parameter_index(ParameterIndexToken::new(2)), Some(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bind_rejects_missing_target_parameter() {
        let _ = Binding::builder(target(vec![TypeDescriptor::int()])).bind(0, 1);
    }

    #[test]
    #[should_panic(expected = "bound twice")]
    fn test_bind_rejects_rebinding() {
        let _ = Binding::builder(target(vec![TypeDescriptor::int(), TypeDescriptor::int()]))
            .bind(0, 0)
            .bind(0, 1);
    }

    #[test]
    #[should_panic(expected = "parameter index 2 out of range")]
    fn test_parameter_out_of_range() {
        target(vec![TypeDescriptor::int()]).parameter(2);
    }

    #[test]
    fn test_display() {
        let method = target(vec![
            TypeDescriptor::int(),
            ReferenceType::builder("java.lang.String").build().into(),
        ]);
        assert_eq!(method.to_string(), "com.example.Target.accept(int, java.lang.String)");
    }
}
