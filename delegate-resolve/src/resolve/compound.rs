//! Chaining of ambiguity resolvers.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::method::{MethodBinding, MethodDescription};

use super::{
    AmbiguityResolver, ArgumentTypeResolver, BindingPriorityResolver, DeclaringTypeResolver,
    MethodNameEqualityResolver, ParameterLengthResolver, Resolution,
};

/// An ordered chain of resolvers.
///
/// Each resolver is consulted in turn while the verdict so far is not
/// resolved; an ambiguous verdict defers to the next resolver just like
/// an unknown one. The last verdict obtained is returned.
#[derive(Clone)]
pub struct Compound {
    resolvers: Vec<Arc<dyn AmbiguityResolver>>,
}

impl Compound {
    /// An empty chain, which always answers `Unknown`.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Append a resolver to the end of the chain.
    pub fn then(mut self, resolver: impl AmbiguityResolver + 'static) -> Self {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    /// Append a shared resolver to the end of the chain.
    pub fn then_shared(mut self, resolver: Arc<dyn AmbiguityResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Append every resolver of another chain, keeping the chain flat.
    pub fn append(mut self, other: Compound) -> Self {
        self.resolvers.extend(other.resolvers);
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Default for Compound {
    /// Binding priority, declaring type, argument types, method name,
    /// parameter count.
    fn default() -> Self {
        Compound::new()
            .then(BindingPriorityResolver)
            .then(DeclaringTypeResolver)
            .then(ArgumentTypeResolver::INSTANCE)
            .then(MethodNameEqualityResolver)
            .then(ParameterLengthResolver)
    }
}

impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compound")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}

impl AmbiguityResolver for Compound {
    fn resolve(
        &self,
        source: &MethodDescription,
        left: &dyn MethodBinding,
        right: &dyn MethodBinding,
    ) -> Resolution {
        let mut resolution = Resolution::Unknown;
        for resolver in &self.resolvers {
            if resolution.is_resolved() {
                break;
            }
            resolution = resolver.resolve(source, left, right);
        }
        debug!(
            source = %source,
            left = %left.target(),
            right = %right.target(),
            %resolution,
            "resolved candidate pair"
        );
        resolution
    }
}
