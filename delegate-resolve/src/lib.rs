//! Ambiguity resolution for method-delegation bindings.
//!
//! A delegation binder intercepts a *source* method and routes its calls to
//! one of several *target* methods. When more than one target can legally
//! accept the call, the candidates are handed to an
//! [`AmbiguityResolver`](resolve::AmbiguityResolver) which decides which
//! binding is more specific, following the host language's overload rules.
//!
//! # Example
//!
//! ```
//! use delegate_resolve::method::{Binding, MethodDescription};
//! use delegate_resolve::resolve::{AmbiguityResolver, ArgumentTypeResolver, Resolution};
//! use delegate_resolve::ty::{ReferenceType, TypeDescriptor};
//!
//! let owner = ReferenceType::builder("com.example.Interceptor").build();
//! let source = MethodDescription::new(&owner, "call", vec![TypeDescriptor::byte()]);
//!
//! let narrow = Binding::builder(MethodDescription::new(&owner, "a", vec![TypeDescriptor::byte()]))
//!     .bind(0, 0)
//!     .build();
//! let wide = Binding::builder(MethodDescription::new(&owner, "b", vec![TypeDescriptor::short()]))
//!     .bind(0, 0)
//!     .build();
//!
//! let verdict = ArgumentTypeResolver::INSTANCE.resolve(&source, &narrow, &wide);
//! assert_eq!(verdict, Resolution::Left);
//! ```

pub mod config;
pub mod method;
pub mod resolve;
pub mod select;
pub mod ty;

pub use config::{ConfigError, ResolverConfig};
pub use method::{Binding, MethodBinding, MethodDescription, ParameterIndexToken};
pub use resolve::{AmbiguityResolver, ArgumentTypeResolver, Compound, Resolution};
pub use select::{select, AmbiguityError, SelectionError};
pub use ty::{PrimitiveKind, ReferenceType, TypeDescriptor};
