//! Type descriptors for delegation targets.
//!
//! A parameter of a source or target method is described by a
//! [`TypeDescriptor`]: either one of the eight JVM primitive kinds or a
//! reference type. Reference types carry their own super class and
//! interfaces, so assignability can be answered without a separate
//! class-hierarchy lookup.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

/// Errors produced when parsing type names or descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("unknown primitive type `{0}`")]
    UnknownPrimitive(String),

    #[error("malformed reference descriptor `{0}`")]
    MalformedReference(String),
}

/// The eight JVM primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Char,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Char,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// The single-character JVM descriptor of this kind.
    pub fn descriptor(self) -> char {
        match self {
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
        }
    }

    /// The source-level keyword naming this kind.
    pub fn java_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Look up a kind by its descriptor character.
    pub fn from_descriptor(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.descriptor() == c)
    }
}

impl FromStr for PrimitiveKind {
    type Err = DescriptorError;

    /// Accepts either the keyword (`int`) or the descriptor (`I`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(kind) = Self::from_descriptor(c) {
                return Ok(kind);
            }
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.java_name() == s)
            .ok_or_else(|| DescriptorError::UnknownPrimitive(s.to_string()))
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

struct ClassData {
    name: String,
    super_class: Option<ReferenceType>,
    interfaces: Vec<ReferenceType>,
}

/// A shared, immutable description of a class or interface.
///
/// Two reference types are equal when their binary names are equal; the
/// recorded supertypes do not take part in equality or hashing.
#[derive(Clone)]
pub struct ReferenceType(Arc<ClassData>);

impl ReferenceType {
    /// Binary name of the root of the class hierarchy.
    pub const OBJECT_NAME: &'static str = "java.lang.Object";

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::builder(Self::OBJECT_NAME).build()
    }

    /// Start describing a type with the given binary name.
    pub fn builder(name: impl Into<String>) -> ReferenceTypeBuilder {
        ReferenceTypeBuilder {
            name: name.into(),
            super_class: None,
            interfaces: Vec::new(),
        }
    }

    /// Parse an object descriptor such as `Ljava/lang/String;` into a type
    /// with no recorded supertypes.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, DescriptorError> {
        let internal = descriptor
            .strip_prefix('L')
            .and_then(|rest| rest.strip_suffix(';'))
            .filter(|internal| !internal.is_empty() && !internal.contains(';'))
            .ok_or_else(|| DescriptorError::MalformedReference(descriptor.to_string()))?;
        Ok(Self::builder(internal.replace('/', ".")).build())
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn super_class(&self) -> Option<&ReferenceType> {
        self.0.super_class.as_ref()
    }

    pub fn interfaces(&self) -> &[ReferenceType] {
        &self.0.interfaces
    }

    /// Whether this is `java.lang.Object`.
    pub fn is_object(&self) -> bool {
        self.name() == Self::OBJECT_NAME
    }

    /// The JVM descriptor, e.g. `Ljava/lang/Object;`.
    pub fn descriptor(&self) -> String {
        format!("L{};", self.name().replace('.', "/"))
    }

    /// Direct supertypes: the super class first, then interfaces in
    /// declaration order.
    pub fn direct_supertypes(&self) -> impl Iterator<Item = &ReferenceType> {
        self.0.super_class.iter().chain(self.0.interfaces.iter())
    }

    /// Whether a value of type `other` can be assigned to a variable of
    /// this type without conversion.
    ///
    /// Every reference type is assignable to `java.lang.Object`, including
    /// interfaces that record no super class.
    pub fn is_assignable_from(&self, other: &ReferenceType) -> bool {
        if self == other || self.is_object() {
            return true;
        }
        other
            .direct_supertypes()
            .any(|supertype| self.is_assignable_from(supertype))
    }

    /// The inverse of [`ReferenceType::is_assignable_from`].
    pub fn is_assignable_to(&self, other: &ReferenceType) -> bool {
        other.is_assignable_from(self)
    }
}

impl PartialEq for ReferenceType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl Eq for ReferenceType {}

impl Hash for ReferenceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceType({})", self.name())
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for [`ReferenceType`].
///
/// Supertypes must already be built, so a hierarchy described this way
/// can never contain a cycle.
#[derive(Debug)]
pub struct ReferenceTypeBuilder {
    name: String,
    super_class: Option<ReferenceType>,
    interfaces: Vec<ReferenceType>,
}

impl ReferenceTypeBuilder {
    /// Set the super class.
    pub fn extends(mut self, super_class: &ReferenceType) -> Self {
        self.super_class = Some(super_class.clone());
        self
    }

    /// Add an implemented (or, for interfaces, extended) interface.
    pub fn implements(mut self, interface: &ReferenceType) -> Self {
        self.interfaces.push(interface.clone());
        self
    }

    pub fn build(self) -> ReferenceType {
        ReferenceType(Arc::new(ClassData {
            name: self.name,
            super_class: self.super_class,
            interfaces: self.interfaces,
        }))
    }
}

/// The type of a single method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Reference(ReferenceType),
}

impl TypeDescriptor {
    pub fn boolean() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Boolean)
    }

    pub fn byte() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Byte)
    }

    pub fn short() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Short)
    }

    pub fn int() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Int)
    }

    pub fn char() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Char)
    }

    pub fn long() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Long)
    }

    pub fn float() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Float)
    }

    pub fn double() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Double)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeDescriptor::Primitive(kind) => Some(*kind),
            TypeDescriptor::Reference(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&ReferenceType> {
        match self {
            TypeDescriptor::Primitive(_) => None,
            TypeDescriptor::Reference(ty) => Some(ty),
        }
    }

    /// The JVM descriptor of this type.
    pub fn descriptor(&self) -> String {
        match self {
            TypeDescriptor::Primitive(kind) => kind.descriptor().to_string(),
            TypeDescriptor::Reference(ty) => ty.descriptor(),
        }
    }

    /// Parse a primitive or object descriptor. Object types come back
    /// without recorded supertypes.
    pub fn parse(descriptor: &str) -> Result<Self, DescriptorError> {
        if descriptor.starts_with('L') && descriptor.len() > 1 {
            return ReferenceType::from_descriptor(descriptor).map(TypeDescriptor::Reference);
        }
        descriptor.parse().map(TypeDescriptor::Primitive)
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }
}

impl From<ReferenceType> for TypeDescriptor {
    fn from(ty: ReferenceType) -> Self {
        TypeDescriptor::Reference(ty)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => fmt::Display::fmt(kind, f),
            TypeDescriptor::Reference(ty) => fmt::Display::fmt(ty, f),
        }
    }
}
