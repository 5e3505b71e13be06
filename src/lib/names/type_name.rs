use crate::names::*;
use crate::*;

/// Any type reference that can appear in generated Kotlin code.
///
/// Equality and hashing are structural: two names that render the same text
/// with the same nullability are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Class(ClassName),
    Parameterized(ParameterizedTypeName),
    Variable(TypeVariableName),
    Wildcard(WildcardTypeName),
    Lambda(LambdaTypeName),
    Dynamic,
}

impl ClassName {
    pub fn kotlin(simple_name: &str) -> ClassName {
        ClassName::new("kotlin", simple_name)
    }

    pub fn kotlin_collections(simple_name: &str) -> ClassName {
        ClassName::new("kotlin.collections", simple_name)
    }
}

impl TypeName {
    /// The non-nullable universal top type, `kotlin.Any`.
    pub fn any() -> TypeName {
        ClassName::kotlin("Any").into()
    }

    /// The nullable universal top type, `kotlin.Any?`.
    pub fn nullable_any() -> TypeName {
        ClassName::kotlin("Any").with_nullable(true).into()
    }

    pub fn unit() -> TypeName {
        ClassName::kotlin("Unit").into()
    }

    pub fn nothing() -> TypeName {
        ClassName::kotlin("Nothing").into()
    }

    pub fn string() -> TypeName {
        ClassName::kotlin("String").into()
    }

    pub fn int() -> TypeName {
        ClassName::kotlin("Int").into()
    }

    pub fn long() -> TypeName {
        ClassName::kotlin("Long").into()
    }

    pub fn boolean() -> TypeName {
        ClassName::kotlin("Boolean").into()
    }

    pub fn number() -> TypeName {
        ClassName::kotlin("Number").into()
    }

    pub fn char_sequence() -> TypeName {
        ClassName::kotlin("CharSequence").into()
    }

    pub fn comparable() -> TypeName {
        ClassName::kotlin("Comparable").into()
    }

    pub fn list() -> TypeName {
        ClassName::kotlin_collections("List").into()
    }

    pub fn map() -> TypeName {
        ClassName::kotlin_collections("Map").into()
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            TypeName::Class(c) => c.is_nullable(),
            TypeName::Parameterized(p) => p.is_nullable(),
            TypeName::Variable(v) => v.is_nullable(),
            TypeName::Lambda(l) => l.nullable,
            TypeName::Wildcard(_) | TypeName::Dynamic => false,
        }
    }

    pub fn annotations(&self) -> &[AnnotationName] {
        match self {
            TypeName::Class(c) => c.annotations(),
            TypeName::Parameterized(p) => p.annotations(),
            TypeName::Variable(v) => v.annotations(),
            TypeName::Wildcard(w) => &w.annotations,
            TypeName::Lambda(l) => &l.annotations,
            TypeName::Dynamic => &[],
        }
    }

    /// Same type with the given nullability. Never mutates `self`.
    pub fn with_nullable(&self, nullable: bool) -> TypeResult<TypeName> {
        Ok(match self {
            TypeName::Class(c) => TypeName::Class(c.with_nullable(nullable)),
            TypeName::Parameterized(p) => TypeName::Parameterized(p.with_nullable(nullable)),
            TypeName::Variable(v) => TypeName::Variable(v.with_nullable(nullable)?),
            TypeName::Wildcard(w) => TypeName::Wildcard(w.with_nullable(nullable)?),
            TypeName::Lambda(l) => TypeName::Lambda(l.with_nullable(nullable)),
            TypeName::Dynamic if nullable => return Err(TypeError::NullableDynamic),
            TypeName::Dynamic => TypeName::Dynamic,
        })
    }

    /// Appends type-use annotations.
    pub fn annotated<I: IntoIterator<Item = AnnotationName>>(
        &self,
        annotations: I,
    ) -> TypeResult<TypeName> {
        let annotations = annotations.into_iter().collect::<Vec<_>>();
        Ok(match self {
            TypeName::Class(c) => TypeName::Class(c.annotated(annotations)),
            TypeName::Parameterized(p) => TypeName::Parameterized(p.annotated(annotations)),
            TypeName::Variable(v) => TypeName::Variable(v.annotated(annotations)),
            TypeName::Wildcard(w) => TypeName::Wildcard(w.annotated(annotations)),
            TypeName::Lambda(l) => TypeName::Lambda(l.annotated(annotations)),
            TypeName::Dynamic if !annotations.is_empty() => {
                return Err(TypeError::AnnotatedDynamic)
            }
            TypeName::Dynamic => TypeName::Dynamic,
        })
    }

    pub fn is_any(&self) -> bool {
        *self == TypeName::any()
    }

    pub fn is_nullable_any(&self) -> bool {
        *self == TypeName::nullable_any()
    }

    /// Either form of the universal top type.
    pub fn is_top_type(&self) -> bool {
        self.is_any() || self.is_nullable_any()
    }
}

impl From<ClassName> for TypeName {
    fn from(class_name: ClassName) -> Self {
        TypeName::Class(class_name)
    }
}

impl From<ParameterizedTypeName> for TypeName {
    fn from(parameterized: ParameterizedTypeName) -> Self {
        TypeName::Parameterized(parameterized)
    }
}

impl From<TypeVariableName> for TypeName {
    fn from(variable: TypeVariableName) -> Self {
        TypeName::Variable(variable)
    }
}

impl From<WildcardTypeName> for TypeName {
    fn from(wildcard: WildcardTypeName) -> Self {
        TypeName::Wildcard(wildcard)
    }
}

impl From<LambdaTypeName> for TypeName {
    fn from(lambda: LambdaTypeName) -> Self {
        TypeName::Lambda(lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_types() {
        assert!(TypeName::any().is_top_type());
        assert!(TypeName::nullable_any().is_nullable_any());
        assert!(!TypeName::any().is_nullable_any());
        assert_eq!(
            TypeName::any().with_nullable(true).unwrap(),
            TypeName::nullable_any()
        );
        assert!(!TypeName::string().is_top_type());
    }

    #[test]
    fn with_nullable_is_idempotent() {
        let nullable = TypeName::string().with_nullable(true).unwrap();

        assert!(nullable.is_nullable());
        assert_eq!(nullable.with_nullable(true).unwrap(), nullable);
        assert_eq!(nullable.with_nullable(false).unwrap(), TypeName::string());
    }

    #[test]
    fn dynamic_is_never_nullable_nor_annotated() {
        let deprecated = AnnotationName::new(ClassName::kotlin("Deprecated"));

        assert_eq!(
            TypeName::Dynamic.with_nullable(true),
            Err(TypeError::NullableDynamic)
        );
        assert_eq!(
            TypeName::Dynamic.with_nullable(false),
            Ok(TypeName::Dynamic)
        );
        assert_eq!(
            TypeName::Dynamic.annotated(vec![deprecated]),
            Err(TypeError::AnnotatedDynamic)
        );
        assert_eq!(TypeName::Dynamic.annotated(vec![]), Ok(TypeName::Dynamic));
    }

    #[test]
    fn annotations_are_part_of_identity() {
        let deprecated = AnnotationName::new(ClassName::kotlin("Deprecated"));
        let annotated = TypeName::string().annotated(vec![deprecated.clone()]).unwrap();

        assert_ne!(annotated, TypeName::string());
        assert_eq!(annotated.annotations(), &[deprecated][..]);
    }
}
