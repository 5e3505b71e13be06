use crate::names::*;
use crate::*;

/// A class applied to type arguments, e.g. `Map<String, out Number>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterizedTypeName {
    raw: ClassName,
    /// Never empty.
    arguments: Vec<TypeName>,
    nullable: bool,
    annotations: Vec<AnnotationName>,
}

impl ParameterizedTypeName {
    pub fn new<I: IntoIterator<Item = TypeName>>(
        raw: ClassName,
        arguments: I,
    ) -> TypeResult<ParameterizedTypeName> {
        let arguments = arguments.into_iter().collect::<Vec<_>>();
        if arguments.is_empty() {
            return Err(TypeError::MissingTypeArguments(raw.canonical_name()));
        }
        Ok(ParameterizedTypeName {
            raw: raw.with_nullable(false).without_annotations(),
            arguments,
            nullable: false,
            annotations: vec![],
        })
    }

    pub fn raw(&self) -> &ClassName {
        &self.raw
    }

    pub fn arguments(&self) -> &[TypeName] {
        &self.arguments
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn annotations(&self) -> &[AnnotationName] {
        &self.annotations
    }

    pub fn with_nullable(&self, nullable: bool) -> ParameterizedTypeName {
        ParameterizedTypeName {
            nullable,
            ..self.clone()
        }
    }

    pub fn annotated<I: IntoIterator<Item = AnnotationName>>(
        &self,
        annotations: I,
    ) -> ParameterizedTypeName {
        let mut copy = self.clone();
        copy.annotations.extend(annotations);
        copy
    }

    /// Same raw type with one more trailing argument.
    pub fn plus_argument(&self, argument: TypeName) -> ParameterizedTypeName {
        let mut copy = self.clone();
        copy.arguments.push(argument);
        copy
    }
}

impl ClassName {
    pub fn parameterized_by<I: IntoIterator<Item = TypeName>>(
        &self,
        arguments: I,
    ) -> TypeResult<TypeName> {
        ParameterizedTypeName::new(self.clone(), arguments).map(TypeName::Parameterized)
    }
}
