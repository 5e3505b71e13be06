use crate::names::*;
use crate::*;

/// A generic type parameter such as `reified out T : Comparable<T>`.
///
/// Fields are private: the bound list is always canonical (see
/// [`canonical_bounds`]) and a definitely-non-nullable variable is never
/// nullable. Every change goes through a copy that re-checks both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVariableName {
    name: String,
    bounds: Vec<TypeName>,
    variance: Variance,
    nullable: bool,
    reified: bool,
    definitely_non_nullable: bool,
    annotations: Vec<AnnotationName>,
}

enum Transition {
    Nullable(bool),
    Bounds,
    DefinitelyNonNullable,
}

impl TypeVariableName {
    /// `T`, implicitly bounded by `Any?`.
    pub fn new<S: Into<String>>(name: S) -> TypeVariableName {
        TypeVariableName::bounded(name, vec![])
    }

    pub fn bounded<S: Into<String>, I: IntoIterator<Item = TypeName>>(
        name: S,
        bounds: I,
    ) -> TypeVariableName {
        TypeVariableName {
            name: name.into(),
            bounds: canonical_bounds(bounds),
            variance: Variance::Invariant,
            nullable: false,
            reified: false,
            definitely_non_nullable: false,
            annotations: vec![],
        }
    }

    /// Fails unless `modifier` is `in`, `out` or absent.
    pub fn with_variance<S: Into<String>>(
        name: S,
        modifier: Option<KModifier>,
    ) -> TypeResult<TypeVariableName> {
        TypeVariableName::with_variance_and_bounds(name, modifier, vec![])
    }

    pub fn with_variance_and_bounds<S: Into<String>, I: IntoIterator<Item = TypeName>>(
        name: S,
        modifier: Option<KModifier>,
        bounds: I,
    ) -> TypeResult<TypeVariableName> {
        let name = name.into();
        let variance = Variance::from_modifier(&name, modifier)?;
        Ok(TypeVariableName {
            variance,
            ..TypeVariableName::bounded(name, bounds)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical bounds; `[Any?]` when none were declared.
    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }

    /// The bounds written in source, without the implicit `Any?`.
    pub fn explicit_bounds(&self) -> &[TypeName] {
        explicit_bounds(&self.bounds)
    }

    pub fn is_unbounded(&self) -> bool {
        self.explicit_bounds().is_empty()
    }

    pub fn is_multiply_bounded(&self) -> bool {
        self.explicit_bounds().len() > 1
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_reified(&self) -> bool {
        self.reified
    }

    pub fn is_definitely_non_nullable(&self) -> bool {
        self.definitely_non_nullable
    }

    pub fn annotations(&self) -> &[AnnotationName] {
        &self.annotations
    }

    /// The one-way rules of the definitely-non-nullable form, checked before
    /// any copy that touches nullability or bounds.
    fn check_transition(&self, transition: Transition) -> TypeResult<()> {
        let rejected = match transition {
            Transition::Nullable(true) if self.definitely_non_nullable => Some(
                TypeError::NullableDefinitelyNonNullable(self.name.clone()),
            ),
            Transition::Nullable(false) if self.definitely_non_nullable => Some(
                TypeError::NonNullableDefinitelyNonNullable(self.name.clone()),
            ),
            Transition::Nullable(_) => None,
            Transition::Bounds if self.definitely_non_nullable => Some(
                TypeError::BoundsOfDefinitelyNonNullable(self.name.clone()),
            ),
            Transition::Bounds => None,
            Transition::DefinitelyNonNullable => {
                if self.definitely_non_nullable {
                    Some(TypeError::AlreadyDefinitelyNonNullable(self.name.clone()))
                } else if self.nullable {
                    Some(TypeError::DefinitelyNonNullableFromNullable(
                        self.name.clone(),
                    ))
                } else {
                    match self.bounds.as_slice() {
                        [only] if only.is_top_type() => {
                            Some(TypeError::DefinitelyNonNullableOfTopType(
                                self.name.clone(),
                                only.to_string(),
                            ))
                        }
                        _ => None,
                    }
                }
            }
        };

        match rejected {
            Some(error) => {
                debug!("Rejecting copy of type variable {}: {}", self.name, error);
                Err(error)
            }
            None => Ok(()),
        }
    }

    pub fn with_nullable(&self, nullable: bool) -> TypeResult<TypeVariableName> {
        self.check_transition(Transition::Nullable(nullable))?;
        Ok(TypeVariableName {
            nullable,
            ..self.clone()
        })
    }

    pub fn with_reified(&self, reified: bool) -> TypeVariableName {
        TypeVariableName {
            reified,
            ..self.clone()
        }
    }

    /// Replaces the bounds, normalizing them again.
    pub fn with_bounds<I: IntoIterator<Item = TypeName>>(
        &self,
        bounds: I,
    ) -> TypeResult<TypeVariableName> {
        self.check_transition(Transition::Bounds)?;
        Ok(TypeVariableName {
            bounds: canonical_bounds(bounds),
            ..self.clone()
        })
    }

    /// Appends to the existing bounds.
    pub fn plus_bounds<I: IntoIterator<Item = TypeName>>(
        &self,
        bounds: I,
    ) -> TypeResult<TypeVariableName> {
        self.with_bounds(self.bounds.iter().cloned().chain(bounds))
    }

    pub fn annotated<I: IntoIterator<Item = AnnotationName>>(
        &self,
        annotations: I,
    ) -> TypeVariableName {
        let mut copy = self.clone();
        copy.annotations.extend(annotations);
        copy
    }

    /// `T & Any`: this same parameter intersected with non-null.
    ///
    /// The declared bounds are kept on the value but never rendered.
    pub fn definitely_non_nullable(&self) -> TypeResult<TypeVariableName> {
        self.check_transition(Transition::DefinitelyNonNullable)?;
        Ok(TypeVariableName {
            definitely_non_nullable: true,
            ..self.clone()
        })
    }
}
