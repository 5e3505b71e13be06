use crate::names::*;
use crate::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Projection {
    Star,
    Out(Arc<TypeName>),
    In(Arc<TypeName>),
}

/// A use-site projection: `*`, `out T` or `in T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardTypeName {
    pub projection: Projection,
    pub annotations: Vec<AnnotationName>,
}

impl WildcardTypeName {
    pub fn star() -> WildcardTypeName {
        WildcardTypeName {
            projection: Projection::Star,
            annotations: vec![],
        }
    }

    /// `out T`. Producing `Any?` says nothing, so it collapses to `*`.
    pub fn producer_of(type_name: TypeName) -> WildcardTypeName {
        if type_name.is_nullable_any() {
            return WildcardTypeName::star();
        }
        WildcardTypeName {
            projection: Projection::Out(Arc::new(type_name)),
            annotations: vec![],
        }
    }

    /// `in T`.
    pub fn consumer_of(type_name: TypeName) -> WildcardTypeName {
        WildcardTypeName {
            projection: Projection::In(Arc::new(type_name)),
            annotations: vec![],
        }
    }

    pub fn with_nullable(&self, nullable: bool) -> TypeResult<WildcardTypeName> {
        if nullable {
            return Err(TypeError::NullableWildcard(
                TypeName::from(self.clone()).to_string(),
            ));
        }
        Ok(self.clone())
    }

    pub fn annotated<I: IntoIterator<Item = AnnotationName>>(
        &self,
        annotations: I,
    ) -> WildcardTypeName {
        let mut copy = self.clone();
        copy.annotations.extend(annotations);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_of_nullable_any_is_star() {
        assert_eq!(
            WildcardTypeName::producer_of(TypeName::nullable_any()),
            WildcardTypeName::star()
        );
        assert_ne!(
            WildcardTypeName::producer_of(TypeName::any()),
            WildcardTypeName::star()
        );
    }

    #[test]
    fn projections_are_never_nullable() {
        let out_number = WildcardTypeName::producer_of(TypeName::number());

        assert_eq!(
            out_number.with_nullable(true),
            Err(TypeError::NullableWildcard("out Number".into()))
        );
        assert_eq!(out_number.with_nullable(false), Ok(out_number.clone()));
    }
}
