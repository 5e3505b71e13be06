use crate::names::KModifier;
use crate::*;

pub type TypeResult<T> = Result<T, TypeError>;

/// A rejected construction or copy of a type name.
///
/// Every variant is a caller contract violation; nothing here is transient,
/// so there is no retry semantics attached to any of them.
#[derive(Clone, PartialEq, Eq, IntoStaticStr)]
pub enum TypeError {
    InvalidVariance(String, KModifier),
    InvalidClassName(String),
    MissingTypeArguments(String),
    NullableWildcard(String),
    NullableDynamic,
    AnnotatedDynamic,
    NullableDefinitelyNonNullable(String),
    NonNullableDefinitelyNonNullable(String),
    BoundsOfDefinitelyNonNullable(String),
    AlreadyDefinitelyNonNullable(String),
    DefinitelyNonNullableFromNullable(String),
    DefinitelyNonNullableOfTopType(String, String),
}

impl TypeError {
    pub fn code(&self) -> usize {
        use TypeError::*;

        match self {
            InvalidVariance(_, _) => 1,
            InvalidClassName(_) => 2,
            MissingTypeArguments(_) => 3,
            NullableWildcard(_) => 4,
            NullableDynamic => 5,
            AnnotatedDynamic => 6,
            NullableDefinitelyNonNullable(_) => 7,
            NonNullableDefinitelyNonNullable(_) => 8,
            BoundsOfDefinitelyNonNullable(_) => 9,
            AlreadyDefinitelyNonNullable(_) => 10,
            DefinitelyNonNullableFromNullable(_) => 11,
            DefinitelyNonNullableOfTopType(_, _) => 12,
        }
    }

    /// Whether the error comes from the one-way definitely-non-nullable rules.
    pub fn is_nullability_transition(&self) -> bool {
        use TypeError::*;

        match self {
            NullableDefinitelyNonNullable(_)
            | NonNullableDefinitelyNonNullable(_)
            | BoundsOfDefinitelyNonNullable(_)
            | AlreadyDefinitelyNonNullable(_)
            | DefinitelyNonNullableFromNullable(_)
            | DefinitelyNonNullableOfTopType(_, _) => true,

            InvalidVariance(_, _)
            | InvalidClassName(_)
            | MissingTypeArguments(_)
            | NullableWildcard(_)
            | NullableDynamic
            | AnnotatedDynamic => false,
        }
    }
}

impl fmt::Debug for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{:?} ({} #{})", self.to_string(), name, self.code())
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TypeError::*;

        match self {
            InvalidVariance(name, modifier) => write!(
                f,
                "`{}` cannot be used as the variance of `{}`, only `in` or `out` can.",
                modifier, name
            ),
            InvalidClassName(s) => write!(f, "`{}` doesn't look like a class name.", s),
            MissingTypeArguments(raw) => {
                write!(f, "`{}` must be parameterized with at least one type.", raw)
            }
            NullableWildcard(w) => write!(f, "`{}` is a projection and cannot be nullable.", w),
            NullableDynamic => write!(f, "`dynamic` cannot be nullable."),
            AnnotatedDynamic => write!(f, "`dynamic` cannot be annotated."),
            NullableDefinitelyNonNullable(name) => write!(
                f,
                "`{} & Any` is definitely non-nullable and cannot be made nullable.",
                name
            ),
            NonNullableDefinitelyNonNullable(name) => write!(
                f,
                "`{} & Any` is already definitely non-nullable.",
                name
            ),
            BoundsOfDefinitelyNonNullable(name) => write!(
                f,
                "The bounds of `{} & Any` cannot be changed.",
                name
            ),
            AlreadyDefinitelyNonNullable(name) => write!(
                f,
                "`{} & Any` cannot be made definitely non-nullable twice.",
                name
            ),
            DefinitelyNonNullableFromNullable(name) => write!(
                f,
                "`{}?` is nullable and cannot be made definitely non-nullable.",
                name
            ),
            DefinitelyNonNullableOfTopType(name, bound) => write!(
                f,
                "`{}` is only bounded by `{}`, so there is nothing to intersect with.",
                name, bound
            ),
        }
    }
}

impl std::error::Error for TypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_names_the_variant() {
        let error = TypeError::AlreadyDefinitelyNonNullable("T".into());

        assert_eq!(
            format!("{:?}", error),
            "\"`T & Any` cannot be made definitely non-nullable twice.\" (AlreadyDefinitelyNonNullable #10)"
        );
    }

    #[test]
    fn invalid_variance_message() {
        let error = TypeError::InvalidVariance("T".into(), KModifier::Public);

        assert_eq!(
            error.to_string(),
            "`public` cannot be used as the variance of `T`, only `in` or `out` can."
        );
        assert!(!error.is_nullability_transition());
    }
}
