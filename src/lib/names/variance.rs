use crate::names::*;
use crate::*;
use serde::{Deserialize, Serialize};

/// Declaration-site variance of a type variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variance {
    Invariant,
    Covariant,
    Contravariant,
}

impl Default for Variance {
    fn default() -> Self {
        Variance::Invariant
    }
}

impl Variance {
    /// Only `in`, `out` or no modifier at all are valid in the variance slot.
    pub fn from_modifier(name: &str, modifier: Option<KModifier>) -> TypeResult<Variance> {
        match modifier {
            None => Ok(Variance::Invariant),
            Some(KModifier::Out) => Ok(Variance::Covariant),
            Some(KModifier::In) => Ok(Variance::Contravariant),
            Some(other) => {
                debug!("Rejecting `{}` as the variance of {}", other, name);
                Err(TypeError::InvalidVariance(name.into(), other))
            }
        }
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Variance::Invariant => None,
            Variance::Covariant => Some("out"),
            Variance::Contravariant => Some("in"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_and_out_are_accepted() {
        assert_eq!(
            Variance::from_modifier("T", Some(KModifier::In)),
            Ok(Variance::Contravariant)
        );
        assert_eq!(
            Variance::from_modifier("T", Some(KModifier::Out)),
            Ok(Variance::Covariant)
        );
        assert_eq!(Variance::from_modifier("T", None), Ok(Variance::Invariant));
    }

    #[test]
    fn other_modifiers_are_rejected() {
        for modifier in &[KModifier::Reified, KModifier::Public, KModifier::Vararg] {
            assert_eq!(
                Variance::from_modifier("T", Some(*modifier)),
                Err(TypeError::InvalidVariance("T".into(), *modifier))
            );
        }
    }

    #[test]
    fn keywords() {
        assert_eq!(Variance::Covariant.keyword(), Some("out"));
        assert_eq!(Variance::Contravariant.keyword(), Some("in"));
        assert_eq!(Variance::Invariant.keyword(), None);
    }
}
