use crate::names::*;
use crate::*;

/// A function type, e.g. `suspend String.(Int) -> Unit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LambdaTypeName {
    pub receiver: Option<Arc<TypeName>>,
    pub parameters: Vec<TypeName>,
    pub return_type: Arc<TypeName>,
    pub suspending: bool,
    pub nullable: bool,
    pub annotations: Vec<AnnotationName>,
}

impl LambdaTypeName {
    pub fn new<I: IntoIterator<Item = TypeName>>(
        parameters: I,
        return_type: TypeName,
    ) -> LambdaTypeName {
        LambdaTypeName {
            receiver: None,
            parameters: parameters.into_iter().collect(),
            return_type: Arc::new(return_type),
            suspending: false,
            nullable: false,
            annotations: vec![],
        }
    }

    pub fn with_receiver(&self, receiver: TypeName) -> LambdaTypeName {
        LambdaTypeName {
            receiver: Some(Arc::new(receiver)),
            ..self.clone()
        }
    }

    pub fn with_suspending(&self, suspending: bool) -> LambdaTypeName {
        LambdaTypeName {
            suspending,
            ..self.clone()
        }
    }

    pub fn with_nullable(&self, nullable: bool) -> LambdaTypeName {
        LambdaTypeName {
            nullable,
            ..self.clone()
        }
    }

    pub fn annotated<I: IntoIterator<Item = AnnotationName>>(
        &self,
        annotations: I,
    ) -> LambdaTypeName {
        let mut copy = self.clone();
        copy.annotations.extend(annotations);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_leave_the_original_alone() {
        let callback = LambdaTypeName::new(vec![TypeName::int()], TypeName::unit());
        let suspending = callback.with_suspending(true).with_receiver(TypeName::string());

        assert!(!callback.suspending);
        assert!(callback.receiver.is_none());
        assert!(suspending.suspending);
        assert_eq!(
            suspending.receiver.as_deref(),
            Some(&TypeName::string())
        );
    }
}
