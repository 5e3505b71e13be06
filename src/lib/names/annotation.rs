use crate::names::*;

/// A type-use annotation, e.g. the `@Composable` in `@Composable () -> Unit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationName {
    pub class_name: ClassName,
}

impl AnnotationName {
    pub fn new(class_name: ClassName) -> AnnotationName {
        AnnotationName {
            class_name: class_name.with_nullable(false).without_annotations(),
        }
    }
}

impl From<ClassName> for AnnotationName {
    fn from(class_name: ClassName) -> Self {
        AnnotationName::new(class_name)
    }
}
