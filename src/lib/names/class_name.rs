use crate::names::*;
use crate::*;

/// A fully-qualified class name, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    package: String,
    /// Outermost first. Never empty.
    simple_names: Vec<String>,
    nullable: bool,
    annotations: Vec<AnnotationName>,
}

impl ClassName {
    pub fn new<P: Into<String>, S: Into<String>>(package: P, simple_name: S) -> ClassName {
        ClassName {
            package: package.into(),
            simple_names: vec![simple_name.into()],
            nullable: false,
            annotations: vec![],
        }
    }

    /// Splits `kotlin.collections.Map.Entry` into its package and simple names,
    /// assuming packages are lowercase and classes are capitalised.
    pub fn best_guess(name: &str) -> TypeResult<ClassName> {
        let segments = name.split('.').collect::<Vec<_>>();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(TypeError::InvalidClassName(name.into()));
        }

        let first_class = segments
            .iter()
            .position(|s| s.chars().next().map_or(false, char::is_uppercase))
            .ok_or_else(|| TypeError::InvalidClassName(name.into()))?;

        Ok(ClassName {
            package: segments[..first_class].join("."),
            simple_names: segments[first_class..]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            nullable: false,
            annotations: vec![],
        })
    }

    pub fn nested<S: Into<String>>(&self, simple_name: S) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        ClassName {
            package: self.package.clone(),
            simple_names,
            nullable: false,
            annotations: vec![],
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn annotations(&self) -> &[AnnotationName] {
        &self.annotations
    }

    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map_or("", String::as_str)
    }

    /// The nested name without its package, e.g. `Map.Entry`.
    pub fn relative_name(&self) -> String {
        self.simple_names.join(".")
    }

    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.relative_name()
        } else {
            format!("{}.{}", self.package, self.relative_name())
        }
    }

    pub fn with_nullable(&self, nullable: bool) -> ClassName {
        ClassName {
            nullable,
            ..self.clone()
        }
    }

    pub fn annotated<I: IntoIterator<Item = AnnotationName>>(&self, annotations: I) -> ClassName {
        let mut copy = self.clone();
        copy.annotations.extend(annotations);
        copy
    }

    pub fn without_annotations(&self) -> ClassName {
        ClassName {
            annotations: vec![],
            ..self.clone()
        }
    }
}
