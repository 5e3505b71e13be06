use crate::format::*;
use crate::names::*;
use crate::*;

/// Memoizes clause renders.
///
/// Keys are the variables and options by value, which is sound because both
/// are immutable with structural equality.
#[derive(Default)]
pub struct RenderCache {
    clauses: Cache<(Vec<TypeVariableName>, RenderOptions), TypeVariableClause>,
}

impl RenderCache {
    pub fn new() -> RenderCache {
        RenderCache::default()
    }

    pub fn clause(
        &mut self,
        variables: &[TypeVariableName],
        options: &RenderOptions,
    ) -> &TypeVariableClause {
        self.clauses
            .cache((variables.to_vec(), options.clone()), || {
                debug!("Rendering clause for {} type variable(s)", variables.len());
                TypeVariableClause::render(variables, options)
            })
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clear(&mut self) {
        self.clauses.clear();
    }
}
