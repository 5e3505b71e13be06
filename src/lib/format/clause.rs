use crate::format::*;
use crate::names::*;

/// The generics of a declaration, split the way Kotlin wants them.
///
/// `declaration` is the `<...>` list that follows `fun`/the class name, and
/// `where_clause` lists the constraints of every variable with more than one
/// bound, to be placed after the return type. Either may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeVariableClause {
    pub declaration: String,
    pub where_clause: String,
}

impl TypeVariableClause {
    pub fn render(variables: &[TypeVariableName], options: &RenderOptions) -> TypeVariableClause {
        let mut declaration = FormattingContext::new(options);
        declaration.type_var_list(variables, |ctx, variable| {
            write_inline(variable, ctx);
        });

        let constraints = variables
            .iter()
            .filter(|variable| hoists_bounds(variable))
            .flat_map(|variable| {
                variable
                    .explicit_bounds()
                    .iter()
                    .map(move |bound| (variable, bound))
            })
            .collect::<Vec<_>>();

        let mut where_clause = FormattingContext::new(options);
        where_clause.list(&constraints, ", ", |ctx, (variable, bound)| {
            ctx.putstr(variable.name());
            ctx.putstr(" : ");
            bound.write(ctx);
        });

        TypeVariableClause {
            declaration: declaration.finish(),
            where_clause: where_clause.finish(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declaration.is_empty()
    }

    /// The trailing clause ready to be spliced after a return type, including
    /// its leading whitespace and `where` keyword.
    pub fn where_block(&self, options: &RenderOptions) -> String {
        if self.where_clause.is_empty() {
            String::new()
        } else if options.where_on_new_line {
            format!("\n{}where {}", options.indent, self.where_clause)
        } else {
            format!(" where {}", self.where_clause)
        }
    }
}

/// Variables with two or more bounds name them in the `where` clause instead.
fn hoists_bounds(variable: &TypeVariableName) -> bool {
    !variable.is_definitely_non_nullable() && variable.is_multiply_bounded()
}

/// Writes one entry of the `<...>` list.
fn write_inline(variable: &TypeVariableName, ctx: &mut FormattingContext) {
    for annotation in variable.annotations() {
        annotation.write(ctx);
        ctx.space();
    }
    if variable.is_reified() {
        ctx.putstr("reified ");
    }
    if let Some(keyword) = variable.variance().keyword() {
        ctx.putstr(keyword);
        ctx.space();
    }
    ctx.putstr(variable.name());

    if variable.is_definitely_non_nullable() {
        trace!("{} is definitely non-nullable, its bounds are not written", variable.name());
        ctx.putstr(" & ");
        TypeName::any().write(ctx);
        return;
    }

    let bounds = variable.explicit_bounds();
    trace!("{} has {} explicit bound(s)", variable.name(), bounds.len());
    if let [bound] = bounds {
        ctx.putstr(" : ");
        bound.write(ctx);
    }
    for (i, bound) in bounds.iter().enumerate() {
        if bounds[..i].contains(bound) {
            warn!("{} is bounded by {} more than once", variable.name(), bound);
        }
    }
}
