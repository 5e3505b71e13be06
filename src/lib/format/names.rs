use crate::format::*;
use crate::names::*;

/// Packages whose classes Kotlin imports into every file.
const DEFAULT_IMPORTS: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
];

impl ClassName {
    pub fn is_default_imported(&self) -> bool {
        DEFAULT_IMPORTS.contains(&self.package())
    }
}

fn write_annotations(annotations: &[AnnotationName], ctx: &mut FormattingContext) {
    for annotation in annotations {
        annotation.write(ctx);
        ctx.space();
    }
}

fn write_nullable(nullable: bool, ctx: &mut FormattingContext) {
    if nullable {
        ctx.putchar('?');
    }
}

/// Writes the class without annotations or `?`.
fn write_class_reference(class_name: &ClassName, ctx: &mut FormattingContext) {
    if ctx.options().simple_names || class_name.is_default_imported() {
        ctx.putstr(&class_name.relative_name());
    } else {
        ctx.putstr(&class_name.canonical_name());
    }
}

impl Format for AnnotationName {
    fn write(&self, ctx: &mut FormattingContext) {
        ctx.putchar('@');
        write_class_reference(&self.class_name, ctx);
    }
}

impl Format for ClassName {
    fn write(&self, ctx: &mut FormattingContext) {
        write_annotations(self.annotations(), ctx);
        write_class_reference(self, ctx);
        write_nullable(self.is_nullable(), ctx);
    }
}

impl Format for ParameterizedTypeName {
    fn write(&self, ctx: &mut FormattingContext) {
        write_annotations(self.annotations(), ctx);
        write_class_reference(self.raw(), ctx);
        ctx.type_var_list(self.arguments(), |ctx, a| {
            a.write(ctx);
        });
        write_nullable(self.is_nullable(), ctx);
    }
}

impl Format for TypeVariableName {
    fn write(&self, ctx: &mut FormattingContext) {
        write_annotations(self.annotations(), ctx);
        ctx.putstr(self.name());
        if self.is_definitely_non_nullable() {
            ctx.putstr(" & ");
            TypeName::any().write(ctx);
        } else {
            write_nullable(self.is_nullable(), ctx);
        }
    }
}

impl Format for WildcardTypeName {
    fn write(&self, ctx: &mut FormattingContext) {
        write_annotations(&self.annotations, ctx);
        match &self.projection {
            Projection::Star => ctx.putchar('*'),
            Projection::Out(t) => {
                ctx.putstr("out ");
                t.write(ctx);
            }
            Projection::In(t) => {
                ctx.putstr("in ");
                t.write(ctx);
            }
        }
    }
}

impl Format for LambdaTypeName {
    fn write(&self, ctx: &mut FormattingContext) {
        write_annotations(&self.annotations, ctx);
        if self.nullable {
            ctx.putchar('(');
        }
        if self.suspending {
            ctx.putstr("suspend ");
        }
        if let Some(receiver) = &self.receiver {
            let lambda = matches!(**receiver, TypeName::Lambda(_));
            if lambda || !receiver.annotations().is_empty() {
                ctx.putchar('(');
                receiver.write(ctx);
                ctx.putchar(')');
            } else {
                receiver.write(ctx);
            }
            ctx.putchar('.');
        }
        ctx.putchar('(');
        ctx.list(&self.parameters, ", ", |ctx, p| {
            p.write(ctx);
        });
        ctx.putstr(") -> ");
        self.return_type.write(ctx);
        if self.nullable {
            ctx.putstr(")?");
        }
    }
}

impl Format for TypeName {
    fn write(&self, ctx: &mut FormattingContext) {
        match self {
            TypeName::Class(c) => c.write(ctx),
            TypeName::Parameterized(p) => p.write(ctx),
            TypeName::Variable(v) => v.write(ctx),
            TypeName::Wildcard(w) => w.write(ctx),
            TypeName::Lambda(l) => l.write(ctx),
            TypeName::Dynamic => ctx.putstr("dynamic"),
        }
    }
}
