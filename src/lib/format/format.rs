use crate::format::*;
use crate::*;

pub struct FormattingContext<'a> {
    out: String,
    options: &'a RenderOptions,
}

impl<'a> FormattingContext<'a> {
    pub fn new(options: &'a RenderOptions) -> FormattingContext<'a> {
        FormattingContext {
            out: String::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    pub fn putstr(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn putchar(&mut self, c: char) {
        self.out.push(c);
    }

    pub fn space(&mut self) {
        self.out.push(' ');
    }

    pub fn list<T, F: FnMut(&mut Self, &T)>(&mut self, items: &[T], separator: &str, mut f: F) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.putstr(separator);
            }
            f(self, item);
        }
    }

    pub fn type_var_list<T, F: FnMut(&mut Self, &T)>(&mut self, items: &[T], f: F) {
        if items.is_empty() {
            return;
        }
        self.putchar('<');
        self.list(items, ", ", f);
        self.putchar('>');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

pub trait Format {
    fn write(&self, ctx: &mut FormattingContext);

    fn format(&self, options: &RenderOptions) -> String {
        let mut ctx = FormattingContext::new(options);
        self.write(&mut ctx);
        ctx.finish()
    }
}

macro_rules! display_with_default_options {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "{}", self.format(&RenderOptions::default()))
                }
            }
        )*
    };
}

display_with_default_options!(
    crate::names::TypeName,
    crate::names::ClassName,
    crate::names::AnnotationName,
    crate::names::ParameterizedTypeName,
    crate::names::WildcardTypeName,
    crate::names::LambdaTypeName,
    crate::names::TypeVariableName
);
