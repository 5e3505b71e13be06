mod annotation;
pub use self::annotation::*;

mod modifier;
pub use self::modifier::*;

mod variance;
pub use self::variance::*;

mod class_name;
pub use self::class_name::*;

mod parameterized;
pub use self::parameterized::*;

mod wildcard;
pub use self::wildcard::*;

mod lambda;
pub use self::lambda::*;

mod type_name;
pub use self::type_name::*;

mod bounds;
pub use self::bounds::*;

mod type_variable;
pub use self::type_variable::*;
