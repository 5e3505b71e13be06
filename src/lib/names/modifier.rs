use serde::{Deserialize, Serialize};

/// Kotlin modifier keywords.
///
/// Parsing goes through `str::parse` (strum's `EnumString`) and the keyword is
/// what `Display` prints, so `"reified".parse::<KModifier>()` round-trips.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KModifier {
    #[strum(serialize = "public")]
    Public,
    #[strum(serialize = "protected")]
    Protected,
    #[strum(serialize = "private")]
    Private,
    #[strum(serialize = "internal")]
    Internal,
    #[strum(serialize = "expect")]
    Expect,
    #[strum(serialize = "actual")]
    Actual,
    #[strum(serialize = "final")]
    Final,
    #[strum(serialize = "open")]
    Open,
    #[strum(serialize = "abstract")]
    Abstract,
    #[strum(serialize = "sealed")]
    Sealed,
    #[strum(serialize = "const")]
    Const,
    #[strum(serialize = "external")]
    External,
    #[strum(serialize = "override")]
    Override,
    #[strum(serialize = "lateinit")]
    Lateinit,
    #[strum(serialize = "tailrec")]
    Tailrec,
    #[strum(serialize = "vararg")]
    Vararg,
    #[strum(serialize = "suspend")]
    Suspend,
    #[strum(serialize = "inner")]
    Inner,
    #[strum(serialize = "enum")]
    Enum,
    #[strum(serialize = "annotation")]
    Annotation,
    #[strum(serialize = "fun")]
    Fun,
    #[strum(serialize = "companion")]
    Companion,
    #[strum(serialize = "inline")]
    Inline,
    #[strum(serialize = "value")]
    Value,
    #[strum(serialize = "noinline")]
    Noinline,
    #[strum(serialize = "crossinline")]
    Crossinline,
    #[strum(serialize = "reified")]
    Reified,
    #[strum(serialize = "infix")]
    Infix,
    #[strum(serialize = "operator")]
    Operator,
    #[strum(serialize = "data")]
    Data,
    #[strum(serialize = "in")]
    In,
    #[strum(serialize = "out")]
    Out,
}
