use crate::names::*;

/// The bound list a type variable actually carries.
///
/// No bounds at all means the implicit `Any?`. Once a real bound is declared,
/// `Any?` constrains nothing and is dropped. Order is kept and duplicates
/// are not merged: bounds are a list, not a set.
pub fn canonical_bounds<I: IntoIterator<Item = TypeName>>(declared: I) -> Vec<TypeName> {
    let declared = declared.into_iter().collect::<Vec<_>>();

    if declared.iter().all(TypeName::is_nullable_any) {
        return vec![TypeName::nullable_any()];
    }

    declared
        .into_iter()
        .filter(|bound| !bound.is_nullable_any())
        .collect()
}

/// The bounds that show up in source text. The sole implicit `Any?` is never
/// written out, so it maps to no bounds.
pub fn explicit_bounds(canonical: &[TypeName]) -> &[TypeName] {
    match canonical {
        [only] if only.is_nullable_any() => &[],
        _ => canonical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> TypeName {
        ClassName::new("", name).into()
    }

    #[test]
    fn no_bounds_is_nullable_any() {
        assert_eq!(canonical_bounds(vec![]), vec![TypeName::nullable_any()]);
        assert!(explicit_bounds(&canonical_bounds(vec![])).is_empty());
    }

    #[test]
    fn explicit_nullable_any_alone_is_the_implicit_bound() {
        let bounds = canonical_bounds(vec![TypeName::nullable_any()]);

        assert_eq!(bounds, vec![TypeName::nullable_any()]);
        assert!(explicit_bounds(&bounds).is_empty());
    }

    #[test]
    fn nullable_any_is_dropped_next_to_real_bounds() {
        let bounds = canonical_bounds(vec![
            TypeName::nullable_any(),
            class("Serializable"),
            TypeName::nullable_any(),
            class("Runnable"),
        ]);

        assert_eq!(bounds, vec![class("Serializable"), class("Runnable")]);
        assert_eq!(explicit_bounds(&bounds), &bounds[..]);
    }

    #[test]
    fn non_nullable_any_is_a_real_bound() {
        let bounds = canonical_bounds(vec![TypeName::any()]);

        assert_eq!(explicit_bounds(&bounds), &[TypeName::any()][..]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let bounds = canonical_bounds(vec![class("A"), class("B"), class("A")]);

        assert_eq!(bounds, vec![class("A"), class("B"), class("A")]);
    }
}
