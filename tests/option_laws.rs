//! Property-based tests for the `OptionLike` contract.
//!
//! Every variant must agree with the eager `Maybe` it resolves to.

use maybers::option::{LazyOption, Maybe, OptionLike};
use proptest::prelude::*;

fn any_maybe<T: Arbitrary + 'static>() -> impl Strategy<Value = Maybe<T>> {
    any::<Option<T>>().prop_map(Maybe::from)
}

proptest! {
    /// Exactly one of defined or empty holds
    #[test]
    fn prop_defined_xor_empty(value in any_maybe::<i32>()) {
        prop_assert_ne!(value.is_defined(), value.is_empty());
        prop_assert_eq!(value.get().is_ok(), value.is_defined());
    }

    /// get_or_else returns the value when defined and the default otherwise
    #[test]
    fn prop_get_or_else_matches_std(value in any_maybe::<i32>(), default in any::<i32>()) {
        let expected = Option::<i32>::from(value).unwrap_or(default);
        prop_assert_eq!(value.get_or_else(default), expected);
    }

    /// map agrees with std Option::map
    #[test]
    fn prop_map_matches_std(value in any_maybe::<i32>()) {
        let expected: Maybe<i64> = Option::<i32>::from(value).map(i64::from).into();
        prop_assert_eq!(value.map(i64::from), expected);
    }

    /// filter and filter_not partition a defined option
    #[test]
    fn prop_filter_and_filter_not_partition(value in any_maybe::<i32>()) {
        let even = value.filter(|n| n % 2 == 0);
        let odd = value.filter_not(|n| n % 2 == 0);
        prop_assert_eq!(even.or_else(odd), value);
        prop_assert!(even.is_empty() || odd.is_empty());
    }

    /// select and reject are complements for a defined target
    #[test]
    fn prop_select_and_reject_are_complements(value in any_maybe::<u8>(), target in any::<u8>()) {
        let selected = value.select(&target);
        let rejected = value.reject(&target);
        prop_assert_eq!(selected.or_else(rejected), value);
        prop_assert!(selected.is_empty() || rejected.is_empty());
    }

    /// Folds return initial for empty options and combine otherwise
    #[test]
    fn prop_folds_agree(value in any_maybe::<i16>(), initial in any::<i16>()) {
        let left = value.fold_left(i32::from(initial), |a, b| a + i32::from(b));
        let right = value.fold_right(i32::from(initial), |b, a| i32::from(b) + a);
        prop_assert_eq!(left, right);
    }

    /// Iteration yields the value at most once
    #[test]
    fn prop_iteration_count_matches_definedness(value in any_maybe::<String>()) {
        prop_assert_eq!(value.iter().count(), usize::from(value.is_defined()));
    }

    /// A lazy option behaves like the option its computation returns
    #[test]
    fn prop_lazy_option_matches_resolved_option(value in any_maybe::<i32>()) {
        let lazy = LazyOption::new(move || value);
        prop_assert_eq!(lazy.is_defined(), value.is_defined());
        prop_assert_eq!(lazy.get(), value.get());
        prop_assert_eq!(lazy.map(|n| n.wrapping_add(1)), value.map(|n| n.wrapping_add(1)));
    }
}
