use serde::Serialize;

use crate::{ConstraintSet, Month, Year, YearMonth};

/// Which header buttons should be disabled for the displayed month.
///
/// A flag is `true` when stepping in that direction would land on a month
/// the user cannot pick anything in. Flags are advisory: the picker still
/// performs the step if asked, as long as the target month exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub prev_month: bool,
    pub next_month: bool,
    pub prev_year:  bool,
    pub next_year:  bool,
}

impl NavigationState {
    /// Year bounds plus the `disable_until` / `disable_since` cut-offs
    pub fn new(month: Month, year: Year, constraints: &ConstraintSet) -> Self {
        let current = YearMonth::new(year, month);
        let before = |target: Option<YearMonth>| {
            target.is_none_or(|ym| constraints.is_month_entirely_before_disable_until(ym))
        };
        let after = |target: Option<YearMonth>| {
            target.is_none_or(|ym| constraints.is_month_entirely_after_disable_since(ym))
        };

        let bounds = Self::year_bounds_only(month, year, constraints);
        Self {
            prev_month: bounds.prev_month || before(current.prev()),
            next_month: bounds.next_month || after(current.next()),
            prev_year:  bounds.prev_year || before(current.prev_year()),
            next_year:  bounds.next_year || after(current.next_year()),
        }
    }

    /// Only the `[min_year, max_year]` check, for hosts that keep header
    /// buttons enabled regardless of the date cut-offs
    pub fn year_bounds_only(month: Month, year: Year, constraints: &ConstraintSet) -> Self {
        let current = YearMonth::new(year, month);
        let out_of_bounds = |target: Option<YearMonth>| {
            target.is_none_or(|ym| !constraints.is_year_in_bounds(ym.year.get()))
        };

        Self {
            prev_month: out_of_bounds(current.prev()),
            next_month: out_of_bounds(current.next()),
            prev_year:  out_of_bounds(current.prev_year()),
            next_year:  out_of_bounds(current.next_year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, month, unconstrained, year};

    #[test]
    fn test_navigation_cases() {
        struct TestCase {
            month:       u8,
            year:        u16,
            constraints: ConstraintSet,
            expected:    NavigationState,
            description: &'static str,
        }

        let bounded = || {
            ConstraintSet::builder()
                .min_year(2020)
                .max_year(2025)
                .build()
                .unwrap()
        };
        let cut_offs = || {
            ConstraintSet::builder()
                .disable_until(date(2024, 3, 1))
                .disable_since(date(2024, 10, 31))
                .build()
                .unwrap()
        };

        let cases = [
            TestCase {
                month:       6,
                year:        2024,
                constraints: unconstrained(),
                expected:    NavigationState::default(),
                description: "nothing disabled in the middle of the range",
            },
            TestCase {
                month:       6,
                year:        2025,
                constraints: bounded(),
                expected:    NavigationState {
                    next_year: true,
                    ..NavigationState::default()
                },
                description: "next year leaves max_year",
            },
            TestCase {
                month:       12,
                year:        2025,
                constraints: bounded(),
                expected:    NavigationState {
                    next_month: true,
                    next_year: true,
                    ..NavigationState::default()
                },
                description: "December of max_year",
            },
            TestCase {
                month:       1,
                year:        2020,
                constraints: bounded(),
                expected:    NavigationState {
                    prev_month: true,
                    prev_year: true,
                    ..NavigationState::default()
                },
                description: "January of min_year",
            },
            TestCase {
                month:       3,
                year:        2024,
                constraints: cut_offs(),
                expected:    NavigationState {
                    prev_month: true,
                    prev_year: true,
                    next_year: true,
                    ..NavigationState::default()
                },
                description: "February ends before disable_until, March 2025 starts after disable_since",
            },
            TestCase {
                month:       4,
                year:        2024,
                constraints: cut_offs(),
                expected:    NavigationState {
                    prev_year: true,
                    next_year: true,
                    ..NavigationState::default()
                },
                description: "March still holds the cut-off day",
            },
            TestCase {
                month:       10,
                year:        2024,
                constraints: cut_offs(),
                expected:    NavigationState {
                    next_month: true,
                    next_year: true,
                    prev_year: true,
                    ..NavigationState::default()
                },
                description: "November starts after disable_since",
            },
            TestCase {
                month:       1,
                year:        1000,
                constraints: unconstrained(),
                expected:    NavigationState {
                    prev_month: true,
                    prev_year: true,
                    ..NavigationState::default()
                },
                description: "lowest supported year",
            },
            TestCase {
                month:       12,
                year:        9999,
                constraints: unconstrained(),
                expected:    NavigationState {
                    next_month: true,
                    next_year: true,
                    ..NavigationState::default()
                },
                description: "no month after 9999-12",
            },
        ];

        for case in &cases {
            let state = NavigationState::new(month(case.month), year(case.year), &case.constraints);
            assert_eq!(state, case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_year_bounds_only_ignores_cut_offs() {
        let constraints = ConstraintSet::builder()
            .disable_until(date(2024, 3, 1))
            .build()
            .unwrap();
        assert_eq!(
            NavigationState::year_bounds_only(month(3), year(2024), &constraints),
            NavigationState::default()
        );
        assert!(NavigationState::new(month(3), year(2024), &constraints).prev_month);
    }

    #[test]
    fn test_navigation_json() {
        let state = NavigationState {
            next_year: true,
            ..NavigationState::default()
        };
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"prevMonth":false,"nextMonth":false,"prevYear":false,"nextYear":true}"#
        );
    }
}
