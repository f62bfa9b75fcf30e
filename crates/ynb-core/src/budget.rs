//! Monthly category statistics.
//!
//! All amounts are integer minor units as supplied by the YNAB API (tenths of
//! a cent; true value = amount/1000 major currency units).

use chrono::{Datelike, NaiveDate};

/// Raw balances of a single budget category, as fetched from the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryFigures {
    pub budgeted: i64,
    pub activity: i64,
    pub balance: i64,
}

/// Derived per-request statistic. Never persisted; computed fresh per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistic {
    pub budgeted: i64,
    pub activity: i64,
    pub balance: i64,
    /// Average spent per elapsed day of the month, including today.
    pub avg_spent: i64,
    /// Average remaining per day until the end of the month, including today.
    pub avg_spent_left: i64,
    /// Days remaining after today; 0 on the last day of the month.
    pub days_left: u32,
}

/// Compute the statistic for `figures` as of `as_of`.
///
/// Pure and total over valid calendar dates; `as_of` must be the same date
/// for the whole computation since it drives two of the three derived fields.
pub fn compute_statistic(figures: CategoryFigures, as_of: NaiveDate) -> Statistic {
    Statistic {
        budgeted: figures.budgeted,
        activity: figures.activity,
        balance: figures.balance,
        avg_spent: avg_spent(figures, as_of),
        avg_spent_left: avg_spent_left(figures, as_of),
        days_left: days_left(as_of),
    }
}

fn avg_spent(figures: CategoryFigures, as_of: NaiveDate) -> i64 {
    if figures.activity == 0 {
        return 0;
    }

    figures.activity / i64::from(as_of.day())
}

fn avg_spent_left(figures: CategoryFigures, as_of: NaiveDate) -> i64 {
    // Denominator is the remaining days including today, always >= 1.
    figures.balance / i64::from(days_in_month(as_of) - as_of.day() + 1)
}

fn days_left(as_of: NaiveDate) -> u32 {
    days_in_month(as_of) - as_of.day()
}

/// Number of days in the month of `date`, leap-year correct.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first = first_of_month(year, month);
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };

    next.signed_duration_since(first).num_days() as u32
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn avg_spent_and_avg_spent_left() {
        struct Case {
            name: &'static str,
            figures: CategoryFigures,
            as_of: NaiveDate,
            want_spent: i64,
            want_left: i64,
        }

        let cases = [
            Case {
                name: "0_activity_at_first_day",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 0,
                    balance: 1_000_000,
                },
                as_of: date(2023, 1, 1),
                want_spent: 0,
                want_left: 32258,
            },
            Case {
                name: "0_activity_at_middle_day",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 0,
                    balance: 1_000_000,
                },
                as_of: date(2023, 1, 15),
                want_spent: 0,
                want_left: 58823,
            },
            Case {
                name: "0_activity_at_last_day",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 0,
                    balance: 1_000_000,
                },
                as_of: date(2023, 1, 31),
                want_spent: 0,
                want_left: 1_000_000,
            },
            Case {
                name: "200_activity_at_first_day",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 200_000,
                    balance: 800_000,
                },
                as_of: date(2023, 1, 1),
                want_spent: 200_000,
                want_left: 25806,
            },
            Case {
                name: "200_activity_at_middle_day",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 200_000,
                    balance: 800_000,
                },
                as_of: date(2023, 1, 15),
                want_spent: 13333,
                want_left: 47058,
            },
            Case {
                name: "200_activity_at_last_day",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 200_000,
                    balance: 800_000,
                },
                as_of: date(2023, 1, 31),
                want_spent: 6451,
                want_left: 800_000,
            },
            Case {
                name: "500_activity_at_first_day_other_month",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 500_000,
                    balance: 800_000,
                },
                as_of: date(2023, 2, 1),
                want_spent: 500_000,
                want_left: 28571,
            },
            Case {
                name: "500_activity_at_middle_day_other_month",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 500_000,
                    balance: 800_000,
                },
                as_of: date(2023, 2, 15),
                want_spent: 33333,
                want_left: 57142,
            },
            Case {
                name: "500_activity_at_last_day_other_month",
                figures: CategoryFigures {
                    budgeted: 1_000_000,
                    activity: 500_000,
                    balance: 800_000,
                },
                as_of: date(2023, 2, 28),
                want_spent: 17857,
                want_left: 800_000,
            },
        ];

        for c in cases {
            assert_eq!(avg_spent(c.figures, c.as_of), c.want_spent, "{}", c.name);
            assert_eq!(avg_spent_left(c.figures, c.as_of), c.want_left, "{}", c.name);
        }
    }

    #[test]
    fn statistic_copies_figures_verbatim() {
        let figures = CategoryFigures {
            budgeted: 1_000_000,
            activity: 200_000,
            balance: 800_000,
        };
        let stat = compute_statistic(figures, date(2023, 1, 15));

        assert_eq!(stat.budgeted, figures.budgeted);
        assert_eq!(stat.activity, figures.activity);
        assert_eq!(stat.balance, figures.balance);
        assert_eq!(stat.avg_spent, 13333);
        assert_eq!(stat.avg_spent_left, 47058);
        assert_eq!(stat.days_left, 16);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2000, 2, 10)), 29);
        assert_eq!(days_in_month(date(1900, 2, 10)), 28);
        assert_eq!(days_in_month(date(2023, 12, 31)), 31);
        assert_eq!(days_in_month(date(2023, 4, 1)), 30);
    }

    #[test]
    fn leap_february_affects_projection() {
        let figures = CategoryFigures {
            budgeted: 1_000_000,
            activity: 0,
            balance: 1_000_000,
        };

        // 29 remaining days in a leap February vs 28 in a common one.
        assert_eq!(avg_spent_left(figures, date(2024, 2, 1)), 34482);
        assert_eq!(avg_spent_left(figures, date(2023, 2, 1)), 35714);

        assert_eq!(compute_statistic(figures, date(2024, 2, 1)).days_left, 28);
        assert_eq!(compute_statistic(figures, date(2024, 2, 29)).days_left, 0);
    }

    #[test]
    fn days_left_is_zero_on_last_day() {
        assert_eq!(days_left(date(2023, 1, 31)), 0);
        assert_eq!(days_left(date(2023, 1, 1)), 30);
        assert_eq!(days_left(date(2023, 2, 28)), 0);
    }
}
