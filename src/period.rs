// A Period counts calendar slots ("2 months and 3 days"), not elapsed time. How long it is
// depends on where it is applied: one month after Farvardin 1 is 31 days, one month after
// Mehr 1 is 30.

use std::ops::Neg;

/// An amount of calendar time to add to or subtract from a date.
///
/// When applied, years are added first, then months, then days. See
/// [`add_to_jalali`](crate::add_to_jalali).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Period {
            years,
            months,
            days,
        }
    }

    pub fn years(years: i32) -> Self {
        Period::new(years, 0, 0)
    }

    pub fn months(months: i32) -> Self {
        Period::new(0, months, 0)
    }

    pub fn days(days: i32) -> Self {
        Period::new(0, 0, days)
    }

    pub fn with_years(self, years: i32) -> Self {
        Period { years, ..self }
    }

    pub fn with_months(self, months: i32) -> Self {
        Period { months, ..self }
    }

    pub fn with_days(self, days: i32) -> Self {
        Period { days, ..self }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Negates every component, or returns `None` if one of them is `i32::MIN`.
    pub fn checked_neg(self) -> Option<Self> {
        Some(Period {
            years: self.years.checked_neg()?,
            months: self.months.checked_neg()?,
            days: self.days.checked_neg()?,
        })
    }
}

impl Neg for Period {
    type Output = Period;

    fn neg(self) -> Self::Output {
        self.checked_neg().expect("period negation overflow")
    }
}
