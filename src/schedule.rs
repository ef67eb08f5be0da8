//! Date-indexed transportation fee schedule.
//!
//! A fee set for a date stays in effect until a later date overrides it.
//! The schedule always holds an entry at its floor date, so every date on
//! or after the floor resolves to some fee.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::FeeScheduleConfig;
use crate::dates::day_month_year;
use crate::error::{LedgerError, LedgerResult};

/// A fee together with the date it took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeEntry {
    /// The date the fee became effective.
    #[serde(with = "day_month_year")]
    pub effective_date: NaiveDate,
    /// The per-package fee.
    pub fee: i64,
}

/// Values accepted as a transportation fee.
///
/// Integers are taken as-is; text must parse as an integer once surrounding
/// whitespace is removed.
pub trait IntoFee {
    /// Converts the value into an integer fee.
    fn into_fee(self) -> LedgerResult<i64>;
}

macro_rules! impl_into_fee_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoFee for $ty {
                fn into_fee(self) -> LedgerResult<i64> {
                    i64::try_from(self).map_err(|_| LedgerError::InvalidFee {
                        value: self.to_string(),
                    })
                }
            }
        )*
    };
}

impl_into_fee_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IntoFee for &str {
    fn into_fee(self) -> LedgerResult<i64> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| LedgerError::InvalidFee {
                value: self.to_string(),
            })
    }
}

impl IntoFee for String {
    fn into_fee(self) -> LedgerResult<i64> {
        self.as_str().into_fee()
    }
}

impl IntoFee for &String {
    fn into_fee(self) -> LedgerResult<i64> {
        self.as_str().into_fee()
    }
}

/// The fee schedule owned by an airline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    floor_date: NaiveDate,
    fees: BTreeMap<NaiveDate, i64>,
}

impl FeeSchedule {
    /// Creates a schedule seeded with the configured floor entry.
    ///
    /// # Example
    ///
    /// ```
    /// use airline_ledger::config::FeeScheduleConfig;
    /// use airline_ledger::schedule::FeeSchedule;
    /// use chrono::NaiveDate;
    ///
    /// let mut schedule = FeeSchedule::new(&FeeScheduleConfig::default());
    /// let christmas = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    /// schedule.set(christmas, 20).unwrap();
    ///
    /// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// assert_eq!(schedule.fee_on(new_year).unwrap().fee, 20);
    /// ```
    pub fn new(config: &FeeScheduleConfig) -> Self {
        let mut fees = BTreeMap::new();
        fees.insert(config.floor_date, config.base_fee);
        Self {
            floor_date: config.floor_date,
            fees,
        }
    }

    /// Returns the floor date.
    pub fn floor_date(&self) -> NaiveDate {
        self.floor_date
    }

    /// Sets the fee effective from `date`, replacing any fee already set for it.
    ///
    /// Dates before the floor are rejected. There is no upper bound.
    pub fn set(&mut self, date: NaiveDate, fee: i64) -> LedgerResult<Option<i64>> {
        if date < self.floor_date {
            return Err(LedgerError::DateBeforeMinimum {
                date,
                min: self.floor_date,
            });
        }
        Ok(self.fees.insert(date, fee))
    }

    /// Returns the entry in effect on `date`: the latest one dated on or before it.
    ///
    /// Returns `None` only for dates before the floor.
    pub fn fee_on(&self, date: NaiveDate) -> Option<FeeEntry> {
        self.fees
            .range(..=date)
            .next_back()
            .map(|(&effective_date, &fee)| FeeEntry {
                effective_date,
                fee,
            })
    }

    /// Iterates over all entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = FeeEntry> + '_ {
        self.fees.iter().map(|(&effective_date, &fee)| FeeEntry {
            effective_date,
            fee,
        })
    }

    /// Returns the number of entries, including the floor entry.
    pub fn len(&self) -> usize {
        self.fees.len()
    }

    /// Always false: the floor entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::new(&FeeScheduleConfig::default())
    }
}
