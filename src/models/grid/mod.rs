//! Time grid model.
//!
//! A day is quantized into 24 hours × 4 blocks of 15 minutes. A
//! [`CellAddress`] names one of those cells and is isomorphic to the
//! timestamp of the cell's start. [`VisibleWeek`] is the window of seven
//! consecutive days shown on screen.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::utils::date::{get_week_start, is_midnight, midnight};

/// Length of one grid cell in minutes.
pub const SLOT_INTERVAL: i64 = 15;
pub const BLOCKS_PER_HOUR: u32 = 4;
pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Address of one 15-minute cell: a calendar day, an hour and a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    day: NaiveDate,
    hour: u32,
    block: u32,
}

impl CellAddress {
    /// Create a validated cell address.
    ///
    /// Fails with `InvalidCellAddress` when `hour` is outside `0..24` or
    /// `block` is outside `0..4`.
    pub fn new(day: NaiveDate, hour: u32, block: u32) -> SchedulerResult<Self> {
        if hour >= HOURS_PER_DAY {
            return Err(SchedulerError::InvalidCellAddress(format!(
                "hour {} out of range 0..={}",
                hour,
                HOURS_PER_DAY - 1
            )));
        }
        if block >= BLOCKS_PER_HOUR {
            return Err(SchedulerError::InvalidCellAddress(format!(
                "block {} out of range 0..={}",
                block,
                BLOCKS_PER_HOUR - 1
            )));
        }
        Ok(Self { day, hour, block })
    }

    /// Decompose a grid-aligned timestamp into its cell address.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> SchedulerResult<Self> {
        if !is_grid_aligned(timestamp) {
            return Err(SchedulerError::unaligned(timestamp));
        }
        Ok(Self::containing(timestamp))
    }

    /// The cell whose 15-minute span contains `timestamp`.
    pub fn containing(timestamp: NaiveDateTime) -> Self {
        let time = timestamp.time();
        Self {
            day: timestamp.date(),
            hour: time.hour(),
            block: time.minute() / SLOT_INTERVAL as u32,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn block(&self) -> u32 {
        self.block
    }

    /// Minutes past midnight at which this cell starts.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.block * SLOT_INTERVAL as u32
    }

    /// Start timestamp of the cell.
    pub fn timestamp(&self) -> NaiveDateTime {
        midnight(self.day) + Duration::minutes(self.minute_of_day() as i64)
    }

    /// Same time of day on another calendar day.
    pub fn with_day(self, day: NaiveDate) -> Self {
        Self { day, ..self }
    }
}

/// Timestamp of the cell `(day, hour, block)`.
///
/// `day` must be a midnight-truncated timestamp, typically one of the
/// [`VisibleWeek`] days.
pub fn cell_timestamp(day: NaiveDateTime, hour: u32, block: u32) -> SchedulerResult<NaiveDateTime> {
    if !is_midnight(day) {
        return Err(SchedulerError::InvalidCellAddress(format!(
            "day {} is not truncated to midnight",
            day.format("%Y-%m-%d %H:%M:%S%.f")
        )));
    }
    Ok(CellAddress::new(day.date(), hour, block)?.timestamp())
}

/// True when the timestamp sits exactly on a 15-minute boundary.
pub fn is_grid_aligned(timestamp: NaiveDateTime) -> bool {
    let time = timestamp.time();
    time.minute() as i64 % SLOT_INTERVAL == 0 && time.second() == 0 && time.nanosecond() == 0
}

/// All 96 cells of a day in time order.
pub fn day_cells(day: NaiveDate) -> impl Iterator<Item = CellAddress> {
    (0..HOURS_PER_DAY).flat_map(move |hour| {
        (0..BLOCKS_PER_HOUR).map(move |block| CellAddress { day, hour, block })
    })
}

/// Where the visible week begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekAnchor {
    /// Seven days starting today.
    #[default]
    Today,
    /// Seven days starting at the beginning of the calendar week containing today.
    WeekStart,
}

/// The seven consecutive day columns shown on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWeek {
    days: [NaiveDateTime; DAYS_PER_WEEK],
}

impl VisibleWeek {
    /// Seven days starting at `first_day`, each truncated to midnight.
    pub fn starting(first_day: NaiveDate) -> Self {
        let start = midnight(first_day);
        let days = std::array::from_fn(|offset| start + Duration::days(offset as i64));
        Self { days }
    }

    /// Build the week for `today` according to the configured anchor.
    pub fn anchored(today: NaiveDate, anchor: WeekAnchor, first_day_of_week: u8) -> Self {
        match anchor {
            WeekAnchor::Today => Self::starting(today),
            WeekAnchor::WeekStart => Self::starting(get_week_start(today, first_day_of_week)),
        }
    }

    /// Midnight timestamps of the seven days, in order.
    pub fn days(&self) -> &[NaiveDateTime] {
        &self.days
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|day| day.date())
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0].date()
    }

    pub fn last(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1].date()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.index_of(day).is_some()
    }

    /// Column index of `day`, if it is visible.
    pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| d.date() == day)
    }

    /// Half-open timestamp range `[first midnight, day after last midnight)`.
    pub fn span(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.days[0], self.days[DAYS_PER_WEEK - 1] + Duration::days(1))
    }
}
