//! Menstrual-cycle date projection.
//!
//! A period of `period_length` days starting on `start_date` is repeated every
//! `cycle_length` days, for the current cycle and the next three. A day is
//! *menstrual* when it lies in `[start - 1, end]` of any projected interval and
//! *highlighted* when it lies in `[start - 1, end - 1]`.
//!
//! Parameters are not validated: a period at least as long as the cycle simply
//! yields overlapping intervals.

use crate::domain::model::{CycleParameters, DayClassification, ProjectedInterval};
use chrono::{Days, NaiveDate};

/// Current cycle plus the next three.
pub const PROJECTED_CYCLES: u32 = 4;

/// Derives the projected intervals. An interval whose dates would fall outside
/// the representable calendar is dropped.
pub fn project(params: &CycleParameters) -> Vec<ProjectedInterval> {
    (0..PROJECTED_CYCLES)
        .filter_map(|index| {
            let offset = u64::from(index) * u64::from(params.cycle_length);
            let start = params.start_date.checked_add_days(Days::new(offset))?;
            let end = start.checked_add_days(Days::new(u64::from(params.period_length)))?;
            Some(ProjectedInterval { index, start, end })
        })
        .collect()
}

/// Pure classification of a single date. Builds the projection on every call;
/// use [`CycleProjector`] when classifying many dates for the same parameters.
pub fn classify(date: NaiveDate, params: &CycleParameters) -> DayClassification {
    classify_against(date, &project(params))
}

fn classify_against(date: NaiveDate, intervals: &[ProjectedInterval]) -> DayClassification {
    DayClassification {
        is_menstrual: intervals.iter().any(|i| i.covers_menstrual(date)),
        is_highlighted: intervals.iter().any(|i| i.covers_highlight(date)),
    }
}

impl ProjectedInterval {
    /// One day of pre-roll before the interval start.
    fn lower_bound(&self) -> NaiveDate {
        self.start.pred_opt().unwrap_or(self.start)
    }

    pub fn covers_menstrual(&self, date: NaiveDate) -> bool {
        self.lower_bound() <= date && date <= self.end
    }

    pub fn covers_highlight(&self, date: NaiveDate) -> bool {
        match self.end.pred_opt() {
            Some(last) => self.lower_bound() <= date && date <= last,
            None => false,
        }
    }
}

/// Parameters with their projection computed once.
#[derive(Debug, Clone)]
pub struct CycleProjector {
    params: CycleParameters,
    intervals: Vec<ProjectedInterval>,
}

impl CycleProjector {
    pub fn new(params: CycleParameters) -> Self {
        let intervals = project(&params);
        tracing::debug!(
            "Projected {} intervals from {} (period {}d, cycle {}d)",
            intervals.len(),
            params.start_date,
            params.period_length,
            params.cycle_length
        );
        Self { params, intervals }
    }

    pub fn params(&self) -> &CycleParameters {
        &self.params
    }

    pub fn intervals(&self) -> &[ProjectedInterval] {
        &self.intervals
    }

    pub fn classify(&self, date: NaiveDate) -> DayClassification {
        classify_against(date, &self.intervals)
    }
}
