use crate::domain::model::CycleParameters;
use crate::utils::error::{HealthError, Result};
use crate::utils::validation::Validate;
use chrono::{Datelike, Days, Months, NaiveDate};

pub const PERIOD_LENGTH_RANGE: (u32, u32) = (1, 10);
pub const CYCLE_LENGTH_RANGE: (u32, u32) = (18, 40);
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Decrement,
    Increment,
}

/// Editable tracker inputs. Both lengths move in single-day steps and wrap
/// around at the ends of their ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerInputs {
    pub start_date: NaiveDate,
    pub period_length: u32,
    pub cycle_length: u32,
}

impl TrackerInputs {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start_date: today,
            period_length: DEFAULT_PERIOD_LENGTH,
            cycle_length: DEFAULT_CYCLE_LENGTH,
        }
    }

    pub fn step_period(&mut self, step: Step) -> u32 {
        self.period_length = wrap_step(self.period_length, step, PERIOD_LENGTH_RANGE);
        self.period_length
    }

    pub fn step_cycle(&mut self, step: Step) -> u32 {
        self.cycle_length = wrap_step(self.cycle_length, step, CYCLE_LENGTH_RANGE);
        self.cycle_length
    }

    pub fn to_params(&self) -> CycleParameters {
        CycleParameters::new(self.start_date, self.period_length, self.cycle_length)
    }
}

/// Lengths typed in directly must stay inside the stepper ranges.
impl Validate for TrackerInputs {
    fn validate(&self) -> Result<()> {
        check_length("period_length", self.period_length, PERIOD_LENGTH_RANGE)?;
        check_length("cycle_length", self.cycle_length, CYCLE_LENGTH_RANGE)
    }
}

fn check_length(field: &str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    if value < min || value > max {
        return Err(HealthError::validation(
            field,
            format!("{} days is outside {}..={}", value, min, max),
        ));
    }
    Ok(())
}

fn wrap_step(value: u32, step: Step, (min, max): (u32, u32)) -> u32 {
    match step {
        Step::Decrement if value > min => value - 1,
        Step::Decrement => max,
        Step::Increment if value >= max => min,
        Step::Increment => value + 1,
    }
}

/// Start dates offered by the picker: strictly inside
/// `(today - 1 month - d, today + 3 months + d)` where `d` is today's day of month.
pub fn is_selectable_start(date: NaiveDate, today: NaiveDate) -> bool {
    let slack = Days::new(u64::from(today.day()));
    let lower = today
        .checked_sub_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(slack));
    let upper = today
        .checked_add_months(Months::new(3))
        .and_then(|d| d.checked_add_days(slack));

    match (lower, upper) {
        (Some(lower), Some(upper)) => lower < date && date < upper,
        _ => false,
    }
}
