use crate::core::cycle::CycleProjector;
use crate::domain::ports::Storage;
use crate::utils::error::{HealthError, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt::Write as _;

/// Range of days shown to the user: one month back, three months ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarWindow {
    pub fn around(today: NaiveDate) -> Self {
        Self {
            start: today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN),
            end: today.checked_add_months(Months::new(3)).unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// First day of every month the window touches.
    fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let mut cursor = self.start.with_day(1);
        while let Some(first) = cursor {
            if first > self.end {
                break;
            }
            months.push(first);
            cursor = first.checked_add_months(Months::new(1));
        }
        months
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_menstrual: bool,
    pub is_highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Classified view of a window, ready for display or export.
pub struct CycleCalendar<'a> {
    projector: &'a CycleProjector,
    window: CalendarWindow,
}

impl<'a> CycleCalendar<'a> {
    pub fn new(projector: &'a CycleProjector, window: CalendarWindow) -> Self {
        Self { projector, window }
    }

    pub fn window(&self) -> CalendarWindow {
        self.window
    }

    pub fn days(&self) -> Vec<CalendarDay> {
        self.window
            .dates()
            .map(|date| {
                let class = self.projector.classify(date);
                CalendarDay {
                    date,
                    is_menstrual: class.is_menstrual,
                    is_highlighted: class.is_highlighted,
                }
            })
            .collect()
    }

    /// Month grids, weeks starting on Sunday. `[dd]` marks a highlighted day,
    /// `dd*` a menstrual day outside the highlight; days outside the window are blank.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for first in self.window.months() {
            if !out.is_empty() {
                out.push('\n');
            }
            self.render_month(&mut out, first);
        }
        out
    }

    fn render_month(&self, out: &mut String, first: NaiveDate) {
        let title = first.format("%B %Y").to_string();
        let _ = writeln!(out, "{:^28}", title);
        out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa \n");

        let lead = first.weekday().num_days_from_sunday() as usize;
        let mut column = lead;
        out.push_str(&"    ".repeat(lead));

        for date in first.iter_days().take_while(|d| d.month() == first.month()) {
            out.push_str(&self.cell(date));
            column += 1;
            if column == 7 {
                out.push('\n');
                column = 0;
            }
        }
        if column != 0 {
            out.push('\n');
        }
    }

    fn cell(&self, date: NaiveDate) -> String {
        if !self.window.contains(date) {
            return "    ".to_string();
        }
        let class = self.projector.classify(date);
        if class.is_highlighted {
            format!("[{:>2}]", date.day())
        } else if class.is_menstrual {
            format!(" {:>2}*", date.day())
        } else {
            format!(" {:>2} ", date.day())
        }
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for day in self.days() {
            writer.serialize(day)?;
        }
        let bytes = writer.into_inner().map_err(|e| HealthError::IoError(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| HealthError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.days())?)
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Text => Ok(self.render_text()),
            ExportFormat::Csv => self.to_csv(),
            ExportFormat::Json => self.to_json(),
        }
    }

    /// Writes the rendered calendar through `storage` and returns the file name used.
    pub async fn export<S: Storage>(&self, storage: &S, format: ExportFormat) -> Result<String> {
        let filename = format!("menstrual_tracker.{}", format.extension());
        let content = self.render(format)?;
        tracing::debug!("Writing calendar ({} bytes) to {}", content.len(), filename);
        storage.write_file(&filename, content.as_bytes()).await?;
        Ok(filename)
    }
}
