use anyhow::Result;
use chrono::{Days, NaiveDate};
use health_hub::core::calendar::{CalendarWindow, CycleCalendar, ExportFormat};
use health_hub::core::tracker::TrackerInputs;
use health_hub::core::Storage;
use health_hub::{classify, CycleParameters, CycleProjector, LocalStorage};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn plus(d: NaiveDate, days: u64) -> NaiveDate {
    d.checked_add_days(Days::new(days)).unwrap()
}

#[test]
fn test_intervals_and_gaps_for_common_parameters() {
    let start = date(2024, 12, 20);
    for (period, cycle) in [(1, 18), (3, 21), (5, 28), (7, 35), (10, 40)] {
        let params = CycleParameters::new(start, period, cycle);
        let projector = CycleProjector::new(params);

        for k in 0..4u64 {
            let first = plus(start, k * u64::from(cycle));
            let last = plus(first, u64::from(period));
            let pre_roll = first.pred_opt().unwrap();

            let mut day = pre_roll;
            while day <= last {
                let c = projector.classify(day);
                assert!(c.is_menstrual, "{} should be menstrual for P={} C={}", day, period, cycle);
                assert_eq!(c.is_highlighted, day < last, "highlight mismatch on {}", day);
                assert_eq!(c, classify(day, &params));
                day = day.succ_opt().unwrap();
            }

            if k < 3 {
                let next_pre_roll = plus(start, (k + 1) * u64::from(cycle)).pred_opt().unwrap();
                let mut gap = last.succ_opt().unwrap();
                while gap < next_pre_roll {
                    let c = projector.classify(gap);
                    assert!(!c.is_menstrual && !c.is_highlighted, "{} should be clear", gap);
                    gap = gap.succ_opt().unwrap();
                }
            }
        }

        let outside = start.checked_sub_days(Days::new(2)).unwrap();
        assert_eq!(projector.classify(outside), Default::default());
    }
}

#[test]
fn test_tracker_defaults_feed_projector() {
    let today = date(2025, 1, 1);
    let params = TrackerInputs::new(today).to_params();
    let projector = CycleProjector::new(params);

    assert_eq!(projector.intervals().len(), 4);
    assert!(projector.classify(date(2025, 1, 6)).is_menstrual);
    assert!(!projector.classify(date(2025, 1, 7)).is_menstrual);
    assert!(projector.classify(date(2025, 1, 29)).is_menstrual);
    assert!(projector.classify(date(2025, 2, 26)).is_menstrual);
    assert!(projector.classify(date(2025, 3, 26)).is_menstrual);
    assert!(!projector.classify(date(2025, 4, 23)).is_menstrual);
}

#[tokio::test]
async fn test_calendar_export_to_local_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().join("exports"));

    let today = date(2025, 1, 1);
    let projector = CycleProjector::new(CycleParameters::new(today, 5, 28));
    let calendar = CycleCalendar::new(&projector, CalendarWindow::around(today));

    let csv_name = calendar.export(&storage, ExportFormat::Csv).await?;
    assert!(storage.exists(&csv_name).await);
    let csv = String::from_utf8(storage.read_file(&csv_name).await?)?;
    assert!(csv.lines().any(|l| l.starts_with("2025-01-05,true,true")));
    assert!(csv.lines().any(|l| l.starts_with("2025-01-06,true,false")));
    assert!(csv.lines().any(|l| l.starts_with("2025-01-07,false,false")));

    let json_name = calendar.export(&storage, ExportFormat::Json).await?;
    let days: serde_json::Value = serde_json::from_slice(&storage.read_file(&json_name).await?)?;
    let days = days.as_array().expect("json export is an array");
    assert_eq!(days.len(), calendar.days().len());

    let text_name = calendar.export(&storage, ExportFormat::Text).await?;
    let text = String::from_utf8(storage.read_file(&text_name).await?)?;
    assert!(text.contains("January 2025"));
    assert!(text.contains("April 2025"));

    Ok(())
}
