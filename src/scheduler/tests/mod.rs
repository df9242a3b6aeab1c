
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::models::{Item, Section};
use crate::core::template::GridTemplate;
use crate::core::types::Weekday;
use crate::logging::Logger;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(super) fn temp_path(stem: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("coursefit-scheduler-{stem}-{nanos}-{uniq}"))
}

const ALL_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Three labels with the same time on every weekday.
pub(super) fn flat_template() -> GridTemplate {
    GridTemplate::new()
        .with_period_on(&ALL_DAYS, "P1", "8:00", "9:00")
        .unwrap()
        .with_period_on(&ALL_DAYS, "P2", "9:00", "10:00")
        .unwrap()
        .with_period_on(&ALL_DAYS, "P3", "10:00", "11:00")
        .unwrap()
}

/// Standard periods on Mon/Tue/Fri, block periods on Wed/Thu.
pub(super) fn school_template() -> GridTemplate {
    GridTemplate::new()
        .with_period_on(&Weekday::STANDARD, "1st", "7:40 AM", "8:30 AM")
        .unwrap()
        .with_period_on(&Weekday::STANDARD, "2nd", "8:36 AM", "9:26 AM")
        .unwrap()
        .with_period(Weekday::Wed, "1st Block", "7:40 AM", "9:13 AM")
        .unwrap()
        .with_period(Weekday::Thu, "4th Block", "7:40 AM", "9:13 AM")
        .unwrap()
}

pub(super) fn section(days: &[Weekday], start: &str, end: &str) -> Section {
    Section::new(days.to_vec(), start, end)
}

pub(super) fn recurring(name: &str, periods: &[&str], importance: f64) -> Item {
    Item::recurring(name, periods.iter().copied()).with_importance(importance)
}

fn write_config(path: &PathBuf) {
    let json = r#"
    {
      "grid_template": {
        "value": {
          "MON": { "P1": { "start": "8:00", "end": "9:00" } },
          "TUE": { "P1": { "start": "8:00", "end": "9:00" } },
          "WED": { "P1": { "start": "8:00", "end": "9:00" } },
          "THU": { "P1": { "start": "8:00", "end": "9:00" } },
          "FRI": { "P1": { "start": "8:00", "end": "9:00" } }
        },
        "description": "bell schedule"
      },
      "default_importance": { "value": 0.25, "description": "fallback weight" },
      "file_logging_enabled": { "value": "True", "description": "file logging" }
    }
    "#;
    fs::write(path, json).unwrap();
}

pub(super) fn make_ctx() -> AppContext {
    let path = temp_path("config");
    write_config(&path);
    let config = Config::load_from(&path).unwrap();
    let logger = Logger::new();
    let logs_dir = temp_path("logs");
    logger.set_log_dir(&logs_dir);
    logger.set_file_logging_enabled(config.file_logging_enabled());
    AppContext {
        config,
        logger,
        logs_dir,
    }
}
