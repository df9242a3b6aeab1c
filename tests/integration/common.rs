use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_coursefit"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "coursefit-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Mon/Tue/Fri single periods, Wed/Thu block periods, one shared label set.
pub fn write_school_config(dir: &Path) {
    let cfg = r#"{
      "grid_template": {
        "value": {
          "Monday":    { "1st": { "start": "7:40 AM", "end": "8:30 AM" },
                         "2nd": { "start": "8:36 AM", "end": "9:26 AM" } },
          "Tuesday":   { "1st": { "start": "7:40 AM", "end": "8:30 AM" },
                         "2nd": { "start": "8:36 AM", "end": "9:26 AM" } },
          "Wednesday": { "1st": { "start": "7:40 AM", "end": "9:13 AM" } },
          "Thursday":  { "2nd": { "start": "7:40 AM", "end": "9:13 AM" } },
          "Friday":    { "1st": { "start": "7:40 AM", "end": "8:30 AM" },
                         "2nd": { "start": "8:36 AM", "end": "9:26 AM" } }
        },
        "description": "Weekly bell schedule"
      },
      "default_importance": { "value": 0.5, "description": "Weight for items without one" },
      "file_logging_enabled": { "value": "True", "description": "Write a session log file" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_catalog(dir: &Path, json: &str) {
    fs::write(dir.join("catalog.json"), json).unwrap();
}

pub const SAMPLE_CATALOG: &str = r#"{
  "items": [
    { "name": "Chemistry", "importance": 0.9, "kind": "recurring", "periods": ["1st"] },
    { "name": "Yearbook", "importance": 0.3, "kind": "recurring", "periods": ["1st"] },
    { "name": "Microeconomics", "kind": "sectioned",
      "sections": [
        { "days": ["Mon", "Wed"], "start": "8:00 AM", "end": "9:15 AM" },
        { "days": ["Tue", "Thu"], "start": "1:00 PM", "end": "2:15 PM" }
      ] }
  ]
}"#;

pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
