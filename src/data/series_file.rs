use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::Observation;

/// Reads a JSON array of `{ "timestamp": <ms>, "value": <f64> }` records.
/// The result is sorted by timestamp; records sharing a timestamp keep file order.
pub fn load_series(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path).context(format!("Failed to open series file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut series: Vec<Observation> = serde_json::from_reader(reader)
        .context(format!("Failed to parse series file: {}", path.display()))?;

    if !series.is_sorted_by_key(|obs| obs.timestamp) {
        log::warn!("{} is not in time order; sorting {} observations", path.display(), series.len());
        series.sort_by_key(|obs| obs.timestamp);
    }
    Ok(series)
}

/// Serializes `value` as JSON to `writer`, followed by a newline
pub fn write_json<T: Serialize, W: Write>(value: &T, writer: W, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value).context("Failed to serialize output")?;
    } else {
        serde_json::to_writer(&mut writer, value).context("Failed to serialize output")?;
    }
    writeln!(writer).context("Failed to write output")?;
    writer.flush().context("Failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("power_law_metrics_{}_{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_sorts_by_timestamp() {
        let path = temp_file(
            "unsorted",
            r#"[{"timestamp": 200, "value": 2.0}, {"timestamp": 100, "value": 1.0}]"#,
        );
        let series = load_series(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(series, vec![Observation::new(100, 1.0), Observation::new(200, 2.0)]);
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let path = temp_file("broken", "[{\"timestamp\": 1}");
        let err = load_series(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(format!("{err:#}").contains("Failed to parse series file"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_series(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open series file"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&Observation::new(1, 2.5), &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"timestamp\":1,\"value\":2.5}\n");
    }
}
