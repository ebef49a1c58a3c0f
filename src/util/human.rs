use crate::models::record::Record;

/// One record as a line: "14:03:27.512  a"
pub fn fmt_record(r: &Record) -> String {
    format!("{}  {}", r.stamp.format("%H:%M:%S%.3f"), r.value)
}

/// A titled block of drained records, one per line.
pub fn fmt_drain(label: &str, records: &[Record]) -> String {
    let mut out = format!("{} ({} record{})\n", label, records.len(), if records.len() == 1 { "" } else { "s" });
    if records.is_empty() {
        out.push_str("  (empty)\n");
    }
    for r in records {
        out.push_str("  ");
        out.push_str(&fmt_record(r));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_fmt_record() {
        let ts = Local.with_ymd_and_hms(2024, 1, 2, 14, 3, 27).unwrap();
        assert_eq!(fmt_record(&Record::with_stamp(ts, "a")), "14:03:27.000  a");
    }

    #[test]
    fn test_fmt_drain_empty() {
        assert_eq!(fmt_drain("EMPTY TEST:", &[]), "EMPTY TEST: (0 records)\n  (empty)\n");
    }

    #[test]
    fn test_fmt_drain_lists_in_order() {
        let ts = Local.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let recs = vec![Record::with_stamp(ts, "x"), Record::with_stamp(ts, "y")];
        let text = fmt_drain("DRAIN 1:", &recs);
        assert!(text.starts_with("DRAIN 1: (2 records)\n"));
        assert!(text.find("  x").unwrap() < text.find("  y").unwrap());
    }
}
