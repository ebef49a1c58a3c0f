use log::info;
use serde::Serialize;

use crate::config::DemoConfig;
use crate::error::BufferError;
use crate::models::record::Record;
use crate::util::ring_buffer::RingBuffer;

/// Everything a demo run drained, in order.
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    pub capacity: usize,
    /// Emit on the freshly built buffer.
    pub empty: Vec<Record>,
    /// One entry per drain after inserting.
    pub drains: Vec<Vec<Record>>,
}

/// Build a buffer, drain it once while empty, then feed it `cfg.records`
/// records and drain every `cfg.drain_every` inserts (and once at the end).
pub fn run(cfg: &DemoConfig, capacity: i64) -> Result<Run, BufferError> {
    let mut buf = RingBuffer::from_signed(capacity)?;
    let empty = buf.emit();

    let mut drains = Vec::new();
    for i in 0..cfg.records {
        buf.insert(Record::new(nth_value(cfg.start, i)));
        if cfg.drain_every > 0 && (i + 1) % cfg.drain_every == 0 {
            drains.push(buf.emit());
        }
    }
    if cfg.drain_every == 0 || cfg.records == 0 || cfg.records % cfg.drain_every != 0 {
        drains.push(buf.emit());
    }

    info!("demo run: {} insert(s), {} drain(s), capacity {}", cfg.records, drains.len(), buf.capacity());
    Ok(Run { capacity: buf.capacity(), empty, drains })
}

/// `start` advanced by `i`, wrapping within its letter or digit range.
fn nth_value(start: char, i: usize) -> String {
    let wrap = |base: u8, span: usize| {
        let off = (start as u8 - base) as usize;
        char::from(base + ((off + i) % span) as u8)
    };
    let c = if start.is_ascii_lowercase() {
        wrap(b'a', 26)
    } else if start.is_ascii_uppercase() {
        wrap(b'A', 26)
    } else if start.is_ascii_digit() {
        wrap(b'0', 10)
    } else {
        u32::try_from(i)
            .ok()
            .and_then(|n| char::from_u32(start as u32 + n))
            .unwrap_or(start)
    };
    c.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn test_default_run_keeps_last_five() {
        let run = run(&DemoConfig::default(), 5).unwrap();
        assert!(run.empty.is_empty());
        assert_eq!(run.drains.len(), 1);
        assert_eq!(values(&run.drains[0]), vec!["f", "g", "h", "i", "j"]);
    }

    #[test]
    fn test_periodic_drains() {
        let cfg = DemoConfig { records: 7, start: 'a', drain_every: 3 };
        let run = run(&cfg, 5).unwrap();
        let got: Vec<Vec<&str>> = run.drains.iter().map(|d| values(d)).collect();
        assert_eq!(got, vec![vec!["a", "b", "c"], vec!["d", "e", "f"], vec!["g"]]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_drain() {
        let cfg = DemoConfig { records: 4, start: 'a', drain_every: 2 };
        assert_eq!(run(&cfg, 5).unwrap().drains.len(), 2);
    }

    #[test]
    fn test_zero_records_still_drains_once() {
        for drain_every in [0, 3] {
            let cfg = DemoConfig { records: 0, start: 'a', drain_every };
            let run = run(&cfg, 5).unwrap();
            assert_eq!(run.drains.len(), 1, "drain_every = {}", drain_every);
            assert!(run.drains[0].is_empty());
        }
    }

    #[test]
    fn test_invalid_capacity() {
        assert_eq!(run(&DemoConfig::default(), 0).unwrap_err(), BufferError::InvalidCapacity(0));
        assert_eq!(run(&DemoConfig::default(), -1).unwrap_err(), BufferError::InvalidCapacity(-1));
    }

    #[test]
    fn test_nth_value_wraps() {
        assert_eq!(nth_value('y', 2), "a");
        assert_eq!(nth_value('X', 3), "A");
        assert_eq!(nth_value('8', 3), "1");
        assert_eq!(nth_value('!', 1), "\"");
    }
}
