use chrono::{DateTime, Local};
use log::{debug, trace};

use crate::error::BufferError;
use crate::models::record::Record;

/// Fixed-capacity ring buffer of records. When full, the oldest unread
/// record is overwritten by the newest one.
///
/// Single producer, single consumer, no internal locking. Callers that share
/// a buffer across threads wrap it themselves.
#[derive(Debug)]
pub struct RingBuffer {
    slots: Vec<Option<Record>>,
    /// Most recently written slot. `None` until the first insert.
    write: Option<usize>,
    /// Next slot to drain.
    read: usize,
    last_emit: Option<DateTime<Local>>,
}

impl RingBuffer {
    pub fn new(cap: usize) -> Result<Self, BufferError> {
        if cap == 0 {
            return Err(BufferError::InvalidCapacity(0));
        }
        let mut slots: Vec<Option<Record>> = Vec::new();
        slots
            .try_reserve_exact(cap)
            .map_err(|_| BufferError::CapacityTooLarge(cap))?;
        slots.resize_with(cap, || None);
        debug!("ring buffer created with {} slots", cap);
        Ok(Self { slots, write: None, read: 0, last_emit: None })
    }

    /// Build from a signed capacity (TOML integers, CLI args).
    pub fn from_signed(cap: i64) -> Result<Self, BufferError> {
        match usize::try_from(cap) {
            Ok(c) if c > 0 => Self::new(c),
            _ => Err(BufferError::InvalidCapacity(cap)),
        }
    }

    pub fn insert(&mut self, record: Record) {
        let cap = self.slots.len();
        let idx = match self.write {
            Some(w) => (w + 1) % cap,
            None    => 0,
        };
        self.write = Some(idx);

        if self.read == idx {
            self.read = (self.read + 1) % cap;
        }
        if let Some(evicted) = self.slots[idx].replace(record) {
            trace!("slot {} overwritten, dropped {:?}", idx, evicted.value);
        }
    }

    /// Insert records one at a time. The read cursor is corrected for every
    /// slot a batch clobbers, so after any batch it still points at the
    /// oldest surviving record.
    pub fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for r in records {
            self.insert(r);
        }
    }

    /// Drains every held record, oldest first, leaving the buffer empty.
    pub fn emit(&mut self) -> Vec<Record> {
        self.last_emit = Some(Local::now());
        let write = match self.write {
            Some(w) => w,
            None    => return Vec::new(),
        };

        let cap = self.slots.len();
        let mut out = Vec::new();
        loop {
            if let Some(r) = self.slots[self.read].take() {
                out.push(r);
            }
            if self.read == write {
                break;
            }
            self.read = (self.read + 1) % cap;
        }
        debug!("emitted {} record(s)", out.len());
        out
    }

    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Number of slots currently holding a record.
    pub fn len(&self) -> usize { self.slots.iter().filter(|s| s.is_some()).count() }
    pub fn is_empty(&self) -> bool { self.slots.iter().all(Option::is_none) }

    /// Wall-clock time of the most recent `emit`, if any.
    pub fn last_emit(&self) -> Option<DateTime<Local>> { self.last_emit }
}

impl Extend<Record> for RingBuffer {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        RingBuffer::extend(self, iter)
    }
}

impl TryFrom<i64> for RingBuffer {
    type Error = BufferError;

    fn try_from(cap: i64) -> Result<Self, Self::Error> {
        Self::from_signed(cap)
    }
}
