//! Lossy, latest-wins ring buffer for time-stamped string records.
//!
//! A producer calls [`RingBuffer::insert`] continuously; a consumer calls
//! [`RingBuffer::emit`] to drain whatever has accumulated, oldest first.
//! Once the buffer is full each insert silently drops the oldest unread
//! record.

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod models;
pub mod util;

pub use error::BufferError;
pub use models::record::Record;
pub use util::ring_buffer::RingBuffer;
