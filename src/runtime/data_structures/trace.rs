use std::collections::VecDeque;

use crate::runtime::error::TraceEntry;

/// Number of dispatches the stack trace remembers.  Older entries are dropped as new ones arrive,
/// matching the source's fixed-size ring buffer.
pub const TRACE_CAPACITY: usize = 16;

/// A fixed-capacity ring buffer of the most recently dispatched symbols, used to print a
/// stack trace when a fatal error escapes to the top level.
#[derive(Default)]
pub struct Trace
{
    entries: VecDeque<TraceEntry>,
}

impl Trace
{
    pub fn new() -> Trace
    {
        Trace { entries: VecDeque::with_capacity(TRACE_CAPACITY) }
    }

    /// Record a dispatch, evicting the oldest entry if the buffer is already full.
    pub fn push(&mut self, entry: TraceEntry)
    {
        if self.entries.len() == TRACE_CAPACITY
        {
            self.entries.pop_front();
        }

        self.entries.push_back(entry);
    }

    pub fn clear(&mut self)
    {
        self.entries.clear();
    }

    /// Entries newest-first, the order a fatal-error trace is printed in.
    pub fn newest_first(&self) -> Vec<&TraceEntry>
    {
        self.entries.iter().rev().collect()
    }
}
