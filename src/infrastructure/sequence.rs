// src/infrastructure/sequence.rs
use crate::application::ports::sequence::SequenceGenerator;
use crate::domain::article::ArticleId;
use std::sync::atomic::{AtomicU64, Ordering};

static PROCESS_SEQUENCE: AtomicSequence = AtomicSequence::new();

/// Lock-free monotonically increasing id source.
#[derive(Debug, Default)]
pub struct AtomicSequence {
    next: AtomicU64,
}

impl AtomicSequence {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Id that the next call to `next_id` will hand out.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl SequenceGenerator for AtomicSequence {
    fn next_id(&self) -> ArticleId {
        ArticleId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle on the process-wide sequence shared by every article built through
/// `Article::new`. There is no way to reset it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSequence;

impl ProcessSequence {
    pub fn peek(&self) -> u64 {
        PROCESS_SEQUENCE.peek()
    }
}

impl SequenceGenerator for ProcessSequence {
    fn next_id(&self) -> ArticleId {
        PROCESS_SEQUENCE.next_id()
    }
}
