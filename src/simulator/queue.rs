use std::collections::VecDeque;

/// FIFO of indices into a [`WorkingSet`](super::WorkingSet).
#[derive(Debug, Default, Clone)]
pub struct ReadyQueue {
    slots: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, index: usize) {
        self.slots.push_back(index);
    }

    /// Removes the head of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Callers check [`ReadyQueue::is_empty`]
    /// first, so an underflow means the scheduling loop is broken.
    pub fn pop(&mut self) -> usize {
        match self.slots.pop_front() {
            Some(index) => index,
            None => panic!("ready queue underflow"),
        }
    }

    pub fn try_pop(&mut self) -> Option<usize> {
        self.slots.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
