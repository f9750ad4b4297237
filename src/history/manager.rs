use log::debug;
use std::time::{Duration, Instant};

pub const DEFAULT_CAPACITY: usize = 50;
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

/// Linear snapshot history with a position pointer.
///
/// The stack is never empty once constructed and `pointer` always indexes a
/// live entry. After an undo or redo, records are suppressed until the settle
/// window has elapsed (or [`end_replay`](Self::end_replay) is called), so the
/// restore itself is never recorded as a forward action.
pub struct HistoryManager<S: Clone> {
    stack: Vec<S>,
    pointer: usize,
    pub max_steps: usize,
    pub settle: Duration,
    replay_until: Option<Instant>,
}

impl<S: Clone> HistoryManager<S> {
    pub fn new(initial: S, max_steps: usize) -> Self {
        Self {
            stack: vec![initial],
            pointer: 0,
            max_steps: max_steps.max(1),
            settle: DEFAULT_SETTLE,
            replay_until: None,
        }
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn current(&self) -> &S {
        &self.stack[self.pointer]
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.stack.len()
    }

    pub fn is_replaying(&self, now: Instant) -> bool {
        matches!(self.replay_until, Some(until) if now < until)
    }

    /// Clears the suppress window early.
    pub fn end_replay(&mut self) {
        self.replay_until = None;
    }

    /// Drops every entry and starts over from `initial`.
    pub fn reset(&mut self, initial: S) {
        self.stack.clear();
        self.stack.push(initial);
        self.pointer = 0;
        self.replay_until = None;
    }

    pub fn record(&mut self, state: &S) -> bool {
        self.record_at(state, Instant::now())
    }

    /// Pushes a copy of `state` after the pointer, discarding any redo
    /// future. Returns `false` when suppressed by a replay window.
    pub fn record_at(&mut self, state: &S, now: Instant) -> bool {
        if self.is_replaying(now) {
            debug!("history record suppressed during replay");
            return false;
        }
        self.replay_until = None;
        self.stack.truncate(self.pointer + 1);
        self.stack.push(state.clone());
        if self.stack.len() > self.max_steps {
            let evicted = self.stack.len() - self.max_steps;
            self.stack.drain(..evicted);
            debug!("history evicted {} oldest snapshot(s)", evicted);
        }
        self.pointer = self.stack.len() - 1;
        debug!("history recorded, {} of {}", self.pointer + 1, self.stack.len());
        true
    }

    pub fn undo(&mut self) -> Option<S> {
        self.undo_at(Instant::now())
    }

    /// Steps back and returns a copy of the entry to restore.
    pub fn undo_at(&mut self, now: Instant) -> Option<S> {
        if !self.can_undo() {
            return None;
        }
        self.pointer -= 1;
        self.replay_until = Some(now + self.settle);
        debug!("history undo to {}", self.pointer);
        Some(self.stack[self.pointer].clone())
    }

    pub fn redo(&mut self) -> Option<S> {
        self.redo_at(Instant::now())
    }

    pub fn redo_at(&mut self, now: Instant) -> Option<S> {
        if !self.can_redo() {
            return None;
        }
        self.pointer += 1;
        self.replay_until = Some(now + self.settle);
        debug!("history redo to {}", self.pointer);
        Some(self.stack[self.pointer].clone())
    }
}

#[cfg(test)]
mod tests;
