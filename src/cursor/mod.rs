//! Code-point cursor carrying the primitives state functions scan with.
//!
//! The cursor tracks three pieces of position state: `start` (where the
//! pending item begins), `pos` (the current read position), and the byte
//! width of the last consumed code point. Offsets are byte indices into the
//! input that always fall on character boundaries; movement is addressed by
//! Unicode code point, so multi-byte characters advance `pos` by more than
//! one.
//!
//! Items are not handed out directly: [`emit()`](Cursor::emit) queues them
//! in emission order and the driver ([`Scanner`](crate::Scanner)) drains the
//! queue. This keeps everything a state function needs on the one handle it
//! receives.
//!
//! # Backup Contract
//!
//! [`backup()`](Cursor::backup) reverses exactly the last
//! [`next()`](Cursor::next). Calling it twice without an intervening `next`,
//! before the first `next`, or after [`emit()`](Cursor::emit) /
//! [`ignore()`](Cursor::ignore) (which would pull `pos` before `start`) is a
//! contract violation, caught by `debug_assert!` in debug builds.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::item::Item;

/// Scan state for one input: position tracking plus the emission queue.
///
/// Created internally by [`Scanner::new()`](crate::Scanner::new) — state
/// functions receive `&mut Cursor` and are the only code that moves it.
///
/// # Invariant
///
/// `start <= pos <= input.len()`, both offsets on character boundaries.
/// Every primitive below preserves this.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    /// Diagnostic name for the scan, used in reports and trace output.
    name: &'a str,
    /// The text being scanned. Read-only for the scan's lifetime.
    input: &'a str,
    /// Byte offset where the pending item starts.
    start: usize,
    /// Current read position (byte offset).
    pos: usize,
    /// UTF-8 byte width of the last consumed code point; 0 at end of input.
    width: usize,
    /// Whether a `backup()` is currently permitted.
    can_backup: bool,
    /// Items queued in emission order, drained by the driver.
    queue: VecDeque<Item<'a, T>>,
}

impl<'a, T> Cursor<'a, T> {
    /// Create a cursor at position 0 over `input`.
    pub(crate) fn new(name: &'a str, input: &'a str) -> Self {
        Self {
            name,
            input,
            start: 0,
            pos: 0,
            width: 0,
            can_backup: false,
            queue: VecDeque::new(),
        }
    }

    /// Diagnostic name this scan was constructed with.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The full input text.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset where the pending item starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current read position as a byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The input consumed since the last `emit`/`ignore` — what
    /// [`emit()`](Self::emit) would package into an item right now.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Returns `true` once the read position has passed the last code point.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume and return the next code point.
    ///
    /// At end of input returns `None` and records zero width without
    /// advancing; further calls keep returning `None`. The end sentinel is
    /// an ordinary return value — state functions must handle it explicitly
    /// rather than expect a failure.
    #[allow(
        clippy::should_implement_trait,
        reason = "consumption is coupled to backup/emit state, not iteration"
    )]
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                self.can_backup = true;
                Some(c)
            }
            None => {
                self.width = 0;
                self.can_backup = true;
                None
            }
        }
    }

    /// The code point `next()` would return, without consuming it.
    ///
    /// Repeated calls return the same value and never move the position.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Step back over the last consumed code point.
    ///
    /// # Contract
    ///
    /// Permitted exactly once per `next()` (a no-op after `next()` returned
    /// the end sentinel, which has zero width). See the module-level
    /// [backup contract](self).
    #[inline]
    pub fn backup(&mut self) {
        debug_assert!(self.can_backup, "backup without a matching next");
        self.pos -= self.width;
        self.width = 0;
        self.can_backup = false;
    }

    /// Consume the next code point if `set` matches it.
    ///
    /// Returns `true` and advances on a match; otherwise leaves the position
    /// unchanged and returns `false`. At end of input returns `false`.
    pub fn accept(&mut self, set: impl Fn(char) -> bool) -> bool {
        match self.next() {
            Some(c) if set(c) => true,
            Some(_) => {
                self.backup();
                false
            }
            None => false,
        }
    }

    /// Greedily consume a maximal run (zero or more) of code points
    /// matching `set`, leaving the position just past the run.
    pub fn accept_run(&mut self, set: impl Fn(char) -> bool) {
        while self.accept(&set) {}
    }

    /// Discard the pending input without emitting, moving `start` up to the
    /// current position. Used for insignificant input such as whitespace.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.can_backup = false;
    }

    /// Queue an item carrying the pending text under `tag`, then start the
    /// next item at the current position.
    ///
    /// Items are delivered to the consumer in emission order.
    pub fn emit(&mut self, tag: T) {
        let text = self.pending();
        self.queue.push_back(Item {
            tag,
            text: Cow::Borrowed(text),
        });
        self.start = self.pos;
        self.can_backup = false;
    }

    /// Queue an item carrying a caller-formatted diagnostic under `tag`.
    ///
    /// The item is structurally ordinary — consumers recognize failure by
    /// tag convention. Whether the grammar then terminates (return `None`)
    /// or keeps scanning is the author's choice; the engine imposes neither
    /// policy.
    pub fn emit_error(&mut self, tag: T, message: impl Into<String>) {
        self.queue.push_back(Item {
            tag,
            text: Cow::Owned(message.into()),
        });
        self.start = self.pos;
        self.can_backup = false;
    }

    /// Pop the oldest queued item, if any.
    pub(crate) fn take_item(&mut self) -> Option<Item<'a, T>> {
        self.queue.pop_front()
    }

    /// The unread remainder of the input.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests;
