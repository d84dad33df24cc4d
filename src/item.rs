//! Items delivered by a scan.

use std::borrow::Cow;

/// A tagged piece of scanned text.
///
/// The tag is whatever enumerable type the grammar classifies its tokens
/// with; the text is the exact input substring between the cursor's `start`
/// and `pos` at emission time. Diagnostics synthesized via
/// [`Cursor::emit_error()`](crate::Cursor::emit_error) carry owned text
/// instead of a slice of the input; both forms compare equal by content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<'a, T> {
    /// The grammar's classification of this item.
    pub tag: T,
    /// The item's text, borrowed from the input or owned (diagnostics).
    pub text: Cow<'a, str>,
}

impl<'a, T> Item<'a, T> {
    /// Build an item from a tag and text.
    pub fn new(tag: T, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    /// Detach the item from the input it was scanned from.
    ///
    /// Used when items outlive the scan's input, e.g. when crossing the
    /// thread boundary in [`spawn()`](crate::spawn()) mode.
    pub fn into_owned(self) -> Item<'static, T> {
        Item {
            tag: self.tag,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}
