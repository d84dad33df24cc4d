//! Generic state-function scanning engine for hand-written lexers.
//!
//! `runelex` is the scanning half of a lexer, with the recognition half left
//! to the caller: client code supplies [`StateFn`] values that consume input
//! through the [`Cursor`] primitives and emit tagged [`Item`]s, and the
//! engine supplies the cursor, the emission path, and the driver loop. It
//! suits small textual languages — config formats, simple DSLs, line
//! protocols — where a compact state machine beats a generated parser.
//!
//! The engine builds no parse trees, resolves no ambiguity, and looks ahead
//! by at most one code point (peek/backup). Grammar definition is entirely
//! the caller's responsibility.
//!
//! # Scanning
//!
//! [`Scanner`] is a lazy iterator: each pull drives the state machine just
//! far enough to produce the next item. For a scan that runs concurrently
//! with its consumer, [`spawn()`] moves the driver loop onto its own thread
//! and delivers items over a rendezvous channel with backpressure.
//!
//! ```
//! use runelex::{Cursor, Item, Scanner, StateFn};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Tok {
//!     Word,
//! }
//!
//! fn lex_words(cur: &mut Cursor<'_, Tok>) -> Option<StateFn<Tok>> {
//!     match cur.next() {
//!         None => None,
//!         Some(' ') => {
//!             cur.ignore();
//!             Some(StateFn(lex_words))
//!         }
//!         Some(_) => {
//!             cur.accept_run(|c| c != ' ');
//!             cur.emit(Tok::Word);
//!             Some(StateFn(lex_words))
//!         }
//!     }
//! }
//!
//! let items: Vec<_> = Scanner::new("demo", "ab cd", StateFn(lex_words)).collect();
//! assert_eq!(items, vec![Item::new(Tok::Word, "ab"), Item::new(Tok::Word, "cd")]);
//! ```
//!
//! # Errors
//!
//! Invalid input is reported by the grammar itself:
//! [`Cursor::emit_error()`] queues an ordinary item carrying a formatted
//! diagnostic under whatever tag the grammar designates, and the state
//! function then decides whether to terminate or keep scanning. The engine
//! hard-codes neither policy.

pub mod char_class;
pub mod cursor;
pub mod item;
pub mod scanner;
pub mod spawn;

pub use char_class::{not_one_of, one_of};
pub use cursor::Cursor;
pub use item::Item;
pub use scanner::{Scanner, StateFn};
pub use spawn::{spawn, ScanError, ScanHandle};
