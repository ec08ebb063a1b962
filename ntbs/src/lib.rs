//! Concatenation and slicing of constant null-terminated byte strings.
//!
//! An [`Ntbs<N>`] is a byte array of static size `N` whose last byte is the
//! expected terminator. Embedded zero bytes may be present. Sizes live in
//! the types, so `cat` and `cut` never allocate and never return a length
//! beside their result.
//!
//! ```
//! use ntbs::{Ntbs, cat, cut};
//!
//! const HELLO_WORLD: Ntbs<14> = cat!(cat!([b',', b' ']; b"Hello\0", b"world\0"), b'!');
//! const HELLO_COMMA: Ntbs<7> = cut!(HELLO_WORLD, 0, 6);
//! const WORLD_EXCLAIM: Ntbs<7> = cut!(HELLO_WORLD, -7); // == cut!(HELLO_WORLD, -7, -1)
//!
//! assert_eq!(cat!([b' ']; HELLO_COMMA, WORLD_EXCLAIM), HELLO_WORLD);
//! ```
//!
//! Arguments are anything implementing [`NtbsArg`]: byte arrays (and
//! references to them, so `b"Hello\0"` works as is), `Ntbs<N>` itself, and a
//! lone `u8`, which counts as a two byte string with an implied terminator.
//!
//! The macros work out result lengths for constant arguments. The functions
//! take the result length as a const parameter, which is checked at compile
//! time:
//!
//! ```
//! use ntbs::{Ntbs, join};
//!
//! fn greet(name: [u8; 6]) -> Ntbs<13> {
//!     join(b", \0", &(b"Hello\0", name))
//! }
//!
//! assert_eq!(greet(*b"world\0"), *b"Hello, world\0");
//! ```
//!
//! With [`NULL_CHECK`] on (debug builds, or the `null-check` feature), every
//! argument's last declared byte is verified before anything is copied.

#[macro_use]
mod macros;

mod array;
mod bytes;
mod cat;
mod cmp;
mod cut;
mod error;
mod guard;

pub use array::Ntbs;
pub use bytes::{NtbsArg, NtbsArgs, Part, data_of, length_of};
pub use cat::{cat, cat_len, join, join_len, try_cat, try_join};
pub use cmp::{cmp, try_cmp};
pub use cut::{bounds, cut, cut_len, normalize, try_cut};
pub use error::{NtbsError, Op};
pub use guard::NULL_CHECK;
