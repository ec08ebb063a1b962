use core::ptr;

use crate::array::copy_n;
use crate::bytes::{NtbsArg, NtbsArgs, Part, data_of};
use crate::error::{NtbsError, Op};
use crate::{Ntbs, guard};

const NO_SEP: [u8; 1] = [0];

const fn joined_len(parts: &[Part], sep: usize) -> usize {
    let mut len = 1;
    let mut i = 0;

    while i < parts.len() {
        if i != 0 {
            len += sep;
        }

        len += parts[i].size() - 1;
        i += 1;
    }

    len
}

/// Declared length of `cat` over `args`.
pub const fn cat_len<L: NtbsArgs>(_: &L) -> usize {
    joined_len(L::PARTS, 0)
}

/// Declared length of `join` over `args` with separator `sep`.
pub const fn join_len<S: NtbsArg, L: NtbsArgs>(_: &S, _: &L) -> usize {
    joined_len(L::PARTS, S::SIZE - 1)
}

/// Concatenate a tuple of arguments into a fresh [`Ntbs<M>`].
///
/// Each argument contributes its bytes minus its own terminator; the result
/// gets exactly one. `M` is checked against [`cat_len`] at compile time and
/// may be left to inference:
///
/// ```
/// use ntbs::{Ntbs, cat};
///
/// let a = b'a';
/// let ab: Ntbs<3> = cat(&(a, b"b\0"));
/// assert_eq!(ab, *b"ab\0");
/// ```
///
/// Panics if the guard is enabled and an argument is not null-terminated,
/// which fails compilation when evaluated in a constant:
///
#[cfg_attr(feature = "null-check", doc = "```compile_fail")]
#[cfg_attr(not(feature = "null-check"), doc = "```ignore")]
/// use ntbs::{Ntbs, cat};
///
/// const THROW: Ntbs<7> = cat(&(b"ok\0", *b"throw"));
/// assert_eq!(THROW.len(), 7);
/// ```
pub const fn cat<const M: usize, L: NtbsArgs>(args: &L) -> Ntbs<M> {
    match try_cat::<M, L>(args) {
        Ok(out) => out,
        Err(err) => err.fail(),
    }
}

/// [`cat`], reporting an unterminated argument as an error.
pub const fn try_cat<const M: usize, L: NtbsArgs>(args: &L) -> Result<Ntbs<M>, NtbsError> {
    try_join::<M, _, L>(&NO_SEP, args)
}

/// Concatenate `args`, inserting the content of `sep` between neighbours.
///
/// ```
/// use ntbs::{Ntbs, join};
///
/// let hello: Ntbs<13> = join(b", \0", &(b"Hello\0", b"world\0"));
/// assert_eq!(hello, *b"Hello, world\0");
/// ```
pub const fn join<const M: usize, S: NtbsArg, L: NtbsArgs>(sep: &S, args: &L) -> Ntbs<M> {
    match try_join::<M, S, L>(sep, args) {
        Ok(out) => out,
        Err(err) => err.fail(),
    }
}

/// [`join`], reporting an unterminated argument or separator as an error.
pub const fn try_join<const M: usize, S: NtbsArg, L: NtbsArgs>(
    sep: &S,
    args: &L,
) -> Result<Ntbs<M>, NtbsError> {
    const {
        assert!(
            M == joined_len(L::PARTS, S::SIZE - 1),
            "ntbs::cat result length does not match the arguments"
        )
    }

    let parts = L::PARTS;
    let base = ptr::from_ref(args).cast::<u8>();

    let sep = data_of(sep);
    if guard::check(sep, S::SIZE, S::IMPLIED_NUL, Op::Cat, 0).is_err() {
        return Err(NtbsError::SeparatorNotTerminated);
    }

    // every argument is checked before anything is copied
    let mut i = 0;
    while i < parts.len() {
        let part = &parts[i];
        let bytes = unsafe { part.bytes(base) };
        tri!(guard::check(bytes, part.size(), part.implied_nul(), Op::Cat, i));
        i += 1;
    }

    let mut out = Ntbs::<M>::zeroed();
    let mut dest = out.as_mut_array().as_mut_ptr();

    i = 0;
    while i < parts.len() {
        let part = &parts[i];

        unsafe {
            if i != 0 {
                dest = copy_n(sep.as_ptr(), S::SIZE - 1, dest);
            }

            dest = copy_n(part.bytes(base).as_ptr(), part.size() - 1, dest);
        }

        i += 1;
    }

    Ok(out)
}
