use core::mem::{align_of, offset_of, size_of};
use core::ptr;

use crate::Ntbs;

/// A type admitted as a null-terminated byte string argument.
///
/// `SIZE` is the declared length, terminator included. When
/// `IMPLIED_NUL` is set, the terminator is only reported, not stored.
///
/// # Safety
///
/// With `DEPTH == 0`, `Self` must be exactly `SIZE - IMPLIED_NUL` bytes of
/// initialized `u8` data with alignment 1. With `DEPTH == d + 1`, `Self` must
/// be a thin pointer to a value satisfying the contract with `DEPTH == d`.
///
/// Arguments without room for a terminator are rejected at compile time:
///
/// ```compile_fail
/// use ntbs::{Ntbs, cat};
///
/// let empty: Ntbs<1> = cat(&([0u8; 0],));
/// assert_eq!(empty.len(), 1);
/// ```
///
/// So are implementations whose layout does not match `SIZE`:
///
/// ```compile_fail
/// use ntbs::{NtbsArg, data_of};
///
/// struct Wide(u16);
///
/// unsafe impl NtbsArg for Wide {
///     const SIZE: usize = 3;
/// }
///
/// let _ = data_of(&Wide(0));
/// ```
///
/// while a matching layout is fine:
///
/// ```
/// use ntbs::{NtbsArg, data_of};
///
/// struct Pair([u8; 2]);
///
/// unsafe impl NtbsArg for Pair {
///     const SIZE: usize = 2;
/// }
///
/// assert_eq!(data_of(&Pair(*b"x\0")), b"x\0");
/// ```
pub unsafe trait NtbsArg {
    const SIZE: usize;
    const IMPLIED_NUL: bool = false;
    const DEPTH: usize = 0;
}

unsafe impl<const N: usize> NtbsArg for [u8; N] {
    const SIZE: usize = N;
}

unsafe impl<const N: usize> NtbsArg for Ntbs<N> {
    const SIZE: usize = N;
}

// a lone byte is the string "byte + terminator"
unsafe impl NtbsArg for u8 {
    const SIZE: usize = 2;
    const IMPLIED_NUL: bool = true;
}

unsafe impl<T: NtbsArg> NtbsArg for &T {
    const SIZE: usize = T::SIZE;
    const IMPLIED_NUL: bool = T::IMPLIED_NUL;
    const DEPTH: usize = T::DEPTH + 1;
}

/// Number of bytes actually stored behind an argument of type `T`.
pub(crate) const fn stored<T: NtbsArg>() -> usize {
    const {
        assert!(T::SIZE >= 1, "ntbs argument has no room for a null terminator");
        assert!(
            T::SIZE >= 1 + T::IMPLIED_NUL as usize,
            "ntbs argument with an implied terminator must hold a byte"
        );

        let stored = T::SIZE - T::IMPLIED_NUL as usize;

        if T::DEPTH == 0 {
            assert!(
                size_of::<T>() == stored && align_of::<T>() == 1,
                "ntbs argument layout does not match its declared length"
            );
        }

        stored
    }
}

/// Follow `depth` levels of stored pointers.
///
/// # Safety
///
/// `ptr` must satisfy the `NtbsArg` layout contract for an argument of the
/// given depth.
pub(crate) const unsafe fn resolve(mut ptr: *const u8, depth: usize) -> *const u8 {
    let mut level = 0;

    while level < depth {
        ptr = unsafe { ptr.cast::<*const u8>().read() };
        level += 1;
    }

    ptr
}

/// Declared length of `x`, terminator included.
pub const fn length_of<T: NtbsArg>(_: &T) -> usize {
    T::SIZE
}

/// The bytes stored for `x`.
///
/// For a lone `u8` this is the single byte; its terminator is implied, not
/// stored, so the slice is one byte shorter than [`length_of`].
pub const fn data_of<T: NtbsArg>(x: &T) -> &[u8] {
    let len = stored::<T>();

    unsafe {
        let data = resolve(ptr::from_ref(x).cast(), T::DEPTH);
        core::slice::from_raw_parts(data, len)
    }
}

/// One element of an argument list, located by its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    offset: usize,
    size: usize,
    implied_nul: bool,
    depth: usize,
}

impl Part {
    pub const fn of<T: NtbsArg>(offset: usize) -> Self {
        let _ = stored::<T>();

        Self {
            offset,
            size: T::SIZE,
            implied_nul: T::IMPLIED_NUL,
            depth: T::DEPTH,
        }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn implied_nul(&self) -> bool {
        self.implied_nul
    }

    /// # Safety
    ///
    /// `base` must point at the start of the argument list this part was
    /// built for, and that list must outlive `'a`.
    pub(crate) const unsafe fn bytes<'a>(&self, base: *const u8) -> &'a [u8] {
        let len = self.size - self.implied_nul as usize;

        unsafe {
            let data = resolve(base.add(self.offset), self.depth);
            core::slice::from_raw_parts(data, len)
        }
    }
}

/// A variadic list of [`NtbsArg`]s.
///
/// # Safety
///
/// Every entry of `PARTS` must describe an `NtbsArg` value stored at its
/// offset within `Self`, in argument order.
pub unsafe trait NtbsArgs {
    const PARTS: &'static [Part];
}

macro_rules! args {
    ($($idx:tt $arg:ident),*) => {
        unsafe impl<$($arg: NtbsArg),*> NtbsArgs for ($($arg,)*) {
            const PARTS: &'static [Part] = &[
                $(Part::of::<$arg>(offset_of!(Self, $idx))),*
            ];
        }
    };
}

args!();
args!(0 A);
args!(0 A, 1 B);
args!(0 A, 1 B, 2 C);
args!(0 A, 1 B, 2 C, 3 D);
args!(0 A, 1 B, 2 C, 3 D, 4 E);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);
