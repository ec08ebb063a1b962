use crate::array::copy_n;
use crate::bytes::{NtbsArg, data_of};
use crate::error::{NtbsError, Op};
use crate::{Ntbs, guard};

/// End-relative index translation: negative `i` counts back from `n`.
pub const fn normalize(i: isize, n: usize) -> isize {
    if i < 0 { n as isize + i } else { i }
}

/// Normalized `[begin, end)` of a slice of an argument of length `n`.
///
/// Out-of-range bounds are a precondition violation, not clamped.
pub const fn bounds(b: isize, e: isize, n: usize) -> (usize, usize) {
    const fn out_of_bounds() -> ! {
        panic!("ntbs::cut index out of bounds")
    }

    let (b, e) = (normalize(b, n), normalize(e, n));

    if !(0 <= b && b <= e && e <= n as isize) {
        out_of_bounds()
    }

    (b as usize, e as usize)
}

/// Declared length of `cut::<B, E, _, A>` for an argument of length `n`.
pub const fn cut_len(b: isize, e: isize, n: usize) -> usize {
    let (b, e) = bounds(b, e, n);
    e - b + 1
}

/// Slice `[B, E)` of `a` into a fresh, re-terminated [`Ntbs<M>`].
///
/// Bounds are Python-style and resolved at compile time, as is `M`, which
/// must equal [`cut_len`]`(B, E, length_of(a))`:
///
/// ```
/// use ntbs::{Ntbs, cut};
///
/// let hello = *b"Hello, world!\0";
/// let comma: Ntbs<7> = cut::<0, 6, 7, _>(&hello);
/// assert_eq!(comma, *b"Hello,\0");
/// ```
///
/// A wrong `M` is rejected by the compiler:
///
/// ```compile_fail
/// use ntbs::{Ntbs, cut};
///
/// let hello = *b"Hello\0";
/// let _: Ntbs<3> = cut::<0, 3, 3, _>(&hello);
/// ```
///
/// Panics if the guard is enabled and `a` is not null-terminated. In a
/// constant that panic is a compile error:
///
#[cfg_attr(feature = "null-check", doc = "```compile_fail")]
#[cfg_attr(not(feature = "null-check"), doc = "```ignore")]
/// use ntbs::{Ntbs, cut};
///
/// const THROW: Ntbs<5> = cut::<0, -1, 5, _>(b"throw");
/// assert_eq!(THROW.len(), 5);
/// ```
pub const fn cut<const B: isize, const E: isize, const M: usize, A: NtbsArg>(a: &A) -> Ntbs<M> {
    match try_cut::<B, E, M, A>(a) {
        Ok(out) => out,
        Err(err) => err.fail(),
    }
}

/// [`cut`], reporting an unterminated argument as an error.
pub const fn try_cut<const B: isize, const E: isize, const M: usize, A: NtbsArg>(
    a: &A,
) -> Result<Ntbs<M>, NtbsError> {
    let (begin, end) = const {
        let range = bounds(B, E, A::SIZE);
        assert!(
            M == range.1 - range.0 + 1,
            "ntbs::cut result length does not match the slice bounds"
        );
        range
    };

    let src = data_of(a);
    tri!(guard::check(src, A::SIZE, A::IMPLIED_NUL, Op::Cut, 0));

    let mut out = Ntbs::<M>::zeroed();
    // an implied terminator is not stored; it stays zero in `out`
    let stop = if end < src.len() { end } else { src.len() };

    if begin < stop {
        unsafe { copy_n(src.as_ptr().add(begin), stop - begin, out.as_mut_array().as_mut_ptr()) };
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [u8; 1] = *b"\0";
    const C: Ntbs<2> = Ntbs::from_array(*b"c\0");
    const HELLO: [u8; 6] = *b"hello\0";

    const CUL: Ntbs<1> = cut::<0, -1, 1, _>(&EMPTY);
    const _: () = assert!(CUL.equals(&cut::<0, -1, 1, _>(&EMPTY)));
    const _: () = assert!(CUL.equals(&cut::<-1, -1, 1, _>(&EMPTY)));
    const _: () = assert!(CUL.equals(&cut::<0, 0, 1, _>(&EMPTY)));
    const _: () = assert!(CUL.equals(&cut::<-1, 0, 1, _>(&EMPTY)));
    const _: () = assert!(CUL.equals(b"\0"));

    const _: () = assert!(cut::<0, -1, 2, _>(&C).equals(b"c\0"));
    const _: () = assert!(cut::<-2, -1, 2, _>(&C).equals(b"c\0"));
    const _: () = assert!(cut::<0, -1, 6, _>(&HELLO).equals(&HELLO));

    #[test]
    fn normalize_counts_from_end() {
        assert_eq!(normalize(3, 10), 3);
        assert_eq!(normalize(-1, 10), 9);
        assert_eq!(normalize(-10, 10), 0);
        assert_eq!(bounds(-7, -1, 14), (7, 13));
        assert_eq!(cut_len(0, -1, 1), 1);
        assert_eq!(cut_len(2, 2, 6), 1);
    }

    #[test]
    #[should_panic(expected = "ntbs::cut index out of bounds")]
    fn bounds_reject_reversed_range() {
        bounds(3, 2, 6);
    }

    #[test]
    #[should_panic(expected = "ntbs::cut index out of bounds")]
    fn bounds_reject_before_start() {
        bounds(-7, -1, 6);
    }

    #[test]
    fn hello_world_slices() {
        let hello_world = *b"Hello, world!\0";

        assert_eq!(cut::<0, 6, 7, _>(&hello_world), *b"Hello,\0");
        assert_eq!(cut::<-7, -1, 7, _>(&hello_world), *b"world!\0");
        assert_eq!(cut::<3, 3, 1, _>(&hello_world), *b"\0");
    }

    #[test]
    fn slice_through_terminator() {
        // [1, N) keeps the source terminator as content
        let out = cut::<1, 3, 3, _>(b"ab\0");
        assert_eq!(out, *b"b\0\0");
        assert!(out.is_terminated());
    }

    #[test]
    fn scalar_byte() {
        assert_eq!(cut::<0, -1, 2, _>(&b'c'), *b"c\0");
        assert_eq!(cut::<0, 2, 3, _>(&b'c'), *b"c\0\0");
        assert_eq!(cut::<1, 2, 2, _>(&b'c'), *b"\0\0");
    }

    #[test]
    fn unterminated_argument() {
        let throw = *b"throw";
        let res = try_cut::<0, -1, 5, _>(&throw);

        if guard::NULL_CHECK {
            assert_eq!(res, Err(NtbsError::NotTerminated { op: Op::Cut, arg: 0 }));
            assert!(std::panic::catch_unwind(|| cut::<0, -1, 5, _>(&throw)).is_err());
        } else {
            assert_eq!(res, Ok(Ntbs::from_array(*b"thro\0")));
        }
    }

    #[test]
    fn result_is_independent() {
        let mut src = Ntbs::from_array(*b"abc\0");
        let out = cut::<0, -1, 4, _>(&src);

        src[0] = b'z';
        assert_eq!(out, *b"abc\0");
    }
}
