use core::cmp::Ordering;

use crate::bytes::{NtbsArg, data_of};
use crate::error::{NtbsError, Op};
use crate::guard;

/// C string comparison: lexicographic up to the first zero byte.
///
/// Unlike `==`, declared lengths do not matter, so `b"a\0\0"` and `b"a\0"`
/// compare equal here.
///
/// Panics if the guard is enabled and either side is not null-terminated.
pub const fn cmp<L: NtbsArg, R: NtbsArg>(lhs: &L, rhs: &R) -> Ordering {
    match try_cmp(lhs, rhs) {
        Ok(ord) => ord,
        Err(err) => err.fail(),
    }
}

pub const fn try_cmp<L: NtbsArg, R: NtbsArg>(lhs: &L, rhs: &R) -> Result<Ordering, NtbsError> {
    let l = data_of(lhs);
    let r = data_of(rhs);

    tri!(guard::check(l, L::SIZE, L::IMPLIED_NUL, Op::Cmp, 0));
    tri!(guard::check(r, R::SIZE, R::IMPLIED_NUL, Op::Cmp, 1));

    let mut i = 0;

    loop {
        // the end of the stored bytes reads as a terminator
        let a = if i < l.len() { l[i] } else { 0 };
        let b = if i < r.len() { r[i] } else { 0 };

        if a != b {
            return Ok(if a < b { Ordering::Less } else { Ordering::Greater });
        }

        if a == 0 {
            return Ok(Ordering::Equal);
        }

        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ntbs;

    const fn is(ord: Ordering, expected: Ordering) -> bool {
        ord as i8 == expected as i8
    }

    const _: () = assert!(is(cmp(b"\0", b"\0"), Ordering::Equal));
    const _: () = assert!(is(cmp(b"\0", b"a\0"), Ordering::Less));
    const _: () = assert!(is(cmp(b"a\0", b"a\0"), Ordering::Equal));
    const _: () = assert!(is(cmp(b"a\0", b"aa\0"), Ordering::Less));
    const _: () = assert!(is(cmp(b"aa\0", b"a\0"), Ordering::Greater));
    const _: () = assert!(is(cmp(b"a\0\0", b"a\0"), Ordering::Equal));

    #[test]
    fn scalar_and_sequence() {
        assert_eq!(cmp(&b'a', b"a\0"), Ordering::Equal);
        assert_eq!(cmp(&b'b', &Ntbs::from_array(*b"a\0")), Ordering::Greater);
        assert_eq!(cmp(b"ab\0cd\0", b"ab\0"), Ordering::Equal);
    }

    #[test]
    fn overwritten_terminator() {
        let mut mutable = Ntbs::from_array(*b"Hello\0");
        mutable[5] = b'!';

        let res = try_cmp(&mutable, &mutable);
        if guard::NULL_CHECK {
            assert_eq!(res, Err(NtbsError::NotTerminated { op: Op::Cmp, arg: 0 }));
        } else {
            assert_eq!(res, Ok(Ordering::Equal));
        }
    }
}
