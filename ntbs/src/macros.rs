// `?` is not available in a `const fn`
macro_rules! tri {
    ($value:expr) => {
        match $value {
            Ok(x) => x,
            Err(x) => return Err(x),
        }
    };
}

/// An [`Ntbs`](crate::Ntbs) holding the bytes of a constant `&str` plus a
/// terminator.
///
/// ```
/// use ntbs::{Ntbs, ntbs};
///
/// const HELLO: Ntbs<6> = ntbs!("Hello");
/// assert_eq!(HELLO, *b"Hello\0");
/// ```
#[macro_export]
macro_rules! ntbs {
    ($s:expr $(,)?) => {{
        const __NTBS_STR: &str = $s;
        const __NTBS_OUT: $crate::Ntbs<{ __NTBS_STR.len() + 1 }> =
            $crate::Ntbs::from_content(__NTBS_STR.as_bytes());
        __NTBS_OUT
    }};
}

/// Concatenate constant arguments, optionally joined by separator bytes.
///
/// The result length is computed from the argument types, so nothing needs
/// to be spelled out. Arguments must be constant expressions; for run time
/// values call [`cat`](crate::cat) or [`join`](crate::join) with the
/// length given explicitly.
///
/// ```
/// use ntbs::{Ntbs, cat};
///
/// const HELLO_WORLD: Ntbs<14> = cat!(cat!([b',', b' ']; b"Hello\0", b"world\0"), b'!');
/// assert_eq!(HELLO_WORLD, *b"Hello, world!\0");
///
/// const NOTHING: Ntbs<1> = cat!();
/// assert_eq!(NOTHING, *b"\0");
/// ```
#[macro_export]
macro_rules! cat {
    ([$($sep:expr),* $(,)?]; $($arg:expr),* $(,)?) => {{
        const __NTBS_SEP_BYTES: &[u8] = &[$($sep),*];
        const __NTBS_SEP: $crate::Ntbs<{ __NTBS_SEP_BYTES.len() + 1 }> =
            $crate::Ntbs::from_content(__NTBS_SEP_BYTES);
        const __NTBS_LEN: usize = $crate::join_len(&__NTBS_SEP, &($($arg,)*));
        const __NTBS_OUT: $crate::Ntbs<__NTBS_LEN> =
            $crate::join::<__NTBS_LEN, _, _>(&__NTBS_SEP, &($($arg,)*));
        __NTBS_OUT
    }};
    ($($arg:expr),* $(,)?) => {{
        const __NTBS_LEN: usize = $crate::cat_len(&($($arg,)*));
        const __NTBS_OUT: $crate::Ntbs<__NTBS_LEN> = $crate::cat::<__NTBS_LEN, _>(&($($arg,)*));
        __NTBS_OUT
    }};
}

/// Slice a constant argument with Python-style bounds.
///
/// `cut!(a)` is the full range, `cut!(a, B)` runs from `B` to the end and
/// `cut!(a, B, E)` is `[B, E)`. Negative bounds count from the declared
/// length, so `-1` is the terminator slot.
///
/// ```
/// use ntbs::{Ntbs, cut};
///
/// const WORLD: Ntbs<7> = cut!(b"Hello, world!\0", -7);
/// assert_eq!(WORLD, *b"world!\0");
/// ```
///
/// Bounds that fall outside the argument do not compile:
///
/// ```compile_fail
/// use ntbs::{Ntbs, cut};
///
/// let _ = cut!(b"abc\0", 2, 9);
/// ```
#[macro_export]
macro_rules! cut {
    ($a:expr $(,)?) => {
        $crate::cut!($a, 0, -1)
    };
    ($a:expr, $b:expr $(,)?) => {
        $crate::cut!($a, $b, -1)
    };
    ($a:expr, $b:expr, $e:expr $(,)?) => {{
        const __NTBS_LEN: usize = $crate::cut_len($b, $e, $crate::length_of(&$a));
        const __NTBS_OUT: $crate::Ntbs<__NTBS_LEN> =
            $crate::cut::<{ $b }, { $e }, __NTBS_LEN, _>(&$a);
        __NTBS_OUT
    }};
}

#[cfg(test)]
mod tests {
    use crate::Ntbs;

    const HELLO: Ntbs<6> = ntbs!("Hello");
    const HELLO_WORLD: Ntbs<14> = cat!(cat!([b',', b' ']; HELLO, b"world\0"), b'!');
    const HELLO_COMMA: Ntbs<7> = cut!(HELLO_WORLD, 0, 6);
    const WORLD_EXCLAIM: Ntbs<7> = cut!(HELLO_WORLD, -7);

    const _: () = assert!(HELLO_WORLD.equals(b"Hello, world!\0"));
    const _: () = assert!(HELLO_COMMA.equals(b"Hello,\0"));
    const _: () = assert!(WORLD_EXCLAIM.equals(b"world!\0"));
    const _: () = assert!(HELLO_WORLD.equals(&cat!([b' ']; HELLO_COMMA, WORLD_EXCLAIM)));
    const _: () = assert!(cut!(WORLD_EXCLAIM, -7, -1).equals(&WORLD_EXCLAIM));

    #[test]
    fn macros_infer_lengths() {
        let empty = cat!();
        assert_eq!(empty.len(), 1);

        let joined = cat!([b'-', b'-']; b'a', b"bc\0", ntbs!("d"));
        assert_eq!(joined, *b"a--bc--d\0");

        let empty_sep = cat!([]; b"ab\0", b"cd\0");
        assert_eq!(empty_sep, *b"abcd\0");

        assert_eq!(cut!(b"\0"), *b"\0");
        assert_eq!(cut!(HELLO, 1), *b"ello\0");
        assert_eq!(ntbs!(""), *b"\0");
    }

    #[test]
    fn trailing_commas() {
        assert_eq!(cat!(b'a', b'b',), *b"ab\0");
        assert_eq!(cut!(HELLO, 0, 2,), *b"He\0");
    }
}
