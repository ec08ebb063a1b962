use core::ffi::CStr;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use crate::NtbsError;
use crate::bytes::{NtbsArg, data_of};

/// A null-terminated byte string of declared length `N`.
///
/// `N` counts the terminator, so `Ntbs<1>` is the empty string. The last
/// byte is expected to be zero, but nothing stops a caller from writing over
/// it through [`DerefMut`]; the guard in `cat`/`cut` catches that on entry.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Ntbs<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Ntbs<N> {
    pub const fn from_array(data: [u8; N]) -> Self {
        Self { data }
    }

    pub const fn zeroed() -> Self {
        Self { data: [0; N] }
    }

    /// Builds `content` followed by a terminator.
    ///
    /// Panics if `content` is not exactly `N - 1` bytes long.
    pub const fn from_content(content: &[u8]) -> Self {
        const fn content_len_mismatch() -> ! {
            panic!("ntbs content length does not match the declared length")
        }

        if content.len() + 1 != N {
            content_len_mismatch()
        }

        let mut out = Self::zeroed();
        unsafe { copy_n(content.as_ptr(), content.len(), out.data.as_mut_ptr()) };
        out
    }

    pub const fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    pub const fn as_mut_array(&mut self) -> &mut [u8; N] {
        &mut self.data
    }

    pub const fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub const fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Everything but the declared terminator.
    pub const fn content(&self) -> &[u8] {
        match self.data.split_last() {
            Some((_, content)) => content,
            None => &[],
        }
    }

    /// Declared length, terminator included.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N <= 1
    }

    pub const fn is_terminated(&self) -> bool {
        N > 0 && self.data[N - 1] == 0
    }

    /// Full-length comparison against any admitted argument.
    ///
    /// Declared lengths must match; embedded zeros do not end the
    /// comparison early.
    pub const fn equals<R: NtbsArg>(&self, rhs: &R) -> bool {
        if N != R::SIZE {
            return false;
        }

        let rhs = data_of(rhs);
        let mut i = 0;

        while i != N {
            // bytes past the stored data are an implied terminator
            let r = if i < rhs.len() { rhs[i] } else { 0 };

            if self.data[i] != r {
                return false;
            }

            i += 1;
        }

        true
    }

    /// The bytes up to the first zero, as a C string.
    pub fn as_c_str(&self) -> Result<&CStr, NtbsError> {
        CStr::from_bytes_until_nul(&self.data).map_err(|_| NtbsError::NoNul { len: N })
    }
}

impl<const N: usize> Default for Ntbs<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> Deref for Ntbs<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Ntbs<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for Ntbs<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> From<[u8; N]> for Ntbs<N> {
    fn from(data: [u8; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize> From<Ntbs<N>> for [u8; N] {
    fn from(value: Ntbs<N>) -> Self {
        value.data
    }
}

impl<'a, const N: usize> IntoIterator for &'a Ntbs<N> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<const L: usize, R: NtbsArg> PartialEq<R> for Ntbs<L> {
    fn eq(&self, other: &R) -> bool {
        self.equals(other)
    }
}

impl<const N: usize> Eq for Ntbs<N> {}

impl<const N: usize> Hash for Ntbs<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl<const N: usize> fmt::Debug for Ntbs<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.data.escape_ascii())
    }
}

/// Copies `sz` bytes from `src` to `dest`, returning the end of the write.
///
/// # Safety
///
/// `src` must be valid for `sz` reads and `dest` for `sz` writes. The two
/// ranges must not overlap.
pub(crate) const unsafe fn copy_n(src: *const u8, sz: usize, dest: *mut u8) -> *mut u8 {
    unsafe {
        dest.copy_from_nonoverlapping(src, sz);
        dest.add(sz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A0: Ntbs<2> = Ntbs::from_array(*b"a\0");
    const HO: Ntbs<3> = Ntbs::from_content(b"ho");

    const _: () = assert!(A0.len() == 2);
    const _: () = assert!(A0.equals(b"a\0"));
    const _: () = assert!(A0.equals(&b'a'));
    const _: () = assert!(!A0.equals(b"a\0\0"));
    const _: () = assert!(HO.equals(b"ho\0"));
    const _: () = assert!(HO.is_terminated());
    const _: () = assert!(Ntbs::<1>::zeroed().is_empty());

    #[test]
    fn iteration_includes_terminator() {
        let hi = Ntbs::from_array(*b"hi\0");
        let mut n = 0;

        for (i, &b) in (&hi).into_iter().enumerate() {
            assert_eq!(b, b"hi\0"[i]);
            n += 1;
        }

        assert_eq!(n, size_of::<Ntbs<3>>());
        assert_eq!(hi[n - 1], 0);
    }

    #[test]
    fn equality_is_full_length() {
        let a = Ntbs::from_array(*b"a\0b\0");
        let b = Ntbs::from_array(*b"a\0b\0");
        let c = Ntbs::from_array(*b"a\0c\0");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, *b"a\0");
        assert_eq!(Ntbs::from_array(*b"c\0"), b'c');
        assert_ne!(Ntbs::from_array(*b"cd"), b'c');
    }

    #[test]
    fn overwrite_terminator() {
        let mut mutable = Ntbs::<6>::from_content(b"Hello");
        assert!(mutable.is_terminated());

        mutable[5] = b'!';
        assert!(!mutable.is_terminated());
        assert_eq!(mutable.content(), b"Hello");
        assert_eq!(mutable.as_c_str(), Err(NtbsError::NoNul { len: 6 }));
    }

    #[test]
    fn c_str_view() {
        let s = Ntbs::from_array(*b"ab\0cd\0");
        assert_eq!(s.as_c_str().unwrap().to_bytes(), b"ab");
        assert_eq!(format!("{s:?}"), r#"b"ab\x00cd\x00""#);
    }

    #[test]
    #[should_panic(expected = "ntbs content length does not match")]
    fn content_too_long() {
        let _ = Ntbs::<3>::from_content(b"abc");
    }

    #[test]
    fn copy_n_returns_end() {
        let src = *b"abcdef";
        let mut dest = [0u8; 8];

        unsafe {
            let end = copy_n(src.as_ptr().add(1), 3, dest.as_mut_ptr());
            assert_eq!(end.offset_from(dest.as_ptr()), 3);
        }

        assert_eq!(&dest, b"bcd\0\0\0\0\0");
    }
}
