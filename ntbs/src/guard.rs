use cfg_if::cfg_if;

use crate::error::{NtbsError, Op};

cfg_if! {
    if #[cfg(feature = "null-check")] {
        /// Whether `cat`, `cut` and `cmp` verify argument terminators.
        pub const NULL_CHECK: bool = true;
    } else if #[cfg(feature = "unchecked")] {
        /// Whether `cat`, `cut` and `cmp` verify argument terminators.
        pub const NULL_CHECK: bool = false;
    } else {
        /// Whether `cat`, `cut` and `cmp` verify argument terminators.
        ///
        /// Follows `debug_assertions` unless the `null-check` or `unchecked`
        /// feature picks a side.
        pub const NULL_CHECK: bool = cfg!(debug_assertions);
    }
}

/// Terminator check for one argument of declared length `size`.
///
/// Arguments with an implied terminator have nothing stored to inspect.
pub(crate) const fn check(
    bytes: &[u8],
    size: usize,
    implied_nul: bool,
    op: Op,
    arg: usize,
) -> Result<(), NtbsError> {
    if NULL_CHECK && !implied_nul && bytes[size - 1] != 0 {
        return Err(NtbsError::NotTerminated { op, arg });
    }

    Ok(())
}
