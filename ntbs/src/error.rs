use core::fmt;

/// The operation that rejected an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Cat,
    Cut,
    Cmp,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Cat => "cat",
            Op::Cut => "cut",
            Op::Cmp => "cmp",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NtbsError {
    /// The last declared byte of argument `arg` is not zero.
    #[error("ntbs::{op} arg {arg} not null-terminated")]
    NotTerminated { op: Op, arg: usize },
    #[error("ntbs::cat separator not null-terminated")]
    SeparatorNotTerminated,
    #[error("no null terminator within {len} bytes")]
    NoNul { len: usize },
}

impl NtbsError {
    /// Abort with this error.
    ///
    /// Panic messages must be literals in a `const fn`, so only the
    /// operation is reported. In constant evaluation this is a compile error.
    pub const fn fail(self) -> ! {
        match self {
            NtbsError::NotTerminated { op: Op::Cat, .. } | NtbsError::SeparatorNotTerminated => {
                panic!("ntbs::cat arg not null-terminated")
            }
            NtbsError::NotTerminated { op: Op::Cut, .. } => {
                panic!("ntbs::cut arg not null-terminated")
            }
            NtbsError::NotTerminated { op: Op::Cmp, .. } => {
                panic!("ntbs::cmp arg not null-terminated")
            }
            NtbsError::NoNul { .. } => panic!("no null terminator"),
        }
    }
}

#[test]
fn test_messages() {
    let err = NtbsError::NotTerminated { op: Op::Cut, arg: 0 };
    assert_eq!(err.to_string(), "ntbs::cut arg 0 not null-terminated");
    assert_eq!(
        NtbsError::NoNul { len: 5 }.to_string(),
        "no null terminator within 5 bytes"
    );
}
