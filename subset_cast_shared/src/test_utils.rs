use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FileSpan {
    pub file: &'static str,
    pub line: u32,
}

pub type ThreadError = Box<dyn Any + Send + 'static>;

#[derive(Debug, Clone)]
pub struct ShouldHavePanickedAt {
    pub span: FileSpan,
}

#[macro_export]
macro_rules! file_span {
    () => {{
        use $crate::test_utils::FileSpan;
        FileSpan {
            file: file!(),
            line: line!(),
        }
    }};
}

pub fn must_panic<F, R>(span: FileSpan, f: F) -> Result<ThreadError, ShouldHavePanickedAt>
where
    F: FnOnce() -> R,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => Err(ShouldHavePanickedAt { span }),
        Err(e) => Ok(e),
    }
}

/// Gets the message of a panic caught by [`must_panic`],
/// returning an empty string if the panic payload isn't a string.
pub fn panic_message(err: &ThreadError) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s
    } else if let Some(s) = err.downcast_ref::<&'static str>() {
        s
    } else {
        ""
    }
}

#[test]
fn test_must_panic() {
    assert!(must_panic(file_span!(), || panic!()).is_ok());
    assert!(must_panic(file_span!(), || ()).is_err());

    let err = must_panic(file_span!(), || panic!("hello {}", 3)).unwrap();
    assert_eq!(panic_message(&err), "hello 3");

    let err = must_panic(file_span!(), || panic!("world")).unwrap();
    assert_eq!(panic_message(&err), "world");
}
