/// Returns the message a panic was raised with, if it was a string.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
}

/// Asserts that running `$run` panics. With a second argument, also asserts that the panic
/// message contains it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic, expected {:?}", $expected),
            Err(payload) => {
                let message = $crate::util::panic::panic_message(&*payload);
                assert!(
                    message.is_some_and(|m| m.contains($expected)),
                    "panic message {:?} doesn't contain {:?}",
                    message,
                    $expected
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
