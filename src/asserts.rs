#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CROSSFILL_ASSERT_LEVEL_DEFINITION: u8 = CROSSFILL_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CROSSFILL_ASSERT_LEVEL_DEFINITION: u8 = CROSSFILL_ASSERT_ADVANCED;

pub const CROSSFILL_ASSERT_SIMPLE: u8 = 1;
pub const CROSSFILL_ASSERT_MODERATE: u8 = 2;
pub const CROSSFILL_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! crossfill_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CROSSFILL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CROSSFILL_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crossfill_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CROSSFILL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CROSSFILL_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crossfill_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CROSSFILL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CROSSFILL_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crossfill_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CROSSFILL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CROSSFILL_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
