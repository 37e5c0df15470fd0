/// A macro to signal that some code is unreachable. In debug mode this will panic if
/// the code is reached for some reason, but in release it will cause undefined behaviour!
///
/// ### Safety
///
/// The macro call must never be reached, otherwise undefined behaviour will occur.
#[macro_export]
macro_rules! unreachable_unchecked {
    (@inner $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            ::core::panic!(concat!("internal error: entered unreachable code", $($arg)*));
        }
        #[cfg(not(debug_assertions))]
        unsafe {
            ::core::hint::unreachable_unchecked()
        }
    }};
    ($($e:expr)*) => {
        unreachable_unchecked!(@inner ": ", $($e)*)
    };
    () => {
        unreachable_unchecked!(@inner ".")
    };
}

#[macro_export]
macro_rules! iter_const {
    ( for $t:ident in $start:expr ,.. $end:expr => $bl:block ) => {{
        let mut $t = $start;
        if $start < $end {
            loop {
                $bl;

                $t += 1;
                if $t >= $end {
                    break;
                }
            }
        }
    }};
}
