// Logging shim: forwards to `log` or `defmt` depending on the enabled
// feature and swallows the arguments otherwise.

#![macro_use]
#![allow(unused_macros)]

macro_rules! log_at {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            cfg_if::cfg_if! {
                if #[cfg(feature = "log")] {
                    ::log::$level!($s $(, $x)*);
                } else if #[cfg(feature = "defmt")] {
                    ::defmt::$level!($s $(, $x)*);
                } else {
                    let _ = ($( & $x ),*);
                }
            }
        }
    };
}

macro_rules! trace {
    ($($args:tt)*) => { log_at!(trace, $($args)*) };
}

macro_rules! debug {
    ($($args:tt)*) => { log_at!(debug, $($args)*) };
}

macro_rules! warn {
    ($($args:tt)*) => { log_at!(warn, $($args)*) };
}

macro_rules! error {
    ($($args:tt)*) => { log_at!(error, $($args)*) };
}
