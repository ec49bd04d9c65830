#[cfg(feature = "tracing")]
macro_rules! etrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "emergence", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! etrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! edebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "emergence", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! edebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! einfo {
    ($($tt:tt)*) => {
        tracing::info!(target: "emergence", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! einfo {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ewarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "emergence", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ewarn {
    ($($tt:tt)*) => {};
}
