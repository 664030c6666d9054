//! Logging macros.

/// Evaluates the given expression and logs how long it took at the `info`
/// level.
#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        let _duration = _start_time.elapsed();
        $crate::info!(
            concat!($message, " took {:.2} ms")$(,$arg)*,
            _duration.as_secs_f64() * 1e3,
        );
        _result
    }};
}

/// Evaluates the given expression and logs how long it took at the `debug`
/// level.
#[macro_export]
macro_rules! with_timing_debug_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        let _duration = _start_time.elapsed();
        $crate::debug!(
            concat!($message, " took {:.2} ms")$(,$arg)*,
            _duration.as_secs_f64() * 1e3,
        );
        _result
    }};
}

/// Logs at the `trace` level when the given expression starts and finishes
/// evaluating, including the time it took.
#[macro_export]
macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        $crate::trace!(concat!("Begin: ", $message)$(,$arg)*);
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        let _duration = _start_time.elapsed();
        $crate::trace!(
            concat!("({:.2} ms) Done: ", $message),
            _duration.as_secs_f64() * 1e3
            $(,$arg)*
        );
        _result
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn timing_macros_return_the_expression_value() {
        let sum = with_timing_info_logging!("Summing {} values", 3; { 1 + 2 + 3 });
        assert_eq!(sum, 6);

        let product = with_timing_debug_logging!("Multiplying"; { 2 * 3 });
        assert_eq!(product, 6);

        let value = with_trace_logging!("Computing {}", "value"; { 42 });
        assert_eq!(value, 42);
    }
}
