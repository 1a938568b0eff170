/// Expands to the name of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::facade::short_function_name(type_name_of(f))
    }};
}

/// Logs through a `Logger`, capturing the call site.
///
/// ```ignore
/// log!(logger, Level::Info, "plain message");
/// log!(logger, Level::Info, { "old" => 0, "new" => 20 }, "value changed to {}", 20);
/// ```
///
/// The message is only formatted when the logger's level admits the call.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, { $($key:expr => $value:expr),* $(,)? }, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            let metadata: $crate::Metadata = ::std::iter::IntoIterator::into_iter([
                $((::std::string::ToString::to_string(&$key), ::std::string::ToString::to_string(&$value))),*
            ])
            .collect();
            let message = ::std::format!($($arg)+);
            logger.log(&$crate::Record {
                level,
                message: &message,
                metadata: ::std::option::Option::Some(&metadata),
                file: ::std::file!(),
                function: $crate::function_name!(),
                line: ::std::line!(),
            });
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            let message = ::std::format!($($arg)+);
            logger.log(&$crate::Record {
                level,
                message: &message,
                metadata: ::std::option::Option::None,
                file: ::std::file!(),
                function: $crate::function_name!(),
                line: ::std::line!(),
            });
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Critical, $($arg)+) };
}
