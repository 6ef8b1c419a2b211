//! Canonical logging macros

/// Spin an error at a disclosure level and log the disclosed layer
///
/// Emits one `error` event whose message is the disclosed layer's message in
/// `lang` (English when omitted or missing) and whose fields are its log
/// attributes (see [`hooks::attributes`](crate::hooks::attributes)). The
/// `component` field is the module the macro is invoked from. A spin that
/// discloses nothing emits nothing.
///
/// # Example
///
/// ```
/// # use lighthouse_core::{log_sp_error, Level, Registry, Sample, SpError};
/// let registry = Registry::new();
/// let err = SpError::new(
///     Sample::new("Failed to connect")
///         .with_message("en", "Db down")
///         .with_message("ru", "База недоступна"),
/// )
/// .unwrap();
///
/// log_sp_error!(registry, err, Level::DeepDebug);
/// log_sp_error!(registry, err, Level::DeepDebug, lang = "ru");
/// log_sp_error!(&registry, &err, Level::Noop); // discloses nothing
/// ```
#[macro_export]
macro_rules! log_sp_error {
    ($registry:expr, $err:expr, $level:expr, lang = $lang:expr) => {
        if let Some(attrs) = $crate::hooks::attributes(&$err, $level, &$registry, &$lang) {
            $crate::hooks::emit(&attrs, module_path!());
        }
    };
    ($registry:expr, $err:expr, $level:expr) => {
        $crate::log_sp_error!($registry, $err, $level, lang = $crate::hooks::DEFAULT_LANG)
    };
}

/// Log any error the way `log_sp_error!` does
///
/// The error is taken by value and converted with
/// [`SpError::ensure`](crate::SpError::ensure) first: an `SpError` is logged
/// as is, anything else as an "Unknown error" layer at `Level::Error` caused
/// by it.
///
/// # Example
///
/// ```
/// # use lighthouse_core::{log_error, Level, Registry};
/// let registry = Registry::new();
/// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
///
/// log_error!(registry, io, Level::DeepDebug, lang = "en");
/// ```
#[macro_export]
macro_rules! log_error {
    ($registry:expr, $err:expr, $level:expr, lang = $lang:expr) => {{
        let ensured = $crate::SpError::ensure(::std::convert::Into::<
            ::std::boxed::Box<dyn ::std::error::Error + ::std::marker::Send + ::std::marker::Sync>,
        >::into($err));
        $crate::log_sp_error!($registry, ensured, $level, lang = $lang);
    }};
    ($registry:expr, $err:expr, $level:expr) => {
        $crate::log_error!($registry, $err, $level, lang = $crate::hooks::DEFAULT_LANG)
    };
}
