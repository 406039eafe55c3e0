//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! The engine layer owns lifecycle logging (start/end/end_error); lower
//! layers use only `tracing::debug!()` for internal details.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use propex_core::log_op_start;
/// log_op_start!("transfer_property");
/// log_op_start!("transfer_property", title_id = "dp_00001");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = propex_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = propex_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use propex_core::log_op_end;
/// log_op_end!("transfer_property", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = propex_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = propex_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use propex_core::{log_op_error, errors::PropexError};
/// # use propex_core_types::TitleId;
/// let err = PropexError::NotTransferable { title_id: TitleId::new("dp_00001") };
/// log_op_error!("transfer_property", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = propex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            error = %err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = propex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            error = %err,
            $($field)*
        );
    }};
}
