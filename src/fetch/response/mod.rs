//! HTTP response handling.

mod extract;

pub(crate) use extract::{check_status, read_body};
