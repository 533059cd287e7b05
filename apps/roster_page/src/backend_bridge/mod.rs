//! Backend side of the page: commands queued by the UI thread and the worker
//! thread that performs them.

pub mod commands;
pub mod runtime;
