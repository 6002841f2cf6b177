// Library target exists for the integration tests in tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can import types via `kanadr::catalog::*` / `kanadr::session::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod catalog;
pub mod session;

// Private: required transitively by app/session (won't compile without them)
mod app;
mod config;
mod event;
mod ui;
