//! Unit test module
//!
//! Handler unit tests live here, separate from source files.

mod chain_test;
mod dictionary_handler_test;
