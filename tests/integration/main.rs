//! Integration tests for srp

mod cli_test;
mod decode_test;
mod playback_test;
