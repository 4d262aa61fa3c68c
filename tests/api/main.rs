//! tests/api/main.rs

mod helpers;
