//! Transport-independent request handlers. The axum layer in `server`
//! and the tests both call into these.

pub mod tracking;
