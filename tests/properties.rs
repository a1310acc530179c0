//! Property-based tests.
mod properties {
    mod amount;
    mod logging;
}
