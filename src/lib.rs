//! Cross-crate integration tests for fibprime live under `tests/`.
