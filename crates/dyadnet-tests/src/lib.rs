//! Integration and property tests for dyadnet, compiled against the public
//! API of `dyadnet-core` only. See the `tests/` directory.
