#![allow(unused_imports)]

pub use run_all_test_utils::{ChecksDirBuilder, FakeBackend, SharedBuffer, init_tracing};
