// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper, so unused-symbol warnings are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
