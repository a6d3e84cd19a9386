#[macro_use]
extern crate log;

#[cfg(feature = "demo")]
pub mod demo_mock_server;
pub mod reset;
pub mod tools;
