//! Domain models for the Herb Trace Platform

mod access;
mod application;
mod farm;
mod herb;
mod inspection;
mod lab;
mod package;
mod plant;
mod trace;
mod transaction;

pub use access::*;
pub use application::*;
pub use farm::*;
pub use herb::*;
pub use inspection::*;
pub use lab::*;
pub use package::*;
pub use plant::*;
pub use trace::*;
pub use transaction::*;
