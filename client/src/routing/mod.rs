//! Client-side routing: the static route table and the navigation guard.
//!
//! DESIGN
//! ======
//! The guard is a pure decision function over (destination, credential
//! presence). Pages apply its outcome through a navigation effect, keeping
//! the business rule testable without a browser.

pub mod guard;
pub mod table;
