pub mod amazon;
pub mod common;
pub mod delivery;
pub mod employee;
pub mod location;
pub mod returns;
