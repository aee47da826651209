pub mod amazon;
pub mod dashboard;
pub mod delivery;
pub mod employee;
pub mod location;
pub mod returns;
