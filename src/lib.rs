pub mod input;
pub mod judge;
pub mod model;
pub mod session;
