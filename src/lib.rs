pub mod domains;
pub mod logging;
pub mod notation;
