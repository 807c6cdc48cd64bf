pub mod filename;
pub mod install;
pub mod resolve;
