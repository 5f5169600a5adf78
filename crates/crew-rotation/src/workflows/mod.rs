pub mod import;
pub mod roster;
