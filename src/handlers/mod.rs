pub mod dishes;
pub mod orders;
