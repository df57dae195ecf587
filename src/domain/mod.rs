pub mod errors;
pub mod order;
pub mod paginate;
pub mod portions;
pub mod ports;
pub mod pricing;
