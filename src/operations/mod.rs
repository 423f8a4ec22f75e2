pub mod boundary;
pub mod fitting;
pub mod surface;
