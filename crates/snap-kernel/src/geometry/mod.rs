pub mod bbox;
pub mod point;
pub mod vector;
