pub mod analysis;
pub mod entities;
pub mod ports;
pub mod value_objects;
