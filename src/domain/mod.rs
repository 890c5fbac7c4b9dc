pub mod aggregation;
pub mod entities;
pub mod ports;
pub mod threshold;
pub mod value_objects;
