pub mod command;
pub mod factory;
pub mod library;
pub mod manager;

pub use crate::domain::model::{Book, Region, Vehicle, VehicleKind};
pub use crate::domain::ports::{BookDisplay, BookStore, Output, VehicleFactory};
pub use crate::utils::error::Result;
