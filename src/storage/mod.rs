pub mod db;
mod tables;

pub use db::{Database, DatabaseError};
pub use tables::*;
