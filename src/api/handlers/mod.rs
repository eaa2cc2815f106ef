mod admin;
mod folders;

pub use admin::{health, HealthResponse};
pub use folders::{get_folder, get_note, list_folders, list_notes};
