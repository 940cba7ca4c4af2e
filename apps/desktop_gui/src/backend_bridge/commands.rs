//! Backend commands queued from UI to backend worker.

use shared::domain::Gender;

pub enum BackendCommand {
    GenerateNames { user_input: String },
    GeneratePhoto { age: u8, gender: Gender },
}
