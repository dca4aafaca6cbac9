pub mod paginate;
pub mod progress;
pub mod read;
pub mod settings;
