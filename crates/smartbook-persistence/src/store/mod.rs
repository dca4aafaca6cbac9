pub mod atomic_writer;
pub mod json_envelope;
pub mod json_progress_store;
pub mod json_settings_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use json_envelope::JsonEnvelope;
pub use json_progress_store::JsonProgressStore;
pub use json_settings_store::JsonSettingsStore;
pub use memory_store::{InMemoryProgressStore, InMemorySettingsStore};
