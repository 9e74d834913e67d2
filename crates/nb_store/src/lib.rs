pub mod memory;

pub use memory::MemoryStore;

pub mod prelude {
    pub use crate::MemoryStore;
    pub use nb_core::BriefingStore;
}
