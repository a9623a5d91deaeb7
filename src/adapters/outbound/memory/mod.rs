/// In-memory adapters for session state
mod variant_store;

pub use variant_store::InMemoryVariantStore;
