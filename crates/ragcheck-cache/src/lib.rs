mod file_cache;
mod in_memory;

pub use file_cache::FileCache;
pub use in_memory::InMemoryCache;

// Re-export the PromptCache trait from core for backward compatibility.
pub use ragcheck_core::PromptCache;
