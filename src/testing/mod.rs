mod memory_filesystem;

pub use memory_filesystem::MemoryFilesystem;
