mod project_filesystem;

pub use project_filesystem::FilesystemProject;
