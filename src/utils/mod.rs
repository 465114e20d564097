pub mod file_size;
pub mod mp4;
