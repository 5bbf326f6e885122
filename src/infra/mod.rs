pub mod file_system;
pub mod logger;
#[cfg(test)]
pub mod mock;
pub mod output;
