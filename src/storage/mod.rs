pub mod file;
pub mod interface;
#[cfg(test)]
pub mod memory;
