pub mod config;
pub mod modules;
pub use modules::candidate;

#[cfg(test)]
mod tests;
