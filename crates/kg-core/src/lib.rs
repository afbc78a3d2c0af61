pub mod models;

pub use models::identity::Identity;

#[cfg(test)]
mod tests;
