pub mod engine;
pub mod gnss;
pub mod location;
pub mod notify;
pub mod power;
pub mod satellites;
pub mod slot;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;
