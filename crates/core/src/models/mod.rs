pub mod cancellation;
pub mod session;
pub mod slot;
