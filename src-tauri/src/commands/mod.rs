pub mod rewards;
pub mod session;
