pub mod mechanic;
pub mod page;
pub mod payment;
pub mod request;
pub mod stats;
