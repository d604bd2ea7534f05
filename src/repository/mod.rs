//! Repositories: declarative SQL plus parameters, all executed through the gateway.

mod clients;
mod orders;
pub use clients::ClientRepository;
pub use orders::OrderRepository;
