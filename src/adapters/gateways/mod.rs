//! Gateways - Collaborator implementations

pub mod inventory_file_gateway;
pub mod memory_package_gateway;
pub mod static_allow_list_gateway;

pub use inventory_file_gateway::InventoryFileGateway;
pub use memory_package_gateway::MemoryPackageGateway;
pub use static_allow_list_gateway::StaticAllowListGateway;
