//! Business logic services for the application layer.

pub mod code_allocator;
pub mod link_service;

pub use code_allocator::{Allocation, AllocationPolicy, CodeAllocator};
pub use link_service::LinkService;
