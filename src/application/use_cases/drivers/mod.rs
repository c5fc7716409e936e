//! Driver Use Cases
//!
//! One struct per operation; each performs a single store call.

mod create_driver;
mod delete_driver;
mod get_all_drivers;
mod get_driver_by_id;
mod update_driver;

pub use create_driver::CreateDriverUseCase;
pub use delete_driver::DeleteDriverUseCase;
pub use get_all_drivers::GetAllDriversUseCase;
pub use get_driver_by_id::GetDriverByIdUseCase;
pub use update_driver::UpdateDriverUseCase;
