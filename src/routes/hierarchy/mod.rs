//! Routes under `/customer/{customer_id}/orders`.
//!
//! Each handler resolves its path through `services::ownership` before it
//! reads or writes, so a request naming a record under the wrong parent is
//! rejected with 404 and nothing is touched.

pub mod couriers;
pub mod gifts;
pub mod order_details;
pub mod orders;
pub mod payments;
pub mod products;
pub mod suppliers;
