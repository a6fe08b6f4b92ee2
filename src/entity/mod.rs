pub mod couriers;
pub mod customers;
pub mod enums;
pub mod gifts;
pub mod order_details;
pub mod orders;
pub mod payments;
pub mod products;
pub mod suppliers;
pub mod users;

pub use couriers::Entity as Couriers;
pub use customers::Entity as Customers;
pub use gifts::Entity as Gifts;
pub use order_details::Entity as OrderDetails;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use products::Entity as Products;
pub use suppliers::Entity as Suppliers;
pub use users::Entity as Users;
