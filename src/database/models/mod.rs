pub mod address;
pub mod category;
pub mod order;
pub mod owner;
pub mod payment;
pub mod product;
pub mod review;
pub mod user;

pub use address::Address;
pub use category::Category;
pub use order::Order;
pub use owner::Owner;
pub use payment::Payment;
pub use product::Product;
pub use review::Review;
pub use user::User;
