//! Domain entities: product catalog, cart, wishlist, order history.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{Cart, Wishlist};
pub use order::Order;
pub use product::{Catalog, HeroSlide, Product, ProductId, format_cents};
