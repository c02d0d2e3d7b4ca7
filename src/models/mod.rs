pub mod catalog;
pub mod favorite;
pub mod user;

pub use catalog::{CatalogKind, Person, Planet};
pub use favorite::{FavoriteRelation, PersonFavorite, PlanetFavorite};
pub use user::User;
