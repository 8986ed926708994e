mod characters;
mod not_found;

pub use characters::Characters;
pub use not_found::NotFound;
