mod character_card;
mod character_grid;
mod directive_select;
mod loading;
mod theme_switch;

pub use character_card::CharacterCard;
pub use character_grid::CharacterGrid;
pub use directive_select::{FilterSelect, SortSelect};
pub use loading::Loading;
pub use theme_switch::ThemeSwitch;
