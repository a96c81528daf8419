mod card_grid;

pub use card_grid::CardGrid;
