mod construct;
mod grid;
mod sum;

pub use construct::ALL_STRATEGIES;
pub use construct::Strategy;
pub use construct::can_construct;
pub use construct::count_construct;
pub use grid::grid_traveler;
pub use sum::best_sum;
pub use sum::can_sum;
pub use sum::how_sum;
