mod intervals;
mod products;
mod zig_zag;

pub use intervals::merge_intervals;
pub use products::product_except_self;
pub use zig_zag::ZigZag;
pub use zig_zag::zig_zag_traverse;
