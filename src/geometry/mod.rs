mod triangle;

pub use triangle::{Edge, Triangle};
