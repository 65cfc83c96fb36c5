/// Search events and the observer seam used by renderers
pub mod events;
/// Fixed-capacity binary min-heap priority queue
pub mod heap;
/// Path reconstruction from predecessor links
pub mod path;
/// Uniform-cost search engine
pub mod search;
