pub mod hello;

mod router;
pub use router::get_router;
