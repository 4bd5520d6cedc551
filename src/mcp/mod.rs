mod server;
mod transport;

pub use server::{EmotionArgs, EmotionServer};
pub use transport::{router, serve, serve_stdio, serve_streamable_http};
