mod session_rng;

pub mod numbers_match;

pub use session_rng::SessionRng;
