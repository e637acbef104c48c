//! Output surfaces owning the writers that commands render into

pub mod renderer;
