pub mod plumbing;
pub mod porcelain;
