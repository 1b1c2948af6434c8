pub mod demo_seed;
pub mod earnings_stats;
pub mod seed_verify;
