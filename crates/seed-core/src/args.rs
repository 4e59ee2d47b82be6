//! Common CLI argument definitions shared by all seed commands.

use clap::Args;

/// Arguments shared by the employee and shop seed commands.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Number of records to generate
    #[arg(long, default_value = "100")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Batch size for database inserts
    #[arg(long, default_value = "100")]
    pub batch_size: usize,
}
