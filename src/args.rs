#[derive(Clone, Debug, Default, clap::Parser)]
pub struct Args {
    /// Don't read or create the config file.
    #[clap(long)]
    pub ignore_config: bool,

    /// Override the animation frame interval, in milliseconds.
    #[clap(long)]
    pub interval_ms: Option<u64>,
}
