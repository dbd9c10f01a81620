use std::process::ExitCode;

use clap::Parser;
use ssm_env::cli::{Args, start};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    start(Args::parse()).await
}
