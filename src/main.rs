use std::process;

use sample_extract_lib::{extract_sample, SamplePaths};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    match extract_sample(&SamplePaths::default()) {
        Ok(summary) => {
            println!("{}", summary);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("an error occurred: {}", e);
            process::exit(1);
        }
    }
}
