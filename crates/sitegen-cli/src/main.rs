//! `sitegen` binary

use sitegen_cli::{command, init_tracing, run};

#[tokio::main]
async fn main() {
    let matches = command().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(&matches).await {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
