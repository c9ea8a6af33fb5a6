use cgen_cli::{init_tracing, scan_and_generate, scan_and_generate_command, ScanArgs};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let matches = scan_and_generate_command().get_matches();
    let code = scan_and_generate(&ScanArgs::from_matches(&matches)).await;
    std::process::exit(code);
}
