use cgen_cli::{generate_one, generate_one_command, init_tracing, GenerateOneArgs};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let matches = generate_one_command().get_matches();
    let code = generate_one(&GenerateOneArgs::from_matches(&matches)).await;
    std::process::exit(code);
}
