//! Binary entry point for `modelts`.

fn main() {
    modelts_cli::init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            std::process::exit(1);
        }
    };

    let code = runtime.block_on(modelts_cli::run_cli(std::env::args().collect()));
    std::process::exit(code);
}
