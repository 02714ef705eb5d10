use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init tracing
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: grade_report <grades.pdf>")?;

    let result = grade_report::process(&path)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
