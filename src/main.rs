use anyhow::{bail, Context, Result};
use log::info;

use arith_demo::{
    config::{BINARY_NAME, DEFAULT_LOG_FILTER, JSON_FLAG},
    evaluate, parse_argument, Operation, Report,
};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let json = args.first().is_some_and(|arg| arg == JSON_FLAG);
    if json {
        args.remove(0);
    }

    let Some((name, raw_args)) = args.split_first() else {
        bail!("Usage: {} [{}] <operation> [args...]", BINARY_NAME, JSON_FLAG);
    };

    let operation: Operation = name.parse()?;
    let arguments: Vec<_> = raw_args.iter().map(|raw| parse_argument(raw)).collect();

    let result = evaluate(operation, &arguments)
        .with_context(|| format!("Failed to evaluate {}", operation))?;
    info!("{} evaluated to {}", operation, result);

    if json {
        let report = Report {
            operation,
            arguments,
            result,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}
