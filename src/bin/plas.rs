use clap::Parser;
use plas::cli::Cli;
use plas::{diagnostics, dump, source, Error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            let color = !cli.no_color;
            diagnostics::error(&mut std::io::stdout(), &e.to_string(), color);
            return ExitCode::from(Error::from(e).exit_code() as u8);
        }
    };

    match run(&config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            diagnostics::error(&mut std::io::stdout(), &e.to_string(), config.color);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(config: &plas::cli::Config) -> Result<i32, Error> {
    let text = source::read_source(&config.path)?;

    if config.dump_tokens {
        let lines = plas::preprocessor::preprocess(&text);
        let tokens = plas::tokenizer::tokenize(&lines);
        let dump_path = format!("{}.tkn", config.path.display());
        let _ = std::fs::write(dump_path, dump::format_token_dump(&tokens));
    }

    let mut stdout = std::io::stdout();
    plas::run(&text, &mut stdout)
}
