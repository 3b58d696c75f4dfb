use clap::Parser;
use propis::{Amount, Currency, ParseError, format_amount};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "cli_propis",
    version,
    about = "Печатает денежные суммы прописью на русском языке.",
    long_about = None,
)]
struct Args {
    /// Суммы для перевода, например "1 234,56"
    amounts: Vec<String>,

    /// Файл с суммами, по одной на строку
    #[arg(long)]
    input: Option<PathBuf>,

    /// Валюта: код (kzt, rub, usd, eur) или русское название
    #[arg(long, default_value = "kzt", value_parser = Currency::from_str)]
    currency: Currency,

    /// Печатать перед прописью числовую форму суммы
    #[arg(long)]
    numeric: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ParseError> {
    let args = Args::parse();

    if args.amounts.is_empty() && args.input.is_none() {
        eprintln!("no amounts given: pass them as arguments or via --input");
        process::exit(1)
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for raw in &args.amounts {
        convert_line(&mut handle, raw, args.currency, args.numeric)?;
    }

    if let Some(path) = &args.input {
        if !path.exists() {
            eprintln!("input file does not exist: {}", path.display());
            process::exit(1)
        }

        let file = File::open(path).unwrap_or_else(|err| {
            eprintln!("failed to open input file {}: {err}", path.display());
            process::exit(1);
        });

        for line in io::BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            convert_line(&mut handle, &line, args.currency, args.numeric)?;
        }
    }

    Ok(())
}

fn convert_line<W: Write>(
    writer: &mut W,
    raw: &str,
    currency: Currency,
    numeric: bool,
) -> Result<(), ParseError> {
    let amount: Amount = raw.trim().parse()?;
    let words = amount.to_words(currency);

    if numeric {
        writeln!(writer, "{}\t{words}", format_amount(&amount, ','))?;
    } else {
        writeln!(writer, "{words}")?;
    }

    Ok(())
}
