use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use lexedit::cli::{render, CliArgs};
use lexedit::model::View;
use lexedit::syntax::BUILTIN_GRAMMARS;

fn main() -> Result<()> {
    lexedit::tracing::init();

    let args = CliArgs::parse();

    if args.list_grammars {
        for name in BUILTIN_GRAMMARS {
            println!("{name}");
        }
        return Ok(());
    }

    let config = args.resolve_config()?;
    tracing::debug!(?config, "resolved configuration");

    let text = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let grammar = config.grammar.clone();
    let mut view = View::from_config(config, &text)
        .with_context(|| format!("Failed to load grammar '{grammar}'"))?;
    view.run_until_idle();

    let output = render(&view, args.output)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;

    Ok(())
}
