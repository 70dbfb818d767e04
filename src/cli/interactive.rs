use super::{apply_edit, ui};
use crate::core::config::OutputFormat;
use crate::core::{Field, FormController, FormEvent};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  price-eur <amount>   price in euro (empty to clear)
  price-bgn <amount>   price in lev
  paid-eur <amount>    amount paid in euro
  paid-bgn <amount>    amount paid in lev
  mixed on|off|toggle  sum payments in both currencies
  show                 print the form
  help                 print this help
  quit                 leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Edit { field: Field, text: String },
    Mixed(Option<bool>),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(h, r)| (h, r.trim()));

    let command = match head.to_lowercase().as_str() {
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "mixed" => match rest.to_lowercase().as_str() {
            "on" | "true" | "1" => Command::Mixed(Some(true)),
            "off" | "false" | "0" => Command::Mixed(Some(false)),
            "" | "toggle" => Command::Mixed(None),
            other => anyhow::bail!("Expected on, off or toggle, got '{}'", other),
        },
        _ => Command::Edit {
            field: head.parse()?,
            text: rest.to_string(),
        },
    };
    Ok(Some(command))
}

/// Runs a session until `quit` or end of input. Every edit prints the
/// refreshed form; bad commands print an error and the session carries on.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    mixed_mode: bool,
    format: OutputFormat,
) -> Result<FormController> {
    let mut controller = FormController::new(mixed_mode);
    controller.handle(FormEvent::Init);

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?
            == 0
        {
            break;
        }
        // A garbled line is a bad command, not a broken session
        let Ok(line) = std::str::from_utf8(&buf) else {
            let message = "Input line is not valid UTF-8";
            writeln!(output, "{}", ui::style_text(message, ui::StyleType::Error))?;
            continue;
        };
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
                continue;
            }
        };
        debug!(?command, "Parsed command");

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Show => {}
            Command::Mixed(requested) => {
                let mixed = requested.unwrap_or(!controller.mixed_mode());
                controller.handle(FormEvent::SetMixedMode(mixed));
            }
            Command::Edit { field, text } => {
                apply_edit(&mut controller, field, &text);
            }
        }

        let rendered = ui::render_form(
            controller.fields(),
            controller.mixed_mode(),
            controller.change(),
            format,
        )?;
        writeln!(output, "{rendered}")?;
    }

    Ok(controller)
}

pub fn run_stdio(mixed_mode: bool, format: OutputFormat) -> Result<()> {
    println!(
        "{}",
        ui::style_text("kasa: type 'help' for commands", ui::StyleType::Subtle)
    );
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(stdin.lock(), &mut stdout, mixed_mode, format)?;
    Ok(())
}
