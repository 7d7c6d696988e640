//! CLI entry point for the `arith-trace` binary.

use std::env;
use std::ffi::OsString;

use arith_cli::render::{render_division, render_multiplication};
use arith_core::{divide_non_restoring, divide_restoring, multiply, parse_operand, EngineError};
use num_bigint::BigInt;

const USAGE_TEXT: &str = "\
Usage: arith-trace <command> <operands>

Commands:
  mul  <multiplicand> <multiplier>  Booth multiplication with step table
  div  <dividend> <divisor>         Restoring division with step table
  ndiv <dividend> <divisor>         Non-restoring division with step table

Options:
  -h, --help  Show this help message

Examples:
  arith-trace mul 3 -4
  arith-trace div 13 4
  arith-trace ndiv -13 4
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Multiply(OperandArgs),
    DivideRestoring(OperandArgs),
    DivideNonRestoring(OperandArgs),
}

#[derive(Debug, PartialEq, Eq)]
struct OperandArgs {
    left: String,
    right: String,
}

#[derive(Debug)]
enum ParseResult {
    Command(Command),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let command_str = first.to_string_lossy().to_string();

    let operands = parse_operand_args(args)?;
    match command_str.as_str() {
        "mul" => Ok(ParseResult::Command(Command::Multiply(operands))),
        "div" => Ok(ParseResult::Command(Command::DivideRestoring(operands))),
        "ndiv" => Ok(ParseResult::Command(Command::DivideNonRestoring(operands))),
        other => Err(format!("unknown command: {other}")),
    }
}

fn parse_operand_args(args: impl Iterator<Item = OsString>) -> Result<OperandArgs, String> {
    let mut operands: Vec<String> = Vec::new();

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }
        operands.push(arg.to_string_lossy().to_string());
    }

    match operands.len() {
        2 => {
            let mut it = operands.into_iter();
            let left = it.next().unwrap_or_default();
            let right = it.next().unwrap_or_default();
            Ok(OperandArgs { left, right })
        }
        n if n < 2 => Err("missing operand".to_string()),
        _ => Err("too many operands provided".to_string()),
    }
}

fn parse_pair(args: &OperandArgs) -> Result<(BigInt, BigInt), EngineError> {
    Ok((parse_operand(&args.left)?, parse_operand(&args.right)?))
}

fn run_command(command: &Command) -> Result<String, EngineError> {
    match command {
        Command::Multiply(args) => {
            let (m, q) = parse_pair(args)?;
            Ok(render_multiplication(&multiply(&m, &q)))
        }
        Command::DivideRestoring(args) => {
            let (dividend, divisor) = parse_pair(args)?;
            Ok(render_division(&divide_restoring(&dividend, &divisor)?))
        }
        Command::DivideNonRestoring(args) => {
            let (dividend, divisor) = parse_pair(args)?;
            Ok(render_division(&divide_non_restoring(&dividend, &divisor)?))
        }
    }
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(command)) => match run_command(&command) {
            Ok(rendered) => {
                print!("{rendered}");
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Err(error) => {
            if error.starts_with("Usage:") {
                println!("{error}");
            } else {
                eprintln!("error: {error}");
                eprintln!("{USAGE_TEXT}");
            }
            1
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::{parse_args, run_command, Command, OperandArgs, ParseResult};
    use std::ffi::OsString;

    fn args(parts: &[&str]) -> impl Iterator<Item = OsString> {
        parts
            .iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_multiply_command() {
        let result = parse_args(args(&["mul", "3", "-4"])).expect("valid args should parse");
        let ParseResult::Command(command) = result else {
            panic!("expected a command");
        };
        assert_eq!(
            command,
            Command::Multiply(OperandArgs {
                left: "3".to_owned(),
                right: "-4".to_owned(),
            })
        );
    }

    #[test]
    fn parses_division_commands() {
        for (name, expect_restoring) in [("div", true), ("ndiv", false)] {
            let result = parse_args(args(&[name, "13", "4"])).expect("valid args should parse");
            let ParseResult::Command(command) = result else {
                panic!("expected a command");
            };
            match command {
                Command::DivideRestoring(_) => assert!(expect_restoring),
                Command::DivideNonRestoring(_) => assert!(!expect_restoring),
                Command::Multiply(_) => panic!("unexpected multiply"),
            }
        }
    }

    #[test]
    fn parses_help_flag() {
        let result = parse_args(args(&["--help"])).expect("help should parse without error");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn rejects_unknown_command() {
        let error = parse_args(args(&["pow", "2", "3"])).expect_err("unknown command should fail");
        assert!(error.contains("unknown command"));
    }

    #[test]
    fn rejects_wrong_operand_count() {
        let error = parse_args(args(&["mul", "3"])).expect_err("one operand should fail");
        assert!(error.contains("missing operand"));

        let error = parse_args(args(&["div", "1", "2", "3"])).expect_err("three should fail");
        assert!(error.contains("too many operands"));
    }

    #[test]
    fn run_surfaces_engine_errors() {
        let command = Command::DivideRestoring(OperandArgs {
            left: "7".to_owned(),
            right: "0".to_owned(),
        });
        let error = run_command(&command).expect_err("division by zero should fail");
        assert_eq!(error.to_string(), "division by zero");

        let command = Command::Multiply(OperandArgs {
            left: "not-a-number".to_owned(),
            right: "2".to_owned(),
        });
        let error = run_command(&command).expect_err("bad operand should fail");
        assert!(error.to_string().contains("not a well-formed integer"));
    }

    #[test]
    fn run_renders_a_result_for_valid_operands() {
        let command = Command::Multiply(OperandArgs {
            left: "3".to_owned(),
            right: "-4".to_owned(),
        });
        let rendered = run_command(&command).expect("multiplication should succeed");
        assert!(rendered.contains("Product (decimal): -12"));
    }
}
