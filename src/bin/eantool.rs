use clap::{Parser, Subcommand, ValueEnum};
use rust_ean::config;
use rust_ean::decode_module_pattern;
use rust_ean::encoder::{
    ChecksumPolicy, compute_check_digit, encode_module_pattern, format_grouped,
    validate_with_policy,
};
use rust_ean::models::{ModulePattern, RenderGeometry};
use rust_ean::render::{Renderer, write_png};
use rust_ean::tools::{GeometryOverrides, ascii_preview, pattern_stats};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "eantool", version, about = "EAN-13 barcode tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Uniform bars, grouped number printed underneath
    Captioned,
    /// Extended guard bars, no caption
    Compact,
}

#[derive(Subcommand)]
enum Command {
    /// Check that a value is 13 digits (and optionally that its check digit is right)
    Validate {
        code: String,
        #[arg(long)]
        strict: bool,
    },
    /// Compute the check digit for 12 payload digits
    CheckDigit { payload: String },
    /// Print the grouped display form
    Format { code: String },
    /// Print the 113-module bar/space pattern
    Encode {
        code: String,
        #[arg(long)]
        preview: bool,
    },
    /// Decode a 0/1 module pattern back into digits
    Decode { pattern: String },
    /// Render a value to a PNG file
    Render {
        code: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum)]
        preset: Option<Preset>,
        #[arg(long)]
        module_width: Option<u32>,
        #[arg(long)]
        bar_height: Option<u32>,
        #[arg(long)]
        caption: bool,
        #[arg(long)]
        no_guard_extension: bool,
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { code, strict } => validate_cmd(&code, strict),
        Command::CheckDigit { payload } => check_digit_cmd(&payload),
        Command::Format { code } => {
            println!("{}", format_grouped(&code));
            ExitCode::SUCCESS
        }
        Command::Encode { code, preview } => encode_cmd(&code, preview),
        Command::Decode { pattern } => decode_cmd(&pattern),
        Command::Render {
            code,
            out,
            preset,
            module_width,
            bar_height,
            caption,
            no_guard_extension,
            strict,
        } => {
            let base = match preset {
                Some(Preset::Captioned) => RenderGeometry::captioned(),
                Some(Preset::Compact) => RenderGeometry::compact(),
                None => RenderGeometry::default(),
            };
            let overrides = GeometryOverrides {
                module_width,
                bar_height,
                caption,
                no_guard_extension,
            };
            render_cmd(&code, &out, overrides.apply(base), policy_for(strict))
        }
    }
}

fn policy_for(strict: bool) -> ChecksumPolicy {
    if strict {
        ChecksumPolicy::Strict
    } else {
        ChecksumPolicy::from_env()
    }
}

fn validate_cmd(code: &str, strict: bool) -> ExitCode {
    match validate_with_policy(code, policy_for(strict)) {
        Ok(value) => {
            println!("valid: {}", value.formatted());
            if !value.has_valid_checksum() {
                println!(
                    "  warning: check digit {} should be {}",
                    value.check_digit(),
                    value.expected_check_digit()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("invalid: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn check_digit_cmd(payload: &str) -> ExitCode {
    match compute_check_digit(payload) {
        Ok(digit) => {
            println!("{}", digit);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Cannot compute check digit for {:?}: {}", payload, err);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(code: &str, preview: bool) -> ExitCode {
    let pattern = match encode_module_pattern(code) {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("Cannot encode {:?}: {}", code, err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", pattern);
    if preview {
        println!("{}", ascii_preview(&pattern));
    }
    if config::debug_enabled() {
        let stats = pattern_stats(&pattern);
        eprintln!(
            "modules={} bars={} bar_runs={} bar_ratio={:.2}%",
            stats.modules,
            stats.bars,
            stats.bar_runs,
            stats.bar_ratio * 100.0
        );
    }
    ExitCode::SUCCESS
}

fn decode_cmd(pattern: &str) -> ExitCode {
    let result = pattern
        .trim()
        .parse::<ModulePattern>()
        .and_then(|p| decode_module_pattern(&p));
    match result {
        Ok(value) => {
            println!("{}", value);
            if config::debug_enabled() {
                eprintln!(
                    "grouped={} checksum_ok={}",
                    value.formatted(),
                    value.has_valid_checksum()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Cannot decode pattern: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn render_cmd(
    code: &str,
    out: &Path,
    geometry: RenderGeometry,
    policy: ChecksumPolicy,
) -> ExitCode {
    let renderer = Renderer::with_geometry(geometry).with_policy(policy);

    let start = Instant::now();
    let img = match renderer.render(code) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Cannot render {:?}: {}", code, err);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if let Err(err) = write_png(&img, out) {
        eprintln!("Failed to write {}: {}", out.display(), err);
        return ExitCode::FAILURE;
    }

    println!(
        "{} -> {} ({}x{})",
        format_grouped(code),
        out.display(),
        img.width(),
        img.height()
    );
    if config::debug_enabled() {
        eprintln!(
            "geometry={:?} render_time={:.2?}",
            renderer.geometry(),
            elapsed
        );
    }
    ExitCode::SUCCESS
}
