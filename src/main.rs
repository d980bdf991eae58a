//! Truth Weaver CLI
//!
//! Usage:
//!   truth-weaver                                # input.txt → output.txt + truth_analysis.json
//!   truth-weaver -i transcript.txt -o out.txt   # Custom paths
//!   truth-weaver --text "subject: atlas ..."    # Inline transcript
//!   truth-weaver --json                         # JSON array to stdout
//!   truth-weaver --verbose                      # Explain contradictions
//!   truth-weaver --serve                        # HTTP API server

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use truth_weaver::core::{
    operative_claim, read_transcript, render_json, run_server, save_json, save_report, TracingObserver,
    TruthWeaver,
};
use truth_weaver::types::{ClaimCategory, LieType, ShadowAnalysis, WeaverError};
use truth_weaver::{DEFAULT_INPUT_FILE, DEFAULT_JSON_FILE, DEFAULT_REPORT_FILE, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "truth-weaver",
    version = VERSION,
    about = "Truth Weaver - extract claims and expose contradictions in testimony transcripts",
    long_about = "Truth Weaver reads a multi-session transcript, splits it per shadow\n\
                  (subject:/shadow:/agent: markers) and session (session N markers),\n\
                  resolves what each shadow actually knows, and lists the claims that\n\
                  contradict each other across sessions.\n\n\
                  Outputs:\n  \
                  output.txt           - one record per shadow, '=' delimited\n  \
                  truth_analysis.json  - the same records as a JSON array"
)]
struct Args {
    /// Transcript file
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: String,

    /// Inline transcript text (overrides --input)
    #[arg(short, long)]
    text: Option<String>,

    /// Human-readable report file
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: String,

    /// JSON report file
    #[arg(long, default_value = DEFAULT_JSON_FILE)]
    json_output: String,

    /// Print the JSON array to stdout instead of writing files
    #[arg(long)]
    json: bool,

    /// Explain each contradiction with the trust policy
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let weaver = TruthWeaver::with_observer(Arc::new(TracingObserver));

    let result = if args.serve {
        run_server(&args.addr, weaver).await.map_err(|e| e.to_string())
    } else {
        run_batch(&args, &weaver).map_err(|e| format!("error[{}]: {}", e.code(), e))
    };

    if let Err(message) = result {
        eprintln!("{}", message.red());
        std::process::exit(1);
    }
}

/// Read → weave → write both sinks
fn run_batch(args: &Args, weaver: &TruthWeaver) -> Result<(), WeaverError> {
    let content = match &args.text {
        Some(text) => text.clone(),
        None => read_transcript(&args.input)?,
    };

    let analyses = weaver.weave_detailed(&content)?;
    let verdicts: Vec<_> = analyses.iter().map(|a| a.verdict.clone()).collect();

    if args.json {
        println!("{}", render_json(&verdicts)?);
    } else {
        save_report(&verdicts, &args.output)?;
        save_json(&verdicts, &args.json_output)?;

        println!("{}", "Analysis complete".green().bold());
        println!("Analyzed {} shadow(s)", verdicts.len());
        println!("Files created:");
        println!("  - {} (detailed results)", args.output);
        println!("  - {} (JSON format)", args.json_output);
    }

    if args.verbose {
        let (mut stdout, mut stderr) = (io::stdout().lock(), io::stderr().lock());
        write_explanations(args, &analyses, &mut stdout, &mut stderr).map_err(|source| {
            WeaverError::OutputUnwritable {
                path: "<terminal>".to_string(),
                source,
            }
        })?;
    }
    Ok(())
}

/// Explanations go to stderr when stdout carries the JSON array
fn write_explanations<'a>(
    args: &Args,
    analyses: &[ShadowAnalysis],
    stdout: &'a mut dyn Write,
    stderr: &'a mut dyn Write,
) -> io::Result<()> {
    let out = if args.json { stderr } else { stdout };
    for analysis in analyses {
        write_explanation(out, analysis)?;
    }
    Ok(())
}

/// Patterns with the claim the trust policy believes
fn write_explanation(out: &mut dyn Write, analysis: &ShadowAnalysis) -> io::Result<()> {
    let verdict = &analysis.verdict;
    writeln!(out)?;
    writeln!(out, "{} {}", "shadow".bold(), verdict.shadow_id.cyan().bold())?;

    if verdict.deception_patterns.is_empty() {
        writeln!(out, "  {}", "no contradictions".dimmed())?;
        return Ok(());
    }

    for pattern in &verdict.deception_patterns {
        writeln!(
            out,
            "  {} {:?} in sessions {:?}",
            pattern.lie_type.as_str().yellow(),
            pattern.contradictory_claims,
            pattern.sessions_involved
        )?;

        let claims = match pattern.lie_type {
            LieType::ExperienceInflation => analysis.claims_for(ClaimCategory::Experience),
            LieType::LeadershipContradiction => {
                let mut claims = analysis.claims_for(ClaimCategory::Leadership);
                claims.extend(analysis.claims_for(ClaimCategory::TeamContext));
                claims
            }
            LieType::EmotionalInconsistency => continue,
        };
        match operative_claim(claims.iter().copied()) {
            Some(claim) => writeln!(
                out,
                "    {} \"{}\" (session {})",
                "operative:".green(),
                claim.value,
                claim.session
            )?,
            None => writeln!(out, "    {}", "operative: none (all claims hedged)".dimmed())?,
        }
        for claim in claims.iter().filter(|c| c.hedged) {
            writeln!(
                out,
                "    {} \"{}\" (session {})",
                "hedged:".red(),
                claim.value,
                claim.session
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS: &str = "subject: atlas\nsession:1\nI am a senior engineer with 6 years experience.\n\
                         session:2\nIt was actually an internship, maybe a year.\n";

    fn explain(argv: &[&str]) -> (String, String) {
        colored::control::set_override(false);
        let args = Args::try_parse_from(argv).unwrap();
        let analyses = TruthWeaver::new().weave_detailed(ATLAS).unwrap();
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        write_explanations(&args, &analyses, &mut stdout, &mut stderr).unwrap();
        (String::from_utf8(stdout).unwrap(), String::from_utf8(stderr).unwrap())
    }

    #[test]
    fn test_explanation_on_stdout_by_default() {
        let (stdout, stderr) = explain(&["truth-weaver", "--verbose"]);
        assert!(stdout.contains("experience_inflation"));
        assert!(stdout.contains("operative: \"6 years\" (session 1)"));
        assert!(stdout.contains("hedged: \"1 year\" (session 2)"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_json_mode_keeps_stdout_clean() {
        let (stdout, stderr) = explain(&["truth-weaver", "--json", "--verbose"]);
        assert!(stdout.is_empty());
        assert!(stderr.contains("experience_inflation"));
    }
}
