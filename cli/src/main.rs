//! Debate CLI binary: stream a three-role debate on one topic.

mod logging;

use std::path::PathBuf;

use clap::Parser;
use cli::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "debate")]
#[command(about = "Debate: a Judge frames the topic, two advocates argue, the Judge rules")]
struct Args {
    /// Debate topic (or pass as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    topic: Option<String>,

    /// Positional args: topic when -t/--topic is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// System instruction for the Judge's verdict
    #[arg(long, value_name = "TEXT")]
    judge_instruction: Option<String>,

    /// System instruction for the Affirmative case
    #[arg(long, value_name = "TEXT")]
    affirmative_instruction: Option<String>,

    /// System instruction for the Negative case
    #[arg(long, value_name = "TEXT")]
    negative_instruction: Option<String>,

    /// YAML file with `judge` / `affirmative` / `negative` instructions
    #[arg(long, value_name = "PATH", env = "DEBATE_PROMPTS_FILE")]
    prompts: Option<PathBuf>,

    /// Model name (default: DEBATE_MODEL or gpt-4o-mini)
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Sampling temperature, 0 to 2 (default: DEBATE_TEMPERATURE or 0)
    #[arg(long, value_name = "T")]
    temperature: Option<String>,

    /// One JSON object per turn on stdout instead of text sections
    #[arg(long)]
    json: bool,

    /// Verbose: log handler and routing events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_options(self) -> Option<RunOptions> {
        let topic = self.topic.unwrap_or_else(|| self.rest.join(" "));
        if topic.trim().is_empty() {
            return None;
        }
        Some(RunOptions {
            topic,
            judge_instruction: self.judge_instruction,
            affirmative_instruction: self.affirmative_instruction,
            negative_instruction: self.negative_instruction,
            prompts_file: self.prompts,
            model: self.model,
            temperature: self.temperature,
            json: self.json,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_result = config::load_and_apply("debate", None);
    let args = Args::parse();
    logging::init(args.verbose)?;
    if let Err(e) = config_result {
        tracing::warn!(error = %e, "config not applied");
    }

    let Some(opts) = args.into_options() else {
        eprintln!("debate: provide a topic via -t/--topic or positional args");
        std::process::exit(2);
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(&opts, &mut stdout).await {
        tracing::error!(error = %e, "debate failed");
        eprintln!("debate: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
