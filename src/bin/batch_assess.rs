use clap::Parser;
use mamaai::core::report;
use mamaai::utils::{logger, validation::Validate};
use mamaai::{
    AssessmentEngine, AssessmentOutcome, CommandPlayer, GoogleTts, LocalStorage, MamaError,
    SpeechOutcome, TomlConfig, Tier,
};

#[derive(Parser)]
#[command(name = "batch-assess")]
#[command(about = "Run pregnancy risk assessments listed in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "assessments.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override speech setting from config
    #[arg(long)]
    speak: Option<bool>,

    /// Validate the file and list what would be assessed
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Default)]
struct BatchTotals {
    low: usize,
    medium: usize,
    high: usize,
    skipped: usize,
    speech_failures: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_batch_logger(args.verbose, config.json_logs());
    tracing::info!("🚀 Starting batch assessment '{}'", config.batch.name);
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(speak) = args.speak {
        let speech = config.speech.get_or_insert(mamaai::config::toml_config::SpeechConfig {
            enabled: speak,
            lang: None,
            slow: None,
            endpoint: None,
            player: None,
        });
        speech.enabled = speak;
        tracing::info!("🔧 Speech overridden to: {}", speak);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "✅ Configuration validated: {} assessments",
        config.assessments.len()
    );

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No assessments will be run");
        for entry in &config.assessments {
            println!(
                "• {} (age {}, week {}, {} symptoms, complications: {})",
                entry.id,
                entry.age,
                entry.gestational_weeks,
                entry.symptoms.len(),
                if entry.previous_complications { "yes" } else { "no" }
            );
        }
        return Ok(());
    }

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let mut totals = BatchTotals::default();

    for entry in &config.assessments {
        let input = entry.to_input();
        match engine.assess(Some(&entry.id), &input).await {
            Ok(AssessmentOutcome::NothingToAssess) => {
                totals.skipped += 1;
                println!("[{}] ℹ️ {}", entry.id, report::NOTHING_TO_ASSESS);
            }
            Ok(AssessmentOutcome::Assessed(report)) => {
                match report.result.tier {
                    Tier::Low => totals.low += 1,
                    Tier::Medium => totals.medium += 1,
                    Tier::High => totals.high += 1,
                }
                if let SpeechOutcome::Failed(message) = &report.speech {
                    totals.speech_failures += 1;
                    eprintln!("[{}] ⚠️ {}", entry.id, message);
                }
                println!("[{}] {}", entry.id, report::render_result(&report.result));
            }
            Err(e) => {
                tracing::error!(
                    "❌ Assessment '{}' failed: {} (Category: {:?}, Severity: {:?})",
                    entry.id,
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        }
    }

    tracing::info!("📊 Batch totals: {:?}", totals);
    println!(
        "📊 {} assessed: {} high, {} medium, {} low, {} skipped",
        totals.low + totals.medium + totals.high,
        totals.high,
        totals.medium,
        totals.low,
        totals.skipped
    );
    if totals.speech_failures > 0 {
        println!("🔇 {} voice outputs failed", totals.speech_failures);
    }

    Ok(())
}

fn build_engine(config: &TomlConfig) -> Result<AssessmentEngine<LocalStorage>, MamaError> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let mut engine = AssessmentEngine::new(storage).with_export(config.export_format()?);

    if config.speech_enabled() {
        let tts = GoogleTts::new(
            config.speech_endpoint(),
            config.speech_lang(),
            config.speech_slow(),
        )?;
        engine = engine.with_speech(Box::new(tts));

        if let Some(command) = config.speech_player() {
            engine = engine.with_player(Box::new(CommandPlayer::from_command_line(command)?));
        }
    }

    Ok(engine)
}
