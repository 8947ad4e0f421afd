use clap::Parser;
use mamaai::core::report::{self, NOTHING_TO_ASSESS};
use mamaai::utils::error::ErrorSeverity;
use mamaai::utils::{logger, validation::Validate};
use mamaai::{
    AssessmentEngine, AssessmentOutcome, CliConfig, CommandPlayer, GoogleTts, LocalStorage,
    MamaError, RiskScorer, SpeechOutcome,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mamaai CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_symptoms {
        print!("{}", report::render_catalog(RiskScorer::new().catalog()));
        return Ok(());
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let input = config.to_input();

    match engine.assess(None, &input).await {
        Ok(AssessmentOutcome::NothingToAssess) => {
            println!("ℹ️ {}", NOTHING_TO_ASSESS);
        }
        Ok(AssessmentOutcome::Assessed(report)) => {
            println!("{}", report::render_result(&report.result));
            println!("📊 Assessment Summary");
            println!("{}", report.summary.render_table());

            if let Some(path) = &report.export_path {
                println!("📁 Summary saved to: {}", path);
            }

            match &report.speech {
                SpeechOutcome::NotRequested => {}
                SpeechOutcome::Played { .. } => println!("✅ Voice output completed!"),
                SpeechOutcome::Saved { path } => println!("🔊 Advice audio saved to: {}", path),
                SpeechOutcome::Failed(message) => eprintln!("⚠️ {}", message),
            }

            println!("{}", report::DISCLAIMER);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Assessment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn build_engine(config: &CliConfig) -> Result<AssessmentEngine<LocalStorage>, MamaError> {
    let storage = LocalStorage::new(config.output_path.clone());
    let mut engine = AssessmentEngine::new(storage).with_export(config.export_format()?);

    if config.speak {
        tracing::info!("🔊 Voice output enabled ({})", config.tts_endpoint);
        let tts = GoogleTts::new(config.tts_endpoint.clone(), config.lang.clone(), config.slow)?;
        engine = engine.with_speech(Box::new(tts));

        if let Some(command) = &config.player {
            engine = engine.with_player(Box::new(CommandPlayer::from_command_line(command)?));
        }
    }

    Ok(engine)
}
