use copyforge::{CopyGenerator, CopyRequest, GenerationResult, OpenAiConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    copyforge::logger::init_with_config(
        copyforge::logger::LoggerConfig::development()
            .with_level(copyforge::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking OpenAI environment...");

    match env::var("OPENAI_API_KEY") {
        Ok(key) => {
            log::info!("✅ OpenAI API key found in environment");
            log::debug!("Key starts with: {}...", &key[..7.min(key.len())]);
        }
        Err(_) => {
            log::error!("❌ OPENAI_API_KEY is not set, generation will fail at client setup");
        }
    }

    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        log::info!("OPENAI_BASE_URL: {}", base_url);
    }
    if let Ok(model) = env::var("OPENAI_MODEL") {
        log::info!("OPENAI_MODEL: {}", model);
    }

    // Four fields from the command line, in form order; the posture-corrector
    // sample fills in whatever is missing.
    let mut args = env::args().skip(1);
    let request = CopyRequest::new(
        args.next().unwrap_or_else(|| "Acme".to_string()),
        args.next()
            .unwrap_or_else(|| "posture correctors".to_string()),
        args.next().unwrap_or_else(|| {
            "Discover the benefits of our revolutionary posture corrector and how it can \
             alleviate back pain."
                .to_string()
        }),
        args.next().unwrap_or_else(|| {
            "Take control of your spinal health today with our posture corrector. Buy now \
             and experience the difference!"
                .to_string()
        }),
    );

    if let Err(message) = request.validate() {
        log::error!("❌ {}", message);
        return Err(message.into());
    }

    log::info!("🔄 Creating copy generator...");
    let generator = match CopyGenerator::openai(OpenAiConfig::from_env()) {
        Ok(generator) => {
            log::info!("✅ Copy generator initialized successfully");
            generator
        }
        Err(e) => {
            log::error!("❌ Failed to initialize copy generator: {}", e);
            return Err(e.into());
        }
    };

    log::info!("✍️  Generating Two-Step Selling copy for '{}'...", request.brand_name);

    match generator.generate(&request).await {
        GenerationResult::Generated(copy) => {
            log::info!("👩‍💼💡 Your Two-Step Selling Copy:");
            println!("{}", copy);
        }
        GenerationResult::Failed { .. } => {
            log::error!("💥 Failed to generate selling copy. Please try again!");
        }
    }

    Ok(())
}
