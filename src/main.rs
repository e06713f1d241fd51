//! SupportBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::utils::command::BotCommands as _;
use tracing::{info, warn};

use support_bot::{
    config::Settings,
    utils::logging,
    models::Catalog,
    state::{ConversationRouter, InMemorySessionStore, SessionStore},
    middleware::LoggingMiddleware,
    handlers::{
        commands::{handle_command, Command},
        messages::handle_message,
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;
    
    // Initialize logging; the guard keeps the file writer flushing
    let _log_guard = logging::init_logging(&settings.logging)?;
    
    info!("Starting {}...", support_bot::info());
    
    // Load served content
    let catalog = Catalog::load(settings.content.catalog_path.as_deref())?;
    info!(faqs = catalog.faqs.len(), products = catalog.products.len(), "Catalog ready");
    
    // Sessions live in memory for the lifetime of the process
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let router = Arc::new(ConversationRouter::new(Arc::new(catalog), sessions)?);
    let logging_middleware = LoggingMiddleware::default();
    
    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }
    
    info!("Setting up bot handlers...");
    
    let handler = create_handler();
    
    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![router, logging_middleware])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();
    
    if let Some(webhook_url) = &settings.bot.webhook_url {
        info!("Webhook URL configured: {}", webhook_url);
        info!("Webhook delivery is not supported, falling back to polling");
    }
    
    info!("Starting bot with polling mode...");
    
    dispatcher.dispatch().await;
    
    info!("SupportBot has been shut down.");
    
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands),
            )
            .branch(
                // Handle menu text and everything else
                dptree::endpoint(handle_messages),
            ),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<ConversationRouter>,
    logging_middleware: LoggingMiddleware,
) -> HandlerResult {
    let user_id = msg.from.as_ref().map(|user| user.id.0 as i64);
    if let Err(e) = handle_command(bot, msg, cmd, router, logging_middleware.clone()).await {
        logging_middleware.log_error(&e, "handle_command", user_id);
        return Err(e.into());
    }
    
    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    router: Arc<ConversationRouter>,
    logging_middleware: LoggingMiddleware,
) -> HandlerResult {
    let user_id = msg.from.as_ref().map(|user| user.id.0 as i64);
    if let Err(e) = handle_message(bot, msg, router, logging_middleware.clone()).await {
        logging_middleware.log_error(&e, "handle_message", user_id);
        return Err(e.into());
    }
    
    Ok(())
}
