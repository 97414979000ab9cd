use super::print::{print_full_quizzes, print_messages, print_quiz_titles, print_users};
use super::setup::{CardCommands, Cli, Commands, QuizCommands, UserCommands};
use clap::Parser;
use cognition::api::{CognitionApi, QuizEdit};
use cognition::config::{StorageConfig, StorageMode};
use cognition::error::Result;
use cognition::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CognitionApi<FileStore>,
    config: StorageConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::User(cmd) => match cmd {
            UserCommands::Add { username, password } => {
                handle_user_add(&mut ctx, &username, &password)
            }
            UserCommands::List => handle_user_list(&ctx),
            UserCommands::Show { username } => handle_user_show(&ctx, &username),
            UserCommands::Rename {
                username,
                new_username,
            } => handle_user_rename(&mut ctx, &username, &new_username),
            UserCommands::Passwd { username, password } => {
                handle_user_passwd(&mut ctx, &username, &password)
            }
            UserCommands::Rm { username } => handle_user_rm(&mut ctx, &username),
        },
        Commands::Quiz(cmd) => match cmd {
            QuizCommands::Add {
                username,
                name,
                description,
            } => handle_quiz_add(&mut ctx, &username, &name, &description),
            QuizCommands::List { username } => handle_quiz_list(&ctx, &username),
            QuizCommands::Show { id } => handle_quiz_show(&ctx, &id),
            QuizCommands::Edit {
                id,
                name,
                description,
            } => handle_quiz_edit(&mut ctx, &id, QuizEdit { name, description }),
            QuizCommands::Rm { id } => handle_quiz_rm(&mut ctx, &id),
        },
        Commands::Card(cmd) => match cmd {
            CardCommands::Add {
                quiz_id,
                front,
                answer,
            } => handle_card_add(&mut ctx, &quiz_id, &front, &answer),
            CardCommands::Rm { quiz_id, card_id } => handle_card_rm(&mut ctx, &quiz_id, &card_id),
        },
        Commands::Path => handle_path(&ctx),
        Commands::Config => handle_config(&ctx),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match &cli.home {
        Some(home) => StorageConfig::new(home),
        None => StorageConfig::from_env()?,
    };
    let mode = if cli.test {
        StorageMode::Test
    } else {
        StorageMode::Normal
    };
    let config = config.with_mode(mode);
    debug!(path = %config.storage_path().display(), "resolved storage");

    let store = FileStore::new(&config)?;
    Ok(AppContext {
        api: CognitionApi::new(store),
        config,
    })
}

fn handle_user_add(ctx: &mut AppContext, username: &str, password: &str) -> Result<()> {
    let result = ctx.api.register_user(username, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_user_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_users()?;
    print_users(&result.listed_users);
    Ok(())
}

fn handle_user_show(ctx: &AppContext, username: &str) -> Result<()> {
    let result = ctx.api.get_user(username)?;
    print_users(&result.listed_users);
    for user in &result.listed_users {
        println!();
        print_quiz_titles(&user.compact_quizzes());
    }
    Ok(())
}

fn handle_user_rename(ctx: &mut AppContext, username: &str, new_username: &str) -> Result<()> {
    let result = ctx.api.rename_user(username, new_username)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_user_passwd(ctx: &mut AppContext, username: &str, password: &str) -> Result<()> {
    let result = ctx.api.change_password(username, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_user_rm(ctx: &mut AppContext, username: &str) -> Result<()> {
    let result = ctx.api.delete_user(username)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quiz_add(
    ctx: &mut AppContext,
    username: &str,
    name: &str,
    description: &str,
) -> Result<()> {
    let result = ctx.api.create_quiz(username, name, description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quiz_list(ctx: &AppContext, username: &str) -> Result<()> {
    let result = ctx.api.quiz_titles(username)?;
    print_quiz_titles(&result.quiz_titles);
    Ok(())
}

fn handle_quiz_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_quiz(id)?;
    print_full_quizzes(&result.listed_quizzes);
    Ok(())
}

fn handle_quiz_edit(ctx: &mut AppContext, id: &str, edit: QuizEdit) -> Result<()> {
    let result = ctx.api.edit_quiz(id, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quiz_rm(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_quiz(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_card_add(ctx: &mut AppContext, quiz_id: &str, front: &str, answer: &str) -> Result<()> {
    let result = ctx.api.add_flashcard(quiz_id, front, answer)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_card_rm(ctx: &mut AppContext, quiz_id: &str, card_id: &str) -> Result<()> {
    let result = ctx.api.remove_flashcard(quiz_id, card_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.store().path().display());
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}
