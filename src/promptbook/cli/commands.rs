use super::render::{format_full_prompt, format_list, print_messages};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use promptbook::api::{CmdMessage, CmdResult, PromptApi};
use promptbook::clipboard::copy_to_clipboard;
use promptbook::config::PromptbookConfig;
use promptbook::error::Result;
use promptbook::markup::escape_text;
use promptbook::store::fs::FileSlot;
use std::io;

struct AppContext {
    api: PromptApi<FileSlot>,
    preview_width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term)),
        Some(Commands::Create { title, content }) => handle_create(&mut ctx, &title, &content),
        Some(Commands::Edit { id, title, content }) => {
            handle_edit(&mut ctx, &id, &title, &content)
        }
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Copy { id }) => handle_copy(&ctx, &id),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        None => handle_list(&mut ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = PromptbookConfig::load()?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let data_dir = config.resolve_data_dir()?;
    log::debug!("Using data directory {}", data_dir.display());

    Ok(AppContext {
        api: PromptApi::new(FileSlot::new(data_dir)),
        preview_width: config.preview_width,
    })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list(search.as_deref());
    print_list(ctx, &result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, title: &str, content: &str) -> Result<()> {
    let result = ctx.api.save(title, &escape_text(content))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, title: &str, content: &str) -> Result<()> {
    let result = ctx.api.edit(id, title, &escape_text(content))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view(id);
    if let Some(prompt) = &result.prompt {
        println!("{}", format_full_prompt(prompt));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete(ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.copy(Some(id));
    if let Some(text) = &result.clipboard {
        copy_to_clipboard(text)?;
        print_messages(&[CmdMessage::success("Content copied to clipboard")]);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.location().display());
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(
        &mut ctx.api,
        ctx.preview_width,
        stdin.lock(),
        &mut stdout,
        copy_to_clipboard,
    )
}

fn print_list(ctx: &AppContext, result: &CmdResult) {
    for line in format_list(&result.listed, ctx.preview_width) {
        println!("{}", line);
    }
}
