use crate::cli::CliContext;
use crate::core::store::FileStore;
use crate::models::wizard_kind::WizardKind;
use crate::prompt::TermPrompter;
use crate::util::clipboard::CommandClipboard;
use crate::wizard::Creator;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Print a generated value instead of copying it to the clipboard
    #[arg(long, short = 'p')]
    pub print: bool,

    /// Skip the type menu and run this wizard directly
    #[arg(long, value_enum)]
    pub kind: Option<WizardKind>,
}

pub fn run(ctx: &CliContext, args: CreateArgs) -> Result<()> {
    let mut store = FileStore::new(ctx.paths.clone(), ctx.config.store.mounts.clone());
    let mut prompter = TermPrompter::new();
    let mut clipboard = CommandClipboard::new(ctx.config.clipboard.command.clone());
    let mut stdout = std::io::stdout();

    let mut creator = Creator::new(&mut store, &mut prompter, &mut clipboard, &mut stdout)
        .with_generation(ctx.config.generation.clone())
        .with_print(args.print);

    let created = match args.kind {
        Some(kind) => creator.run_kind(kind)?,
        None => creator.run()?,
    };

    println!("Created {}", created.name);
    Ok(())
}
