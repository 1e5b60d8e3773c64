use std::io;

use anyhow::{Result, bail};
use clap::CommandFactory;
use tracing::info;

use crate::cli::{Args, Commands, DisplayFlags};
use crate::completer::{FilterMode, SelectionMode};
use crate::pointer::PointerHub;
use crate::stories::{self, StorySource};
use crate::widget::{AutocompleteWidget, props::WidgetProps};
use crate::{config, terminal_utils, util};

pub fn handle(args: Args) -> Result<()> {
    match args.command {
        Commands::Run {
            candidates,
            file,
            label,
            flags,
        } => {
            let mut candidates = candidates;
            if let Some(path) = file {
                candidates.extend(util::read_candidates(&path)?);
            }

            if candidates.is_empty() {
                bail!("No candidates given; pass them as arguments or with --file");
            }

            let config = config::load()?;
            let mut props = config.props_for(candidates);
            if let Some(label) = label {
                props.label = label;
            }
            props.title = stories::story_title("run");

            run(apply_flags(props, flags))
        }
        Commands::Story { name, flags } => {
            let config = config::load()?;
            let Some(props) = stories::resolve(&name, &config) else {
                bail!("Unknown story `{name}`; see `autocompleter stories`");
            };

            run(apply_flags(props, flags))
        }
        Commands::Stories => {
            let config = config::load()?;
            for story in stories::list(&config) {
                let source = match story.source {
                    StorySource::Builtin => "",
                    StorySource::Config => " (config)",
                };
                println!(
                    "{:<16}{:>3} candidates{}",
                    story.name, story.candidates, source
                );
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Args::command(),
                "autocompleter",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

/// CLI flags only ever switch options on.
pub fn apply_flags(mut props: WidgetProps, flags: DisplayFlags) -> WidgetProps {
    if flags.multiple {
        props.selection_mode = SelectionMode::Multiple;
    }
    if flags.alternate_background {
        props.alternate_background = true;
    }
    if flags.fuzzy {
        props.filter_mode = FilterMode::Fuzzy;
    }
    props
}

fn run(props: WidgetProps) -> Result<()> {
    info!(title = props.title.as_str(), "starting widget");

    let mut terminal = terminal_utils::init()?;
    let pointer = PointerHub::new();
    let result = AutocompleteWidget::mount(props, &pointer).run(&mut terminal);
    terminal_utils::restore(terminal)?;

    for value in result? {
        println!("{value}");
    }

    Ok(())
}
