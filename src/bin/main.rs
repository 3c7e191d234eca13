use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use undolist::{CommandStack, Target};

use crate::cli::{
    script::{Element, Step},
    verbosity::Verbosity,
};

mod cli {
    pub mod script;
    pub mod verbosity;
}

/// Applies insert, delete, undo and redo steps to a sorted list and prints the result.
#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Opts {
    /// Initial elements of the list, separated by commas
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, default_value = "2,5,7")]
    list: Vec<Element>,

    /// Print the list after every step instead of only at the end
    #[arg(short, long)]
    show_steps: bool,

    /// Steps to run, e.g. `insert:1`, `delete:5`, `undo`, `undo:2` or `redo`
    #[arg(default_value = "insert:1")]
    steps: Vec<Step>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn render(list: &Target<Element>) -> String {
    format!("[{}]", list.borrow().iter().join(", "))
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    opts.verbosity
        .configure()
        .with_context(|| "Initialize the logger")?;
    log::debug!("{:?}", opts);

    let list = undolist::sorted_target(opts.list);
    let mut stack = CommandStack::new();
    for (i, step) in opts.steps.into_iter().enumerate() {
        step.run(&mut stack, &list)
            .with_context(|| format!("Step {} `{}`", i + 1, step))?;
        if opts.show_steps {
            println!("{} => {}", step, render(&list));
        }
    }
    if !opts.show_steps {
        println!("{}", render(&list));
    }
    Ok(())
}
