use clap::Parser;
use colored::*;
use patch_robot::batch::{self, CmdMessage, MessageLevel};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();

    let report = batch::run(&cli.files);
    print_messages(&report.messages);

    if !report.all_patched() {
        std::process::exit(1);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
