use std::io::Read;
use std::path::Path;

use crate::cli::commands::ReplayArgs;
use crate::cli::output::*;
use crate::io::session_log::SessionLog;
use crate::ops::script;
use crate::ops::{Projection, Store};

/// Run a script of intents through a fresh store and print the final view
pub fn cmd_replay(args: ReplayArgs, log: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_script(&args.script)?;
    let intents = script::parse_script(&source)?;

    let mut store = Store::new();
    if let Some(path) = log {
        SessionLog::open(path)?.attach(&mut store);
    }
    store.dispatch_all(intents);

    let view = Projection::new(store.state());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view_to_json(&view))?);
    } else {
        for line in format_view(&view) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn read_script(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| format!("could not read {}: {}", source, e).into())
    }
}
