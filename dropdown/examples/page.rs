use std::fs::File;

use dropdown::page::sample_document;
use dropdown::{install_all, panel_state, DropdownConfig, DropdownError};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Clicks replayed against the page, by element ID.
const SCRIPT: &[&str] = &[
    "dropdown-btn",
    "hero-title",
    "faq-dropdown-btn",
    "dropdown-btn",
    "lang-en",
    "faq-dropdown-btn",
    "faq-dropdown-btn",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("page.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    // Optional config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => DropdownConfig::from_path(path)?,
        None => DropdownConfig::default(),
    };

    let mut doc = sample_document();
    let handles = install_all(&mut doc, &config)?;
    println!("installed {} dropdown families", handles.len());

    for target in SCRIPT {
        let outcome = doc.click(target)?;
        let states = config
            .families
            .iter()
            .map(|f| {
                let state = panel_state(doc.root(), &f.panel_id, &f.visibility_class)
                    .ok_or_else(|| DropdownError::PanelNotFound {
                        id: f.panel_id.clone(),
                    })?;
                Ok(format!("{}={state}", f.name))
            })
            .collect::<Result<Vec<_>, DropdownError>>()?;

        println!(
            "click #{target:<18} listeners={} faults={}  {}",
            outcome.listeners_run,
            outcome.faults.len(),
            states.join(" ")
        );
    }

    Ok(())
}
