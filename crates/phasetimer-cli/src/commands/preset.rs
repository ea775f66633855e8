use clap::Subcommand;

use phasetimer_core::PresetStore;

use crate::common::Mode;

#[derive(Subcommand)]
pub enum PresetAction {
    /// List preset names and modes
    List,
    /// Print one preset as JSON
    Show { name: String },
    /// Save a mode configuration under a name
    Save {
        name: String,
        #[command(subcommand)]
        mode: Mode,
    },
    /// Remove a preset
    Remove { name: String },
}

pub fn run(action: PresetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PresetStore::load()?;

    match action {
        PresetAction::List => {
            for (name, preset) in &store.presets {
                println!("{name}  ({})", preset.mode_name());
            }
        }
        PresetAction::Show { name } => {
            let preset = store.get(&name)?;
            println!("{}", serde_json::to_string_pretty(preset)?);
        }
        PresetAction::Save { name, mode } => {
            let preset = mode.resolve()?;
            // Validate before persisting.
            preset.build()?;
            store.presets.insert(name.clone(), preset);
            store.save()?;
            println!("saved preset '{name}'");
        }
        PresetAction::Remove { name } => {
            if store.presets.remove(&name).is_none() {
                eprintln!("no preset named '{name}'");
            } else {
                store.save()?;
                println!("removed preset '{name}'");
            }
        }
    }
    Ok(())
}
