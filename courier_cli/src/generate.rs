use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the schema
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Describe the kitchen snapshot instead of the batch snapshot
        #[arg(long)]
        kitchen: bool,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out, kitchen } => {
            let schema = if kitchen {
                courier_engine::json::schema::generate_kitchen_json_schema()?
            } else {
                courier_engine::json::schema::generate_json_schema()?
            };

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
