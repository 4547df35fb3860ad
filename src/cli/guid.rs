//! `basetools guid`: GUID format conversion.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::core::BasetoolsError;
use crate::utils::guid::{
    guid_string_to_struct_string, guid_struct_string_to_guid_string,
    guid_struct_string_to_value_name,
};

/// Convert GUIDs between formats, one result per line.
#[derive(Args)]
pub struct GuidCommand {
    #[command(subcommand)]
    action: GuidAction,
}

#[derive(Subcommand)]
enum GuidAction {
    /// Registry format (xxxxxxxx-xxxx-...) to C structure initializer
    ToStruct {
        #[arg(required = true, value_name = "GUID")]
        guids: Vec<String>,
    },

    /// C structure initializer to registry format
    ToRegistry {
        #[arg(required = true, value_name = "STRUCT")]
        values: Vec<String>,
    },

    /// C structure initializer to an identifier-safe value name
    ValueName {
        #[arg(required = true, value_name = "STRUCT")]
        values: Vec<String>,
    },
}

type Converter = fn(&str) -> Result<String, BasetoolsError>;

impl GuidCommand {
    pub fn execute(self) -> Result<()> {
        let (inputs, convert): (Vec<String>, Converter) = match self.action {
            GuidAction::ToStruct {
                guids,
            } => (guids, guid_string_to_struct_string as Converter),
            GuidAction::ToRegistry {
                values,
            } => (values, guid_struct_string_to_guid_string as Converter),
            GuidAction::ValueName {
                values,
            } => (values, guid_struct_string_to_value_name as Converter),
        };

        for input in &inputs {
            println!("{}", convert(input)?);
        }
        Ok(())
    }
}
