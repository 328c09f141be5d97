use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Program, "program");

/// A broadcast TV or radio program. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    pub channel: String,
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramChange {
    pub name: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgramFilter {
    pub name: Option<String>,
    pub channel: Option<String>,
    pub operation: Option<Operation>,
}

impl Program {
    pub fn new(id: ProgramId, change: ProgramChange) -> Self {
        Self {
            id,
            name: change.name.unwrap_or_default(),
            channel: change.channel.unwrap_or_default(),
            duration: change.duration,
        }
    }
}

impl Record for Program {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "channel" => Some(self.channel.as_str().into()),
            "duration" => self.duration.map(FieldValue::from),
            _ => None,
        }
    }
}

impl Filter<Program> for ProgramFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("name", self.name.as_deref(), self.operation),
            Criterion::matching("channel", self.channel.as_deref(), self.operation),
        ]
    }
}
