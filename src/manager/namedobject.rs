use serde::{
    Serialize,
    Deserialize
};

/// Only the `name` field of a JSON object, used as the manager key.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}
