use serde::Deserialize;
use thiserror::Error;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error(transparent)]
    InvalidInput(#[from] QuadratureError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self> 
        where T : for<'a> Deserialize<'a> {
        let obj_result: Result<T, serde_json::Error> = serde_json::from_value(json_value);
        obj_result.map_or_else(
            |err| Err(ManagerError::JsonParseError(err)), 
            |elem| Ok(elem)
        )
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}
