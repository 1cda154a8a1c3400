use std::cell::{
    Cell,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::namedobject::NamedJsonObject;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::quadrature::integrationoptions::IntegrationOptions;
use crate::math::quadrature::integrationrequest::IntegrationRequest;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::QuadratureRule;

pub const DEFAULT_REQUEST_NAME: &'static str = "default";


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    options: IntegrationOptions,
    #[serde(default)]
    requests: Vec<serde_json::Value>
}

/// Integration options plus a set of named integration requests.
///
/// The `"default"` request (1/sqrt(1+x^4) on [0, 2], tolerance 1e-6) is always
/// registered; a configuration file may override it by name.
pub struct Configuration {
    options_cell: Cell<IntegrationOptions>,
    request_manager_cell: RefCell<Manager<IntegrationRequest>>
}


impl Configuration {
    pub fn new() -> Configuration {
        let request_manager = Manager::new(IntegrationRequest::from_json);
        request_manager.insert(DEFAULT_REQUEST_NAME, IntegrationRequest::default());
        Configuration {
            options_cell: Cell::new(IntegrationOptions::default()),
            request_manager_cell: RefCell::new(request_manager)
        }
    }

    pub fn options(&self) -> IntegrationOptions {
        self.options_cell.get()
    }

    pub fn set_options(&self, options: IntegrationOptions) -> Result<(), QuadratureError> {
        options.validate()?;
        self.options_cell.set(options);
        Ok(())
    }

    pub fn request_manager(&self) -> RefMut<'_, Manager<IntegrationRequest>> {
        let borrow = self.request_manager_cell.borrow_mut();
        borrow
    }

    pub fn request(&self, name: &str) -> Result<IntegrationRequest, ManagerError> {
        self.request_manager().get(name)
    }

    /// Gauss-Legendre rule of the configured order.
    pub fn rule(&self) -> Result<QuadratureRule, QuadratureError> {
        QuadratureRule::gauss_legendre(self.options().rule_order())
    }

    /// Loads options and requests from a JSON file.
    ///
    /// Nothing is changed unless the whole file is valid.
    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref()).map_err(|error| ManagerError::IOError(error))?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader).map_err(|error| ManagerError::JsonParseError(error))?;
        json_prop.options.validate()?;

        let mut requests: Vec<(String, IntegrationRequest)> = Vec::with_capacity(json_prop.requests.len());
        for json_value in &json_prop.requests {
            let named: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
            let request = IntegrationRequest::from_json(json_value.clone())?;
            requests.push((named.name().clone(), request));
        }

        self.options_cell.set(json_prop.options);
        let request_manager = self.request_manager_cell.borrow_mut();
        for (name, request) in requests {
            request_manager.insert(&name, request);
        }
        info!(
            path = %file_path.as_ref().display(),
            requests = json_prop.requests.len(),
            "configuration loaded"
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
