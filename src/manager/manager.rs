use std::cell::{
    RefCell, RefMut
};
use std::collections::BTreeMap;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>>;
    
    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert(&self, name: &str, elem: V) {
        self.map().insert(name.to_owned(), elem);
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        let elem_opt = map.get(name);
        elem_opt.map_or(
            Err(ManagerError::map_elem_not_found(name)), 
            |elem| Ok(elem.clone())
        )
    }

    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn insert_obj_from_json_vec(&self, json_vec: &Vec<serde_json::Value>) -> Result<(), ManagerError> {                
        for j in json_vec.iter() {
            let _ = self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


/// Name-keyed store whose entries are built from JSON objects carrying a
/// `name` field.
pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where 
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {   
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?; 
        let v = (self.get_obj_from_json)(json_value)?;
        debug!(name = named_object.name().as_str(), "registered");
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
} 
