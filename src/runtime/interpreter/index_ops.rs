use std::rc::Rc;

use crate::runtime::{
    error::RuntimeError,
    gc::{GcHandle, GcHeap},
    number::{format_number, number_to_index, parse_array_index},
    scope::ScopeId,
    value::Value,
};
use crate::syntax::ast::MemberProperty;

use super::Interpreter;

/// Index writes further than this past the end of an array are stored as
/// named properties instead of growing the element list.
const MAX_ARRAY_GAP: usize = 1 << 16;

/// Resolved property of a member expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Index(usize),
    Name(Rc<str>),
}

impl PropertyKey {
    pub fn from_name(name: &Rc<str>) -> Self {
        match parse_array_index(name) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(Rc::clone(name)),
        }
    }

    /// Key named by a computed property value. Integral numbers become
    /// indices; everything else is used by its string form.
    pub fn from_value(value: &Value, heap: &GcHeap) -> Self {
        match value {
            Value::Numeric(number) => match number_to_index(*number) {
                Some(index) => PropertyKey::Index(index),
                None => PropertyKey::from_name(&Rc::from(format_number(*number))),
            },
            Value::String(text) => PropertyKey::from_name(text),
            other => match other.to_display_string(heap) {
                Ok(text) => PropertyKey::from_name(&Rc::from(text)),
                Err(_) => PropertyKey::Name(Rc::from("NaN")),
            },
        }
    }

    /// Key as an object property name.
    pub fn name(&self) -> Rc<str> {
        match self {
            PropertyKey::Index(index) => Rc::from(index.to_string()),
            PropertyKey::Name(name) => Rc::clone(name),
        }
    }

    fn is_length(&self) -> bool {
        matches!(self, PropertyKey::Name(name) if name.as_ref() == "length")
    }
}

enum Lookup {
    Found(GcHandle),
    Create(Value),
}

impl Interpreter {
    pub(super) fn property_key(
        &mut self,
        property: &MemberProperty,
        scope: ScopeId,
    ) -> Result<PropertyKey, RuntimeError> {
        match property {
            MemberProperty::Named(name) => Ok(PropertyKey::from_name(name)),
            MemberProperty::Computed(expression) => {
                let value = self.evaluate(expression, scope)?;
                Ok(PropertyKey::from_value(self.heap.get(value), &self.heap))
            }
        }
    }

    /// Reads `target[key]`. Missing properties read as Undefined.
    pub fn get_property(&mut self, target: GcHandle, key: &PropertyKey) -> GcHandle {
        let lookup = match self.heap.get(target) {
            Value::Array(array) => match key {
                PropertyKey::Index(index) => array.elements.get(*index).copied().map(Lookup::Found),
                PropertyKey::Name(_) if key.is_length() => {
                    Some(Lookup::Create(Value::Numeric(array.elements.len() as f64)))
                }
                PropertyKey::Name(name) => array.properties.get(name).map(Lookup::Found),
            },
            Value::Object(properties) => properties.get(&key.name()).map(Lookup::Found),
            Value::String(text) => match key {
                PropertyKey::Index(index) => text
                    .chars()
                    .nth(*index)
                    .map(|ch| Lookup::Create(Value::string(ch.to_string()))),
                PropertyKey::Name(_) if key.is_length() => {
                    Some(Lookup::Create(Value::Numeric(text.chars().count() as f64)))
                }
                PropertyKey::Name(_) => None,
            },
            _ => None,
        };

        match lookup {
            Some(Lookup::Found(handle)) => handle,
            Some(Lookup::Create(value)) => self.alloc(value),
            None => self.alloc(Value::Undefined),
        }
    }

    /// Writes `target[key] = value`. Writes to primitives and to an array's
    /// `length` are ignored.
    pub fn set_property(&mut self, target: GcHandle, key: PropertyKey, value: GcHandle) {
        let array_len = match self.heap.get(target) {
            Value::Array(array) => Some(array.elements.len()),
            Value::Object(_) => None,
            _ => return,
        };

        let Some(len) = array_len else {
            if let Value::Object(properties) = self.heap.get_mut(target) {
                properties.insert(key.name(), value);
            }
            return;
        };

        match key {
            PropertyKey::Index(index) if index <= len + MAX_ARRAY_GAP => {
                let holes: Vec<GcHandle> = (len..index)
                    .map(|_| self.heap.alloc(Value::Undefined))
                    .collect();
                if let Value::Array(array) = self.heap.get_mut(target) {
                    if index < len {
                        array.elements[index] = value;
                    } else {
                        array.elements.extend(holes);
                        array.elements.push(value);
                    }
                }
            }
            key if key.is_length() => {}
            key => {
                if let Value::Array(array) = self.heap.get_mut(target) {
                    array.properties.insert(key.name(), value);
                }
            }
        }
    }
}
