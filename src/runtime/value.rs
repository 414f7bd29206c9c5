use std::rc::Rc;

use crate::runtime::{
    closure::Closure,
    error::CoercionError,
    gc::{GcHandle, GcHeap},
    native_function::NativeFunction,
    number::{format_number, parse_numeric_string},
    property_map::PropertyMap,
};

/// Runtime value stored in a heap slot.
///
/// Compound kinds never embed other values directly: arrays, objects and
/// closures refer to their children through [`GcHandle`]s (or a scope id), so
/// the collector alone decides their lifetime. Every embedded handle must name
/// a live slot.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Numeric(f64),
    String(Rc<str>),
    /// Result of a failed numeric coercion. Never stored as `Numeric(NaN)`.
    NaN,
    Array(ArrayData),
    Object(PropertyMap),
    Function(Rc<Closure>),
    NativeFunction(NativeFunction),
}

/// Dense elements plus any non-index properties of an array.
#[derive(Debug, Clone, Default)]
pub struct ArrayData {
    pub elements: Vec<GcHandle>,
    pub properties: PropertyMap,
}

impl ArrayData {
    pub fn new(elements: Vec<GcHandle>) -> Self {
        Self {
            elements,
            properties: PropertyMap::new(),
        }
    }
}

impl Value {
    /// Numeric value, folding a NaN result into the NaN kind.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Value::NaN
        } else {
            Value::Numeric(value)
        }
    }

    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::String(text.into())
    }

    /// Kind name, as reported by the `typeof` native.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Numeric(_) => "number",
            Value::String(_) => "string",
            Value::NaN => "NaN",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) | Value::NativeFunction(_) => "function",
        }
    }

    /// Kinds compared by heap identity rather than by content.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::NativeFunction(_)
        )
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn to_number(&self) -> Result<f64, CoercionError> {
        match self {
            Value::Undefined => Err(CoercionError),
            Value::Null => Ok(0.0),
            Value::Boolean(value) => Ok(if *value { 1.0 } else { 0.0 }),
            Value::Numeric(value) => Ok(*value),
            Value::String(text) => parse_numeric_string(text).ok_or(CoercionError),
            Value::NaN => Ok(0.0),
            Value::Array(_) | Value::Object(_) => Err(CoercionError),
            Value::Function(_) | Value::NativeFunction(_) => Ok(0.0),
        }
    }

    /// Falsy: Undefined, Null, `false`, `0`, NaN and `""`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null | Value::NaN => false,
            Value::Boolean(value) => *value,
            Value::Numeric(value) => *value != 0.0,
            Value::String(text) => !text.is_empty(),
            Value::Array(_)
            | Value::Object(_)
            | Value::Function(_)
            | Value::NativeFunction(_) => true,
        }
    }

    /// Handles this value keeps alive: elements first, then properties.
    pub fn children(&self) -> impl Iterator<Item = GcHandle> + '_ {
        let (elements, properties): (&[GcHandle], Option<&PropertyMap>) = match self {
            Value::Array(array) => (&array.elements, Some(&array.properties)),
            Value::Object(properties) => (&[], Some(properties)),
            _ => (&[], None),
        };
        elements
            .iter()
            .copied()
            .chain(properties.into_iter().flat_map(PropertyMap::handles))
    }

    /// String form of the value, following element and property handles.
    ///
    /// Fails when a nested value cannot be rendered, which includes a
    /// structure that contains itself.
    pub fn to_display_string(&self, heap: &GcHeap) -> Result<String, CoercionError> {
        let mut out = String::new();
        let mut visiting = Vec::new();
        self.write_display(heap, &mut visiting, &mut out)?;
        Ok(out)
    }

    fn write_display(
        &self,
        heap: &GcHeap,
        visiting: &mut Vec<GcHandle>,
        out: &mut String,
    ) -> Result<(), CoercionError> {
        match self {
            Value::Undefined => out.push_str("undefined"),
            Value::Null => out.push_str("null"),
            Value::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
            Value::Numeric(value) => out.push_str(&format_number(*value)),
            Value::String(text) => out.push_str(text),
            Value::NaN => out.push_str("NaN"),
            Value::Array(array) => {
                out.push_str("[ ");
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_child(*element, heap, visiting, out)?;
                }
                out.push_str(" ]");
            }
            Value::Object(properties) => {
                if properties.is_empty() {
                    out.push_str("{}");
                    return Ok(());
                }
                out.push_str("{ ");
                for (i, (key, handle)) in properties.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(key);
                    out.push_str(": ");
                    write_child(handle, heap, visiting, out)?;
                }
                out.push_str(" }");
            }
            Value::Function(closure) => {
                out.push_str("function ");
                out.push_str(closure.name.as_deref().unwrap_or(""));
                out.push_str("() { [code] }");
            }
            Value::NativeFunction(native) => {
                out.push_str("function ");
                out.push_str(&native.name);
                out.push_str("() { [native code] }");
            }
        }
        Ok(())
    }
}

fn write_child(
    handle: GcHandle,
    heap: &GcHeap,
    visiting: &mut Vec<GcHandle>,
    out: &mut String,
) -> Result<(), CoercionError> {
    if visiting.contains(&handle) {
        return Err(CoercionError);
    }
    let value = heap.try_get(handle).ok_or(CoercionError)?;
    visiting.push(handle);
    let result = value.write_display(heap, visiting, out);
    visiting.pop();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_number_follows_kind_table() {
        assert!(Value::Undefined.to_number().is_err());
        assert_eq!(Value::Null.to_number(), Ok(0.0));
        assert_eq!(Value::Boolean(true).to_number(), Ok(1.0));
        assert_eq!(Value::string("3.5").to_number(), Ok(3.5));
        assert!(Value::string("abc").to_number().is_err());
        assert_eq!(Value::NaN.to_number(), Ok(0.0));
        assert!(Value::Object(PropertyMap::new()).to_number().is_err());
        assert!(Value::Array(ArrayData::default()).to_number().is_err());
    }

    #[test]
    fn numeric_string_round_trip() {
        let heap = GcHeap::new();
        let number = Value::string("3.5").to_number().unwrap();
        assert_eq!(
            Value::Numeric(number).to_display_string(&heap).unwrap(),
            "3.5"
        );
    }

    #[test]
    fn falsy_set() {
        for value in [
            Value::Undefined,
            Value::Null,
            Value::Boolean(false),
            Value::Numeric(0.0),
            Value::Numeric(-0.0),
            Value::NaN,
            Value::string(""),
        ] {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }
        assert!(Value::string("0").is_truthy());
        assert!(Value::Object(PropertyMap::new()).is_truthy());
        assert!(Value::Array(ArrayData::default()).is_truthy());
    }

    #[test]
    fn nan_results_fold_into_nan_kind() {
        assert!(matches!(Value::number(f64::NAN), Value::NaN));
        assert!(matches!(Value::number(1.0), Value::Numeric(_)));
    }

    #[test]
    fn stringifies_nested_structures() {
        let mut heap = GcHeap::new();
        let one = heap.alloc(Value::Numeric(1.0));
        let text = heap.alloc(Value::string("x"));
        let mut properties = PropertyMap::new();
        properties.insert(Rc::from("a"), one);
        properties.insert(Rc::from("b"), text);
        let object = heap.alloc(Value::Object(properties));
        let array = Value::Array(ArrayData::new(vec![one, object]));

        assert_eq!(
            array.to_display_string(&heap).unwrap(),
            "[ 1, { a: 1, b: x } ]"
        );
        assert_eq!(
            Value::Object(PropertyMap::new())
                .to_display_string(&heap)
                .unwrap(),
            "{}"
        );
        assert_eq!(
            Value::Array(ArrayData::default())
                .to_display_string(&heap)
                .unwrap(),
            "[  ]"
        );
    }

    #[test]
    fn cyclic_structure_fails_to_stringify() {
        let mut heap = GcHeap::new();
        let object = heap.alloc(Value::Object(PropertyMap::new()));
        if let Value::Object(properties) = heap.get_mut(object) {
            properties.insert(Rc::from("me"), object);
        }
        assert_eq!(heap.get(object).to_display_string(&heap), Err(CoercionError));
    }
}
