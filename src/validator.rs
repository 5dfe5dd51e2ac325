use crate::{compilation::JsonSchema, context::ValidationContext};
use serde_json::{Map, Number, Value};

/// A keyword check bound to a schema node.
///
/// Most keywords constrain a single kind of instance; they implement the matching
/// `validate_*` hook and rely on `validate` to dispatch on the instance kind.
/// Keywords that apply to every kind override `validate` itself.
pub(crate) trait Validate {
    #[inline]
    fn validate_array(
        &self,
        _schema: &JsonSchema<'_>,
        _ctx: &mut ValidationContext<'_>,
        _instance_value: &[Value],
    ) {
    }
    #[inline]
    fn validate_object(
        &self,
        _schema: &JsonSchema<'_>,
        _ctx: &mut ValidationContext<'_>,
        _instance_value: &Map<String, Value>,
    ) {
    }
    #[inline]
    fn validate_number(
        &self,
        _schema: &JsonSchema<'_>,
        _ctx: &mut ValidationContext<'_>,
        _instance_value: &Number,
    ) {
    }
    #[inline]
    fn validate_string(
        &self,
        _schema: &JsonSchema<'_>,
        _ctx: &mut ValidationContext<'_>,
        _instance_value: &str,
    ) {
    }
    #[inline]
    fn validate(&self, schema: &JsonSchema<'_>, ctx: &mut ValidationContext<'_>, instance: &Value) {
        match instance {
            Value::Array(instance_array) => self.validate_array(schema, ctx, instance_array),
            Value::Object(instance_object) => self.validate_object(schema, ctx, instance_object),
            Value::Number(instance_number) => self.validate_number(schema, ctx, instance_number),
            Value::String(instance_string) => self.validate_string(schema, ctx, instance_string),
            Value::Bool(_) | Value::Null => {}
        }
    }
}
