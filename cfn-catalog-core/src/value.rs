//! Value - A literal or an intrinsic function call
//!
//! Every primitive property in the catalog is typed as `Value<T>`, so a
//! template can carry either `"my-bucket"` or `{"Ref": "BucketName"}` in the
//! same field.

use serde::{Deserialize, Serialize};

use crate::intrinsic::{Intrinsic, PseudoParameter};

/// Literal `T` or an intrinsic evaluated at deployment time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value<T> {
    // Intrinsic comes first so single-key objects are never read as literals
    Intrinsic(Intrinsic),
    Literal(T),
}

impl<T> Value<T> {
    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(i) => Some(i),
            Value::Literal(_) => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Literal(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

macro_rules! impl_from_intrinsic {
    ($($ty:ty),*) => {
        $(
            impl From<Intrinsic> for Value<$ty> {
                fn from(intrinsic: Intrinsic) -> Self {
                    Value::Intrinsic(intrinsic)
                }
            }

            impl From<PseudoParameter> for Value<$ty> {
                fn from(param: PseudoParameter) -> Self {
                    Value::Intrinsic(param.into())
                }
            }
        )*
    };
}

impl_from_intrinsic!(String, i64, f64, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_string() {
        let v: Value<String> = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(v.as_literal().map(String::as_str), Some("hello"));
        assert_eq!(serde_json::to_value(&v).unwrap(), json!("hello"));
    }

    #[test]
    fn intrinsic_in_integer_field() {
        let v: Value<i64> = serde_json::from_value(json!({"Ref": "RetentionDays"})).unwrap();
        assert_eq!(v, Value::<i64>::from(Intrinsic::reference("RetentionDays")));
    }

    #[test]
    fn plain_object_in_string_field_is_rejected() {
        let result: Result<Value<String>, _> = serde_json::from_value(json!({"Foo": "bar"}));
        assert!(result.is_err());
    }

    #[test]
    fn integer_accepted_as_double() {
        let v: Value<f64> = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(v, Value::Literal(5.0));
    }

    #[test]
    fn pseudo_parameter_into_value() {
        let v: Value<String> = PseudoParameter::AccountId.into();
        assert!(v.is_intrinsic());
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"Ref": "AWS::AccountId"})
        );
    }
}
