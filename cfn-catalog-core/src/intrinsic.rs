//! Intrinsic - CloudFormation intrinsic functions
//!
//! Intrinsics are written in the single-key object form used by JSON
//! templates, e.g. `{"Fn::GetAtt": ["Bucket", "Arn"]}`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::value::Value;

/// Template keys recognized as intrinsic function calls
pub const INTRINSIC_FUNCTIONS: &[&str] = &[
    "Ref",
    "Condition",
    "Fn::And",
    "Fn::Base64",
    "Fn::Cidr",
    "Fn::Equals",
    "Fn::FindInMap",
    "Fn::GetAZs",
    "Fn::GetAtt",
    "Fn::If",
    "Fn::ImportValue",
    "Fn::Join",
    "Fn::Not",
    "Fn::Or",
    "Fn::Select",
    "Fn::Split",
    "Fn::Sub",
];

/// An intrinsic function call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intrinsic {
    #[serde(rename = "Ref")]
    Ref(String),
    #[serde(rename = "Fn::GetAtt")]
    GetAtt(GetAtt),
    #[serde(rename = "Fn::Sub")]
    Sub(Sub),
    #[serde(rename = "Fn::Join")]
    Join(String, Box<Value<Vec<Value<String>>>>),
    #[serde(rename = "Fn::Select")]
    Select(Box<Value<SelectIndex>>, Box<Value<Vec<Value<String>>>>),
    #[serde(rename = "Fn::Split")]
    Split(String, Box<Value<String>>),
    /// Condition name, value when true, value when false
    #[serde(rename = "Fn::If")]
    If(String, serde_json::Value, serde_json::Value),
    #[serde(rename = "Fn::FindInMap")]
    FindInMap(Box<Value<String>>, Box<Value<String>>, Box<Value<String>>),
    #[serde(rename = "Fn::GetAZs")]
    GetAZs(Box<Value<String>>),
    #[serde(rename = "Fn::ImportValue")]
    ImportValue(Box<Value<String>>),
    #[serde(rename = "Fn::Base64")]
    Base64(Box<Value<String>>),
    /// IP block, subnet count, CIDR bits
    #[serde(rename = "Fn::Cidr")]
    Cidr(Box<Value<String>>, Box<Value<i64>>, Box<Value<i64>>),
    #[serde(rename = "Fn::Equals")]
    Equals(serde_json::Value, serde_json::Value),
    #[serde(rename = "Fn::And")]
    And(Vec<Intrinsic>),
    #[serde(rename = "Fn::Or")]
    Or(Vec<Intrinsic>),
    #[serde(rename = "Fn::Not")]
    Not(Box<[Intrinsic; 1]>),
    #[serde(rename = "Condition")]
    Condition(String),
}

impl Intrinsic {
    /// `{"Ref": logical_id}`
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into())
    }

    /// `{"Fn::GetAtt": [logical_id, attribute]}`
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt(GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        })
    }

    /// `{"Fn::Sub": template}`
    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub(Sub::Template(template.into()))
    }

    /// `{"Fn::Join": [separator, [values...]]}`
    pub fn join<I, V>(separator: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<String>>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Intrinsic::Join(separator.into(), Box::new(Value::Literal(values)))
    }

    /// Template key of this function (e.g. `Fn::GetAtt`)
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt(_) => "Fn::GetAtt",
            Intrinsic::Sub(_) => "Fn::Sub",
            Intrinsic::Join(..) => "Fn::Join",
            Intrinsic::Select(..) => "Fn::Select",
            Intrinsic::Split(..) => "Fn::Split",
            Intrinsic::If(..) => "Fn::If",
            Intrinsic::FindInMap(..) => "Fn::FindInMap",
            Intrinsic::GetAZs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr(..) => "Fn::Cidr",
            Intrinsic::Equals(..) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Condition(_) => "Condition",
        }
    }
}

/// Arguments of `Fn::GetAtt`
///
/// Reads both `["Logical", "Attr"]` and `"Logical.Attr"`; always writes the
/// array form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAtt {
    pub logical_id: String,
    pub attribute: String,
}

impl Serialize for GetAtt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.logical_id, &self.attribute).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GetAtt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Form {
            Pair(String, String),
            Dotted(String),
        }

        match Form::deserialize(deserializer)? {
            Form::Pair(logical_id, attribute) => Ok(GetAtt {
                logical_id,
                attribute,
            }),
            Form::Dotted(s) => {
                let (logical_id, attribute) = s.split_once('.').ok_or_else(|| {
                    de::Error::custom(format!(
                        "Invalid Fn::GetAtt '{}', expected LogicalId.Attribute",
                        s
                    ))
                })?;
                Ok(GetAtt {
                    logical_id: logical_id.to_string(),
                    attribute: attribute.to_string(),
                })
            }
        }
    }
}

/// `Fn::Select` index, written as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectIndex {
    Number(i64),
    Text(String),
}

impl SelectIndex {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            SelectIndex::Number(n) => usize::try_from(*n).ok(),
            SelectIndex::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for SelectIndex {
    fn from(n: i64) -> Self {
        SelectIndex::Number(n)
    }
}

/// Arguments of `Fn::Sub`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sub {
    Template(String),
    WithVariables(String, BTreeMap<String, Value<String>>),
}

/// AWS pseudo parameters, referenced with `Ref`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoParameter {
    AccountId,
    NotificationArns,
    NoValue,
    Partition,
    Region,
    StackId,
    StackName,
    UrlSuffix,
}

impl PseudoParameter {
    pub const ALL: &'static [PseudoParameter] = &[
        PseudoParameter::AccountId,
        PseudoParameter::NotificationArns,
        PseudoParameter::NoValue,
        PseudoParameter::Partition,
        PseudoParameter::Region,
        PseudoParameter::StackId,
        PseudoParameter::StackName,
        PseudoParameter::UrlSuffix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PseudoParameter::AccountId => "AWS::AccountId",
            PseudoParameter::NotificationArns => "AWS::NotificationARNs",
            PseudoParameter::NoValue => "AWS::NoValue",
            PseudoParameter::Partition => "AWS::Partition",
            PseudoParameter::Region => "AWS::Region",
            PseudoParameter::StackId => "AWS::StackId",
            PseudoParameter::StackName => "AWS::StackName",
            PseudoParameter::UrlSuffix => "AWS::URLSuffix",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }
}

impl From<PseudoParameter> for Intrinsic {
    fn from(param: PseudoParameter) -> Self {
        Intrinsic::Ref(param.as_str().to_string())
    }
}

/// Returns true if a raw template value is a single intrinsic function call
pub fn is_intrinsic(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(map) if map.len() == 1 => map
            .keys()
            .next()
            .is_some_and(|k| INTRINSIC_FUNCTIONS.contains(&k.as_str())),
        _ => false,
    }
}

/// A reference from one template value to another template entity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Reference {
    /// `Ref` to a resource, parameter or pseudo parameter
    Ref(String),
    /// `Fn::GetAtt` on a resource
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `Ref`, `Fn::GetAtt` or `Fn::Sub` whose arguments do not parse
    Malformed { function: String, message: String },
}

static SUB_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}!][^}]*)\}").expect("valid Fn::Sub pattern"));

/// Collect every `Ref`, `Fn::GetAtt` and `Fn::Sub` variable in a raw value
pub fn collect_references(value: &serde_json::Value) -> Vec<Reference> {
    let mut refs = Vec::new();
    walk_references(value, &mut refs);
    refs
}

fn walk_references(value: &serde_json::Value, refs: &mut Vec<Reference>) {
    match value {
        serde_json::Value::Object(map) => {
            if map.len() == 1 {
                if let Some(target) = map.get("Ref") {
                    match target {
                        serde_json::Value::String(target) => {
                            refs.push(Reference::Ref(target.clone()))
                        }
                        other => {
                            refs.push(malformed("Ref", format!("expected a name, got {}", other)))
                        }
                    }
                    return;
                }
                if let Some(args) = map.get("Fn::GetAtt") {
                    collect_get_att_reference(args, refs);
                    return;
                }
                if let Some(args) = map.get("Fn::Sub") {
                    collect_sub_references(args, refs);
                    return;
                }
            }
            for v in map.values() {
                walk_references(v, refs);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                walk_references(item, refs);
            }
        }
        _ => {}
    }
}

fn malformed(function: &str, message: String) -> Reference {
    Reference::Malformed {
        function: function.to_string(),
        message,
    }
}

fn collect_get_att_reference(args: &serde_json::Value, refs: &mut Vec<Reference>) {
    match GetAtt::deserialize(args) {
        Ok(get_att) => refs.push(Reference::GetAtt {
            logical_id: get_att.logical_id,
            attribute: get_att.attribute,
        }),
        Err(e) => match args.as_array().map(Vec::as_slice) {
            // Attribute name computed by another intrinsic
            Some([serde_json::Value::String(_), attribute]) if is_intrinsic(attribute) => {
                walk_references(attribute, refs)
            }
            _ => refs.push(malformed("Fn::GetAtt", e.to_string())),
        },
    }
}

fn collect_sub_references(args: &serde_json::Value, refs: &mut Vec<Reference>) {
    let (template, variables) = match args {
        serde_json::Value::String(template) => (template.as_str(), None),
        serde_json::Value::Array(items) => match items.as_slice() {
            [serde_json::Value::String(template)] => (template.as_str(), None),
            [serde_json::Value::String(template), serde_json::Value::Object(vars)] => {
                (template.as_str(), Some(vars))
            }
            _ => {
                refs.push(malformed(
                    "Fn::Sub",
                    "expected [template, {variables}]".to_string(),
                ));
                return;
            }
        },
        other => {
            refs.push(malformed(
                "Fn::Sub",
                format!("expected a template string, got {}", other),
            ));
            return;
        }
    };

    for cap in SUB_VARIABLE.captures_iter(template) {
        let name = cap[1].trim();
        if variables.is_some_and(|vars| vars.contains_key(name)) {
            continue;
        }
        match name.split_once('.') {
            Some((logical_id, attribute)) => refs.push(Reference::GetAtt {
                logical_id: logical_id.to_string(),
                attribute: attribute.to_string(),
            }),
            None => refs.push(Reference::Ref(name.to_string())),
        }
    }

    if let Some(vars) = variables {
        for v in vars.values() {
            walk_references(v, refs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ref_serializes_as_single_key_object() {
        let value = serde_json::to_value(Intrinsic::reference("MyBucket")).unwrap();
        assert_eq!(value, json!({"Ref": "MyBucket"}));
    }

    #[test]
    fn get_att_reads_dotted_form_and_writes_array_form() {
        let parsed: Intrinsic = serde_json::from_value(json!({"Fn::GetAtt": "Vpc.CidrBlock"})).unwrap();
        assert_eq!(parsed, Intrinsic::get_att("Vpc", "CidrBlock"));
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({"Fn::GetAtt": ["Vpc", "CidrBlock"]})
        );
    }

    #[test]
    fn get_att_without_dot_is_rejected() {
        let result: Result<Intrinsic, _> = serde_json::from_value(json!({"Fn::GetAtt": "Vpc"}));
        assert!(result.is_err());
    }

    #[test]
    fn sub_with_variables() {
        let raw = json!({"Fn::Sub": ["arn:${Partition}:s3:::${Name}", {"Name": {"Ref": "BucketName"}}]});
        let parsed: Intrinsic = serde_json::from_value(raw.clone()).unwrap();
        match &parsed {
            Intrinsic::Sub(Sub::WithVariables(template, vars)) => {
                assert_eq!(template, "arn:${Partition}:s3:::${Name}");
                assert_eq!(
                    vars.get("Name"),
                    Some(&Value::Intrinsic(Intrinsic::reference("BucketName")))
                );
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn join_mixes_literals_and_intrinsics() {
        let join = Intrinsic::join(
            "-",
            vec![
                Value::<String>::from("app"),
                Value::Intrinsic(PseudoParameter::Region.into()),
            ],
        );
        assert_eq!(
            serde_json::to_value(&join).unwrap(),
            json!({"Fn::Join": ["-", ["app", {"Ref": "AWS::Region"}]]})
        );
    }

    #[test]
    fn select_accepts_nested_get_azs() {
        let raw = json!({"Fn::Select": [0, {"Fn::GetAZs": ""}]});
        let parsed: Intrinsic = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.function_name(), "Fn::Select");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn select_index_may_be_a_string() {
        let raw = json!({"Fn::Select": ["1", ["a", "b"]]});
        let parsed: Intrinsic = serde_json::from_value(raw.clone()).unwrap();
        match &parsed {
            Intrinsic::Select(index, _) => {
                let index = index.as_literal().unwrap();
                assert_eq!(index, &SelectIndex::Text("1".to_string()));
                assert_eq!(index.as_index(), Some(1));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);

        let by_ref: Intrinsic =
            serde_json::from_value(json!({"Fn::Select": [{"Ref": "Index"}, ["a"]]})).unwrap();
        assert!(matches!(by_ref, Intrinsic::Select(index, _) if index.is_intrinsic()));
        assert_eq!(SelectIndex::Number(-1).as_index(), None);
    }

    #[test]
    fn condition_functions_parse() {
        let raw = json!({"Fn::Not": [{"Fn::Equals": [{"Ref": "Env"}, "prod"]}]});
        let parsed: Intrinsic = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.function_name(), "Fn::Not");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn unknown_function_is_not_intrinsic() {
        assert!(is_intrinsic(&json!({"Ref": "X"})));
        assert!(is_intrinsic(&json!({"Fn::If": ["C", 1, 2]})));
        assert!(!is_intrinsic(&json!({"Fn::Unknown": "X"})));
        assert!(!is_intrinsic(&json!({"Ref": "X", "Other": 1})));
        assert!(!is_intrinsic(&json!("Ref")));
    }

    #[test]
    fn malformed_reference_arguments_are_reported() {
        let raw = json!({
            "A": {"Fn::GetAtt": "Nowhere"},
            "B": {"Ref": ["Vpc"]},
            "C": {"Fn::Sub": 42},
            "D": {"Fn::GetAtt": ["Bucket", {"Ref": "AttrName"}]}
        });
        let refs = collect_references(&raw);
        let functions: Vec<&str> = refs
            .iter()
            .filter_map(|r| match r {
                Reference::Malformed { function, .. } => Some(function.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(functions, vec!["Fn::GetAtt", "Ref", "Fn::Sub"]);
        assert!(refs.contains(&Reference::Ref("AttrName".to_string())));
        assert!(matches!(
            &refs[0],
            Reference::Malformed { message, .. } if message.contains("expected LogicalId.Attribute")
        ));
    }

    #[test]
    fn pseudo_parameter_names() {
        assert_eq!(
            PseudoParameter::from_name("AWS::NoValue"),
            Some(PseudoParameter::NoValue)
        );
        assert_eq!(PseudoParameter::from_name("AWS::Nope"), None);
    }

    #[test]
    fn collects_references_from_nested_values() {
        let raw = json!({
            "VpcId": {"Ref": "Vpc"},
            "Name": {"Fn::Sub": "${AWS::StackName}-${Bucket.Arn}-${!Literal}"},
            "List": [{"Fn::GetAtt": ["Role", "Arn"]}],
            "Scoped": {"Fn::Sub": ["${Local}", {"Local": {"Ref": "Param"}}]}
        });
        let mut refs = collect_references(&raw);
        refs.sort();
        assert_eq!(
            refs,
            vec![
                Reference::Ref("AWS::StackName".to_string()),
                Reference::Ref("Param".to_string()),
                Reference::Ref("Vpc".to_string()),
                Reference::GetAtt {
                    logical_id: "Bucket".to_string(),
                    attribute: "Arn".to_string()
                },
                Reference::GetAtt {
                    logical_id: "Role".to_string(),
                    attribute: "Arn".to_string()
                },
            ]
        );
    }
}
