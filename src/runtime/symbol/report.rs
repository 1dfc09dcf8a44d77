use serde::Serialize;

use super::{
    codec::{Decoded, HexBytes, decode},
    describe::Descriptive,
};

/// Serializable summary of a tagged payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolReport {
    pub kind: &'static str,
    /// Space separated hex dump of the whole payload.
    pub bytes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptive: Option<String>,
}

impl SymbolReport {
    pub fn new(tagged: &[u8]) -> Self {
        let decoded = decode(tagged);
        let discriminator = match decoded {
            Decoded::Local { discriminator, .. } => {
                Some(String::from_utf8_lossy(discriminator).into_owned())
            }
            _ => None,
        };
        let description = decoded
            .description()
            .map(|d| String::from_utf8_lossy(d).into_owned());

        Self {
            kind: decoded.tag().name(),
            bytes: HexBytes(tagged).to_string(),
            descriptive: description
                .is_some()
                .then(|| Descriptive(tagged).to_string()),
            description,
            discriminator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_report_serializes_all_parts() {
        let report = SymbolReport::new(b"\x81id\xff1f");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"local","bytes":"81 69 64 ff 31 66","description":"id","discriminator":"1f","descriptive":"Symbol(id)"}"#
        );
    }

    #[test]
    fn plain_string_report_omits_symbol_fields() {
        let report = SymbolReport::new(b"x");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"kind":"string","bytes":"78"}"#);
    }
}
