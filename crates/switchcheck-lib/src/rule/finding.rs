use rowan::TextRange;
use serde::{Serialize, Serializer};
use switchcheck_core::SymbolId;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::ConstructForm;

/// A guarded switch over an enum that does not list every member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The whole switch construct.
    #[serde(serialize_with = "serialize_range")]
    pub range: TextRange,
    pub form: ConstructForm,
    /// Simple name of the enum type.
    pub domain: String,
    /// In declaration order.
    pub missing: Vec<MissingMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingMember {
    pub name: String,
    pub ordinal: u32,
    #[serde(skip)]
    pub symbol: SymbolId,
}

impl Finding {
    /// `Status.Cooking`, `Status.Cooked`, ...
    pub fn missing_labels(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|member| format!("{}.{}", self.domain, member.name))
            .collect()
    }

    pub fn message(&self) -> String {
        let labels: Vec<String> = self
            .missing_labels()
            .into_iter()
            .map(|label| format!("`{label}`"))
            .collect();
        format!("missing {}", labels.join(", "))
    }

    /// Push this finding as a warning. `fix_preview` is the rewritten text of
    /// the construct, shown as a patch.
    pub fn report(&self, diagnostics: &mut Diagnostics, fix_preview: Option<&str>) {
        let mut builder = diagnostics
            .report(DiagnosticKind::NonExhaustiveSwitch, self.range)
            .message(self.message());
        if let Some(replacement) = fix_preview {
            let description = match self.missing.len() {
                1 => "add the missing branch".to_string(),
                n => format!("add the {n} missing branches"),
            };
            builder = builder.fix(description, replacement);
        }
        builder.emit();
    }
}

fn serialize_range<S: Serializer>(range: &TextRange, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;

    let mut state = serializer.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}
