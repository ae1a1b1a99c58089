//! Structured prompt assembly

use serde::{Deserialize, Serialize};

/// Section labels, in the order they appear in the assembled prompt
pub const SECTION_LABELS: [&str; 4] = ["Goal", "Return Format", "Warning", "Context"];

/// The four optional parts of a structured prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSections {
    pub goal: String,
    pub return_format: String,
    pub warning: String,
    pub context: String,
}

impl PromptSections {
    fn values(&self) -> [&str; 4] {
        [&self.goal, &self.return_format, &self.warning, &self.context]
    }

    /// Render non-empty sections as `"<Label>: <text>"`, separated by a blank line.
    ///
    /// Values are trimmed first; a section that is only whitespace is left out.
    pub fn assemble(&self) -> String {
        SECTION_LABELS
            .iter()
            .zip(self.values())
            .filter_map(|(label, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| format!("{label}: {value}"))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_mask(mask: u8) -> PromptSections {
        let pick = |bit: u8, text: &str| {
            if mask & (1 << bit) != 0 {
                text.to_string()
            } else {
                String::new()
            }
        };
        PromptSections {
            goal: pick(0, "summarize the file"),
            return_format: pick(1, "a bullet list"),
            warning: pick(2, "do not invent facts"),
            context: pick(3, "the file is a changelog"),
        }
    }

    #[test]
    fn test_every_subset_of_sections() {
        let texts = [
            "summarize the file",
            "a bullet list",
            "do not invent facts",
            "the file is a changelog",
        ];
        for mask in 1u8..16 {
            let sections = from_mask(mask);
            let expected: Vec<String> = (0..4)
                .filter(|&bit| mask & (1 << bit) != 0)
                .map(|bit| format!("{}: {}", SECTION_LABELS[bit], texts[bit]))
                .collect();
            assert_eq!(sections.assemble(), expected.join("\n\n"), "mask {mask:04b}");
            assert!(!sections.is_empty());
        }
    }

    #[test]
    fn test_all_empty() {
        let sections = PromptSections::default();
        assert!(sections.is_empty());
        assert_eq!(sections.assemble(), "");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let sections = PromptSections {
            goal: "   ".into(),
            context: "\n\t".into(),
            ..Default::default()
        };
        assert!(sections.is_empty());
        assert_eq!(sections.assemble(), "");
    }

    #[test]
    fn test_values_are_trimmed() {
        let sections = PromptSections {
            goal: "  explain lifetimes \n".into(),
            warning: " keep it short".into(),
            ..Default::default()
        };
        assert_eq!(
            sections.assemble(),
            "Goal: explain lifetimes\n\nWarning: keep it short"
        );
    }
}
