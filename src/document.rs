//! Literal content of the mock leave-application document.

/// Label/value lines of the document body, in display order.
pub const CONTENT_LINES: &[&str] = &[
    "Officer Name: P. Ramesh Kumar",
    "Badge Number: AP-2024-001",
    "Station: Vijayawada Central",
    "Leave Type: Medical Leave",
    "From Date: 2024-01-15",
    "To Date: 2024-01-20",
    "Reason: Medical treatment for back injury",
    "Contact Number: +91-9876543210",
];

/// Every string drawn onto the fixture.
///
/// Nothing here is computed: the struct only groups the literals so layout can
/// refer to them by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContent {
    /// Department name in the header band (title font)
    pub department: &'static str,
    /// Subtitle in the header band (body font)
    pub subtitle: &'static str,
    /// Section title above the content lines (title font)
    pub section_title: &'static str,
    /// Label/value lines, drawn top-to-bottom
    pub lines: &'static [&'static str],
    /// The two lines inside the stamp outline
    pub stamp_lines: [&'static str; 2],
    pub signature_line: &'static str,
    pub date_line: &'static str,
}

impl Default for DocumentContent {
    fn default() -> Self {
        Self {
            department: "ANDHRA PRADESH POLICE DEPARTMENT",
            subtitle: "Official Document Sample",
            section_title: "LEAVE APPLICATION",
            lines: CONTENT_LINES,
            stamp_lines: ["OFFICIAL STAMP", "AP Police Dept."],
            signature_line: "Signature: ________________",
            date_line: "Date: 2024-01-10",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_keeps_display_order() {
        let doc = DocumentContent::default();
        assert_eq!(doc.lines.len(), 8);
        assert!(doc.lines[0].starts_with("Officer Name"));
        assert!(doc.lines[7].starts_with("Contact Number"));
        assert_eq!(doc.stamp_lines[0], "OFFICIAL STAMP");
    }
}
