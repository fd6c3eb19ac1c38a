//! Line-oriented XML writing for MAML documents.

const CRLF: &str = "\r\n";
pub(super) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
pub(super) const HELP_ITEMS_OPEN: &str = r#"<helpItems xmlns="http://msh" schema="maml">"#;
pub(super) const COMMAND_OPEN: &str = concat!(
    r#"<command:command "#,
    r#"xmlns:command="http://schemas.microsoft.com/maml/dev/command/2004/10" "#,
    r#"xmlns:maml="http://schemas.microsoft.com/maml/2004/1" "#,
    r#"xmlns:dev="http://schemas.microsoft.com/maml/dev/2004/10" "#,
    r#"xmlns:gl="http://schemas.falchionconsulting.com/maml/gl/2013/02">"#,
);

pub(super) const fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub(super) fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Indented XML writer emitting CRLF-terminated lines, two spaces per level.
pub(super) struct XmlWriter {
    buffer: String,
    indent: usize,
}

impl XmlWriter {
    #[expect(
        clippy::missing_const_for_fn,
        reason = "avoid relying on const-stability details for allocation constructors"
    )]
    pub(super) fn new() -> Self {
        Self {
            buffer: String::new(),
            indent: 0,
        }
    }

    pub(super) const fn indent(&mut self) {
        self.indent += 1;
    }

    pub(super) const fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub(super) fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(line);
        self.buffer.push_str(CRLF);
    }

    /// Opens an element and indents. `tag` may carry attribute text.
    pub(super) fn open(&mut self, tag: &str) {
        self.line(&format!("<{tag}>"));
        self.indent();
    }

    /// Outdents and closes the named element.
    pub(super) fn close(&mut self, name: &str) {
        self.outdent();
        self.line(&format!("</{name}>"));
    }

    /// Writes a self-closing empty element.
    pub(super) fn empty(&mut self, name: &str) {
        self.line(&format!("<{name} />"));
    }

    /// Writes an element with escaped text content, collapsing empty text to
    /// a self-closing element.
    pub(super) fn element(&mut self, name: &str, text: &str) {
        if text.is_empty() {
            self.empty(name);
        } else {
            self.line(&format!("<{name}>{}</{name}>", escape_xml(text)));
        }
    }

    pub(super) fn finish(self) -> String {
        self.buffer
    }
}
