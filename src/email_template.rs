use std::borrow::Cow;

/// Marker replaced by the recipient's name in every part of a template.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Subject and bodies of an outgoing email, each holding zero or more
/// [`NAME_PLACEHOLDER`] tokens.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    subject: String,
    text_body: String,
    html_body: String,
}

/// A template with every placeholder substituted, ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl EmailTemplate {
    pub fn new(
        subject: impl Into<String>,
        text_body: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            text_body: text_body.into(),
            html_body: html_body.into(),
        }
    }

    /// The welcome email shipped with the binary.
    pub fn welcome() -> Self {
        Self::new(
            include_str!("../templates/welcome/subject.txt").trim(),
            include_str!("../templates/welcome/body.txt"),
            include_str!("../templates/welcome/body.html"),
        )
    }

    /// Substitutes `name` (trimmed) into all occurrences of the placeholder.
    ///
    /// Subject and text body get the name as is. The HTML body gets it with
    /// markup characters escaped, so a name can't inject tags.
    pub fn render(&self, name: &str) -> RenderedMessage {
        let name = strip_placeholder(name.trim());
        let html_name = htmlescape::encode_minimal(&name);

        RenderedMessage {
            subject: self.subject.replace(NAME_PLACEHOLDER, &name),
            text_body: self.text_body.replace(NAME_PLACEHOLDER, &name),
            html_body: self.html_body.replace(NAME_PLACEHOLDER, &html_name),
        }
    }
}

// A name carrying the token would reintroduce it into the rendered output.
fn strip_placeholder(name: &str) -> Cow<'_, str> {
    let mut name = Cow::Borrowed(name);
    while name.contains(NAME_PLACEHOLDER) {
        name = Cow::Owned(name.replace(NAME_PLACEHOLDER, ""));
    }
    name
}
