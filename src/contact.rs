//! Contact form validation and message rendering.

use serde::Deserialize;
use crate::upstream::OutgoingEmail;
use crate::utils::{ToolError, ToolResult, validate_email};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact request whose fields are all present and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> ToolResult<ContactMessage> {
        let field = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let (Some(name), Some(email), Some(project_type), Some(message)) = (
            field(&self.name),
            field(&self.email),
            field(&self.project_type),
            field(&self.message),
        ) else {
            return Err(ToolError::validation("All fields are required"));
        };

        if !validate_email(&email) {
            return Err(ToolError::validation("Invalid email address"));
        }

        Ok(ContactMessage { name, email, project_type, message })
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("New contact: {}", self.project_type)
    }

    pub fn html_body(&self) -> String {
        let name = escape_html(&self.name);
        let email = escape_html(&self.email);
        let project_type = escape_html(&self.project_type);
        let message = escape_html(&self.message).replace('\n', "<br>");
        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;">
  <div style="max-width: 600px; margin: 0 auto;">
    <div style="background: #172140; color: white; padding: 30px; text-align: center;">
      <h1 style="margin: 0; font-size: 24px;">New Contact Message</h1>
    </div>
    <div style="background: #f8f9fc; padding: 30px;">
      <p><strong>Name</strong><br>{name}</p>
      <p><strong>Email</strong><br><a href="mailto:{email}">{email}</a></p>
      <p><strong>Project type</strong><br>{project_type}</p>
      <p><strong>Message</strong></p>
      <div style="background: white; padding: 20px; border-left: 4px solid #172140;">{message}</div>
    </div>
  </div>
</body>
</html>"#
        )
    }

    pub fn text_body(&self) -> String {
        format!(
            "New contact message\n\nName: {}\nEmail: {}\nProject type: {}\n\nMessage:\n{}",
            self.name, self.email, self.project_type, self.message
        )
    }

    /// The email delivered to the site owner, replying to the sender.
    pub fn to_email(&self) -> OutgoingEmail {
        OutgoingEmail {
            reply_to: self.email.clone(),
            subject: self.subject(),
            html: self.html_body(),
            text: self.text_body(),
        }
    }
}
