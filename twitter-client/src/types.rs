//! Structured types
use serde::Deserialize;

/// A status (tweet).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Status {
    /// The unique id of the status, as a string.
    pub id_str: String,
    /// The text of the status. Only present when not requested in extended mode.
    #[serde(default)]
    pub text: Option<String>,
    /// The untruncated text of the status. Only present when requested in extended mode.
    #[serde(default)]
    pub full_text: Option<String>,
    /// The id of the status this is a reply to, if any.
    #[serde(default)]
    pub in_reply_to_status_id_str: Option<String>,
    /// The author of the status.
    pub user: User,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// The unique id of the user, as a string.
    pub id_str: String,
    /// The handle of the user, without the leading `@`.
    pub screen_name: String,
    /// The display name of the user.
    #[serde(default)]
    pub name: String,
}

impl Status {
    /// Returns the text of the status, preferring the untruncated text when available.
    #[must_use]
    pub fn text(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_prefer_full_text() {
        let status: Status = serde_json::from_str(
            r#"{"id_str":"20","full_text":"just setting up my twttr","user":{"id_str":"12","screen_name":"jack","name":"jack"}}"#,
        )
        .unwrap();

        assert_eq!(status.text(), "just setting up my twttr");
        assert_eq!(status.user.screen_name, "jack");
    }

    #[test]
    fn it_should_fall_back_to_text() {
        let status: Status = serde_json::from_str(
            r#"{"id_str":"20","text":"short","user":{"id_str":"12","screen_name":"jack"}}"#,
        )
        .unwrap();

        assert_eq!(status.text(), "short");
        assert_eq!(status.in_reply_to_status_id_str, None);
    }
}
